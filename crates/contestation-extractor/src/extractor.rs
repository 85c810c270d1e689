//! Core Extractor implementation

use crate::clock::{Clock, SystemClock};
use crate::rules::{
    classify_case, extract_author, extract_case_value, extract_deadline, extract_description,
};
use chrono::NaiveDate;
use contestation_domain::CaseRecord;
use tracing::info;

/// The Extractor converts petition text into a structured case record
///
/// The clock decides what "today" is when a deadline is computed.
#[derive(Debug, Clone, Default)]
pub struct Extractor<C = SystemClock> {
    clock: C,
}

impl Extractor<SystemClock> {
    /// Create an Extractor that dates deadlines from the local calendar
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Extractor<C> {
    /// Create an Extractor with a specific clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Extract a case record from petition text
    pub fn extract(&self, text: &str) -> CaseRecord {
        self.extract_on(text, self.clock.today())
    }

    /// Extract a case record, computing the deadline from the given date
    pub fn extract_on(&self, text: &str, today: NaiveDate) -> CaseRecord {
        let record = CaseRecord {
            author: extract_author(text),
            deadline: extract_deadline(text, today),
            case_value: extract_case_value(text),
            case_type: classify_case(text),
            description: extract_description(text),
        };

        info!(
            "Extracted petition: type '{}', value {}, author {}, deadline {}",
            record.case_type,
            record.case_value,
            if record.author.is_some() { "found" } else { "missing" },
            record.deadline_display(),
        );

        record
    }
}
