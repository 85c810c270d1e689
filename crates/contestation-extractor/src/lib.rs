//! Contestation Extractor
//!
//! Turns the free text of a petition into a [`CaseRecord`] using a fixed set
//! of deterministic text rules.
//!
//! # Overview
//!
//! Each rule is an independent scan over the whole document:
//!
//! - **Author**: first `Autor:` / `Autora:` line, case-insensitive
//! - **Deadline**: `N dias úteis` added to today's date as calendar days
//! - **Case value**: `R$ 1.234,56` amounts, accumulated until the running
//!   total becomes positive
//! - **Case type**: baggage loss, then flight delay (`voo` and `atraso` on the
//!   same line), then moral damages, else other
//! - **Description**: last three `\n`-separated lines joined by `". "`
//!
//! Extraction never fails. A rule that finds nothing degrades to `None`
//! (or zero for the case value).
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → CaseRecord → Renderer → contestation
//! ```
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use contestation_extractor::{Extractor, FixedClock};
//! use contestation_domain::CaseType;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let extractor = Extractor::with_clock(FixedClock(today));
//!
//! let record = extractor.extract("Autora: Ana Lima\nPrazo de 15 dias úteis.\nHouve extravio de bagagens.");
//!
//! assert_eq!(record.author.as_deref(), Some("Ana Lima"));
//! assert_eq!(record.deadline, NaiveDate::from_ymd_opt(2026, 11, 3));
//! assert_eq!(record.case_type, CaseType::BaggageLoss);
//! ```
//!
//! # Known simplifications
//!
//! "Business days" are counted as calendar days, so the deadline is only
//! stable within one calendar day: extracting the same text on two different
//! days yields different deadlines.

#![warn(missing_docs)]

mod clock;
mod extractor;
mod patterns;
mod rules;


pub use clock::{Clock, FixedClock, SystemClock};
pub use contestation_domain::CaseRecord;
pub use extractor::Extractor;
pub use rules::{
    classify_case, extract_author, extract_case_value, extract_deadline, extract_description,
};
