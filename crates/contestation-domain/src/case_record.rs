//! Case record module - the structured facts extracted from a petition

use crate::case_type::CaseType;
use crate::petition::PetitionRow;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Display value for any field the extractor could not find
pub const NOT_FOUND: &str = "Não encontrado";

/// Placeholder name carrying the author in contestation templates
pub const AUTHOR_PLACEHOLDER: &str = "Autor";

/// Placeholder name carrying the description in contestation templates
pub const DESCRIPTION_PLACEHOLDER: &str = "Descricao";

/// Structured facts extracted from one petition
///
/// Records are created once per document and never mutated afterwards;
/// the renderer and the persistence collaborator only read them.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    /// Name of the plaintiff ("Autor"/"Autora" line)
    pub author: Option<String>,

    /// Response deadline computed from "N dias úteis"
    pub deadline: Option<NaiveDate>,

    /// Monetary value of the case, zero when no amount was found
    pub case_value: f64,

    /// Case category
    pub case_type: CaseType,

    /// Summary built from the closing lines of the petition
    pub description: Option<String>,
}

impl CaseRecord {
    /// Author as shown to users, or the sentinel
    pub fn author_display(&self) -> &str {
        self.author.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Deadline formatted as `YYYY-MM-DD`, or the sentinel
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use contestation_domain::{CaseRecord, CaseType};
    ///
    /// let record = CaseRecord {
    ///     author: None,
    ///     deadline: NaiveDate::from_ymd_opt(2026, 10, 30),
    ///     case_value: 0.0,
    ///     case_type: CaseType::Other,
    ///     description: None,
    /// };
    /// assert_eq!(record.deadline_display(), "2026-10-30");
    /// ```
    pub fn deadline_display(&self) -> String {
        match self.deadline {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => NOT_FOUND.to_string(),
        }
    }

    /// Description as shown to users, or the sentinel
    pub fn description_display(&self) -> &str {
        self.description.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Values for the named template placeholders
    pub fn placeholders(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (AUTHOR_PLACEHOLDER, self.author_display().to_string()),
            (DESCRIPTION_PLACEHOLDER, self.description_display().to_string()),
        ])
    }

    /// Flatten into the row handed to the persistence collaborator
    pub fn to_row(&self, raw_text: &str, contestation: &str) -> PetitionRow {
        PetitionRow {
            raw_text: raw_text.to_string(),
            author_name: self.author_display().to_string(),
            deadline: self.deadline_display(),
            case_value: self.case_value,
            case_type: self.case_type.label().to_string(),
            case_description: self.description_display().to_string(),
            contestation_model: contestation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_record() -> CaseRecord {
        CaseRecord {
            author: None,
            deadline: None,
            case_value: 0.0,
            case_type: CaseType::Other,
            description: None,
        }
    }

    #[test]
    fn test_absent_fields_render_as_sentinel() {
        let record = empty_record();
        assert_eq!(record.author_display(), NOT_FOUND);
        assert_eq!(record.deadline_display(), NOT_FOUND);
        assert_eq!(record.description_display(), NOT_FOUND);
    }

    #[test]
    fn test_placeholders() {
        let record = CaseRecord {
            author: Some("João Silva".to_string()),
            ..empty_record()
        };
        let placeholders = record.placeholders();
        assert_eq!(placeholders.len(), 2);
        assert_eq!(placeholders["Autor"], "João Silva");
        assert_eq!(placeholders["Descricao"], NOT_FOUND);
    }

    #[test]
    fn test_to_row() {
        let record = CaseRecord {
            author: Some("Maria Souza".to_string()),
            deadline: NaiveDate::from_ymd_opt(2026, 1, 5),
            case_value: 1234.56,
            case_type: CaseType::BaggageLoss,
            description: Some("Mala extraviada.".to_string()),
        };
        let row = record.to_row("texto", "modelo");

        assert_eq!(row.raw_text, "texto");
        assert_eq!(row.author_name, "Maria Souza");
        assert_eq!(row.deadline, "2026-01-05");
        assert_eq!(row.case_value, 1234.56);
        assert_eq!(row.case_type, "Extravio de Bagagens");
        assert_eq!(row.case_description, "Mala extraviada.");
        assert_eq!(row.contestation_model, "modelo");
    }
}
