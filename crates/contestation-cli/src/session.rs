//! Per-petition processing state.
//!
//! A session carries one submitted petition through extraction, rendering and
//! saving. Collaborators (extractor, template catalog, store) are passed in by
//! the caller; the session itself owns only the petition and its results.

use contestation_domain::traits::PetitionStore;
use contestation_domain::{CaseRecord, PetitionId};
use contestation_extractor::{Clock, Extractor};
use contestation_renderer::{RenderError, TemplateCatalog};
use std::fmt::Display;
use thiserror::Error;
use tracing::info;

/// Errors raised while driving a petition through the pipeline.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No petition text has been loaded
    #[error("No petition loaded. Load a petition first.")]
    NoPetition,

    /// Save requested before a successful process
    #[error("Process the petition before saving it.")]
    NotProcessed,

    /// Rendering the contestation failed
    #[error("Failed to generate contestation: {0}")]
    Render(#[from] RenderError),

    /// The persistence collaborator rejected the row
    #[error("Failed to save petition: {0}")]
    Store(String),
}

/// Outcome of processing one petition.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedPetition {
    /// Extracted facts
    pub record: CaseRecord,
    /// Rendered contestation document
    pub contestation: String,
}

/// State for one submitted petition.
#[derive(Debug, Default)]
pub struct Session {
    petition: Option<String>,
    processed: Option<ProcessedPetition>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load petition text, discarding any previous results.
    pub fn load(&mut self, text: String) {
        self.petition = Some(text);
        self.processed = None;
    }

    /// Currently loaded petition text.
    pub fn petition(&self) -> Option<&str> {
        self.petition.as_deref()
    }

    /// Results of the last successful process.
    pub fn processed(&self) -> Option<&ProcessedPetition> {
        self.processed.as_ref()
    }

    /// Extract the record and render its contestation.
    ///
    /// A rendering failure leaves the session without processed results, so a
    /// later save cannot persist a half-built petition.
    pub fn process<C: Clock>(
        &mut self,
        extractor: &Extractor<C>,
        catalog: &TemplateCatalog,
    ) -> Result<&ProcessedPetition, SessionError> {
        self.processed = None;
        let text = self.petition.as_deref().ok_or(SessionError::NoPetition)?;

        let record = extractor.extract(text);
        let contestation = catalog.render_record(&record)?;

        Ok(self.processed.insert(ProcessedPetition {
            record,
            contestation,
        }))
    }

    /// Persist the processed petition through the given store.
    pub fn save<S>(&self, store: &mut S) -> Result<PetitionId, SessionError>
    where
        S: PetitionStore,
        S::Error: Display,
    {
        let text = self.petition.as_deref().ok_or(SessionError::NoPetition)?;
        let processed = self.processed.as_ref().ok_or(SessionError::NotProcessed)?;

        let row = processed.record.to_row(text, &processed.contestation);
        let id = store
            .save(row)
            .map_err(|e| SessionError::Store(e.to_string()))?;

        info!("Petition saved as {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contestation_domain::traits::PetitionQuery;
    use contestation_domain::CaseType;
    use contestation_extractor::FixedClock;
    use contestation_renderer::Template;
    use contestation_store::SqliteStore;

    fn extractor() -> Extractor<FixedClock> {
        Extractor::with_clock(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()))
    }

    #[test]
    fn test_process_and_save() {
        let mut session = Session::new();
        session.load("Autor: João Silva\nExtravio de bagagens no voo.\nValor R$ 300,00".to_string());

        let processed = session
            .process(&extractor(), &TemplateCatalog::builtin())
            .unwrap();
        assert_eq!(processed.record.case_type, CaseType::BaggageLoss);
        assert!(processed.contestation.contains("Autor: João Silva  "));

        let mut store = SqliteStore::new(":memory:").unwrap();
        let id = session.save(&mut store).unwrap();

        let stored = store.fetch(id).unwrap();
        assert_eq!(stored.row.author_name, "João Silva");
        assert_eq!(stored.row.case_value, 300.0);
        assert_eq!(stored.row.deadline, "Não encontrado");
        assert_eq!(stored.row.case_type, "Extravio de Bagagens");
        assert_eq!(stored.row.raw_text, session.petition().unwrap());
    }

    #[test]
    fn test_process_without_petition() {
        let mut session = Session::new();
        let result = session.process(&extractor(), &TemplateCatalog::builtin());
        assert!(matches!(result, Err(SessionError::NoPetition)));
    }

    #[test]
    fn test_save_requires_processing() {
        let mut session = Session::new();
        session.load("Autor: X".to_string());

        let mut store = SqliteStore::new(":memory:").unwrap();
        assert!(matches!(session.save(&mut store), Err(SessionError::NotProcessed)));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_render_failure_persists_nothing() {
        let mut catalog = TemplateCatalog::builtin();
        catalog.set(CaseType::Other, Template::new("Processo ${Numero}"));

        let mut session = Session::new();
        session.load("Texto qualquer".to_string());

        let result = session.process(&extractor(), &catalog);
        assert!(matches!(
            result,
            Err(SessionError::Render(RenderError::MissingPlaceholder { .. }))
        ));
        assert!(session.processed().is_none());

        let mut store = SqliteStore::new(":memory:").unwrap();
        assert!(session.save(&mut store).is_err());
        assert!(store.list(&PetitionQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_loading_new_petition_clears_results() {
        let mut session = Session::new();
        session.load("Autor: A".to_string());
        session.process(&extractor(), &TemplateCatalog::builtin()).unwrap();
        assert!(session.processed().is_some());

        session.load("Autor: B".to_string());
        assert!(session.processed().is_none());
    }
}
