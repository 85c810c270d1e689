//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{PetitionId, PetitionRow, StoredPetition};

/// Trait for persisting and listing processed petitions
///
/// Implemented by the infrastructure layer (contestation-store). Connectivity,
/// retries and transactions are the implementation's concern.
pub trait PetitionStore {
    /// Error type for store operations
    type Error;

    /// Append a processed petition to the durable store
    fn save(&mut self, row: PetitionRow) -> Result<PetitionId, Self::Error>;

    /// Get a stored petition by ID
    fn get(&self, id: PetitionId) -> Result<Option<StoredPetition>, Self::Error>;

    /// List stored petitions matching criteria, oldest first
    fn list(&self, query: &PetitionQuery) -> Result<Vec<StoredPetition>, Self::Error>;
}

/// Query criteria for listing stored petitions
#[derive(Debug, Clone, Default)]
pub struct PetitionQuery {
    /// Filter by case type label
    pub case_type: Option<String>,

    /// Maximum results to return
    pub limit: Option<usize>,
}
