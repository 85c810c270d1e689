//! Petition module - the flat records exchanged with persistence

use std::fmt;

/// Unique identifier for a stored petition based on UUIDv7
///
/// UUIDv7 keeps identifiers chronologically sortable, so listing by id
/// matches listing by upload time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PetitionId(u128);

impl PetitionId {
    /// Generate a new UUIDv7-based PetitionId
    ///
    /// # Examples
    ///
    /// ```
    /// use contestation_domain::PetitionId;
    ///
    /// let id = PetitionId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a PetitionId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a PetitionId from its hyphenated UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid petition id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PetitionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Flat record accepted by the persistence collaborator
///
/// Absent values are already rendered as the `NOT_FOUND` sentinel here.
#[derive(Debug, Clone, PartialEq)]
pub struct PetitionRow {
    /// Full petition text as submitted
    pub raw_text: String,

    /// Extracted author
    pub author_name: String,

    /// Deadline as `YYYY-MM-DD` or the sentinel
    pub deadline: String,

    /// Monetary value of the case
    pub case_value: f64,

    /// Case type label
    pub case_type: String,

    /// Extracted description
    pub case_description: String,

    /// Rendered contestation document
    pub contestation_model: String,
}

/// A petition row as read back by the listing collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPetition {
    /// Identifier assigned on save
    pub id: PetitionId,

    /// Stored fields
    pub row: PetitionRow,

    /// When the row was saved (Unix seconds)
    pub uploaded_at: u64,
}
