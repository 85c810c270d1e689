//! Contestation Domain Layer
//!
//! This crate contains the domain model shared by every other layer of the
//! petition processor. It performs no I/O and defines the value objects and
//! trait interfaces that the extractor, renderer, store and CLI depend upon.
//!
//! ## Key Concepts
//!
//! - **CaseRecord**: The structured facts pulled out of one petition
//! - **CaseType**: The closed set of case categories driving template choice
//! - **PetitionRow**: The flat seven-field record handed to persistence
//! - **PetitionStore**: The persistence and listing collaborator boundary
//!
//! ## Absent values
//!
//! Inside the domain every extracted field that may be missing is an
//! `Option`. The literal [`NOT_FOUND`] sentinel only appears when a record is
//! rendered for display, templating or storage.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case_record;
pub mod case_type;
pub mod petition;
pub mod traits;

// Re-exports for convenience
pub use case_record::{CaseRecord, NOT_FOUND};
pub use case_type::CaseType;
pub use petition::{PetitionId, PetitionRow, StoredPetition};
pub use traits::{PetitionQuery, PetitionStore};
