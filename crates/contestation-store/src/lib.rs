//! Contestation Storage Layer
//!
//! Implements the PetitionStore trait on SQLite. This is the persistence and
//! listing collaborator: it appends processed petitions and reads them back
//! for display.
//!
//! # Examples
//!
//! ```no_run
//! use contestation_store::SqliteStore;
//!
//! let store = SqliteStore::new("petitions.db").unwrap();
//! // Store is now ready to save and list petitions
//! ```

#![warn(missing_docs)]

use contestation_domain::traits::{PetitionQuery, PetitionStore};
use contestation_domain::{PetitionId, PetitionRow, StoredPetition};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Petition not found
    #[error("Petition not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const SELECT_COLUMNS: &str = "SELECT id, raw_text, author_name, deadline, case_value, case_type,
            case_description, contestation_model, uploaded_at
     FROM petitions";

/// SQLite-based implementation of PetitionStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Get a stored petition by ID, failing when it does not exist
    pub fn fetch(&self, id: PetitionId) -> Result<StoredPetition, StoreError> {
        self.get(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Number of stored petitions
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM petitions", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|e| StoreError::InvalidData(e.to_string()))
    }

    /// Convert PetitionId to bytes for storage
    fn petition_id_to_bytes(id: PetitionId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to PetitionId
    fn bytes_to_petition_id(bytes: &[u8]) -> Result<PetitionId, StoreError> {
        let arr: [u8; 16] = bytes.try_into().map_err(|_| {
            StoreError::InvalidData(format!(
                "Expected 16 bytes for PetitionId, got {}",
                bytes.len()
            ))
        })?;
        Ok(PetitionId::from_value(u128::from_be_bytes(arr)))
    }

    fn row_to_petition(row: &Row<'_>) -> rusqlite::Result<StoredPetition> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_petition_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        Ok(StoredPetition {
            id,
            row: PetitionRow {
                raw_text: row.get(1)?,
                author_name: row.get(2)?,
                deadline: row.get(3)?,
                case_value: row.get(4)?,
                case_type: row.get(5)?,
                case_description: row.get(6)?,
                contestation_model: row.get(7)?,
            },
            uploaded_at: row.get::<_, i64>(8)? as u64,
        })
    }
}

impl PetitionStore for SqliteStore {
    type Error = StoreError;

    fn save(&mut self, row: PetitionRow) -> Result<PetitionId, Self::Error> {
        let id = PetitionId::new();
        let uploaded_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        self.conn.execute(
            "INSERT INTO petitions (id, raw_text, author_name, deadline, case_value, case_type,
                                    case_description, contestation_model, uploaded_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                Self::petition_id_to_bytes(id),
                &row.raw_text,
                &row.author_name,
                &row.deadline,
                row.case_value,
                &row.case_type,
                &row.case_description,
                &row.contestation_model,
                uploaded_at as i64,
            ],
        )?;

        info!("Saved petition {} ({})", id, row.case_type);
        Ok(id)
    }

    fn get(&self, id: PetitionId) -> Result<Option<StoredPetition>, Self::Error> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let petition = self
            .conn
            .query_row(&sql, params![Self::petition_id_to_bytes(id)], Self::row_to_petition)
            .optional()?;

        Ok(petition)
    }

    fn list(&self, query: &PetitionQuery) -> Result<Vec<StoredPetition>, Self::Error> {
        let mut sql = format!("{} WHERE 1=1", SELECT_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(case_type) = &query.case_type {
            sql.push_str(" AND case_type = ?");
            params.push(Box::new(case_type.clone()));
        }

        sql.push_str(" ORDER BY uploaded_at, rowid");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            params.push(Box::new(i64::try_from(limit).unwrap_or(i64::MAX)));
        }

        debug!("Listing petitions: {}", sql);

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let petitions = stmt
            .query_map(&param_refs[..], Self::row_to_petition)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(petitions)
    }
}
