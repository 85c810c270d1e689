//! Command implementations.

pub mod list;
pub mod process;
pub mod show;
pub mod template;

pub use self::list::execute_list;
pub use self::process::execute_process;
pub use self::show::execute_show;
pub use self::template::execute_template;

use crate::error::{CliError, Result};
use contestation_store::SqliteStore;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Open the petition database, creating its directory when needed.
pub fn open_store(path: &Path) -> Result<SqliteStore> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    debug!("Opening petition database at {}", path.display());
    Ok(SqliteStore::new(path)?)
}

/// Read petition text from a file, or from stdin when `path` is `None` or `-`.
pub fn read_petition(path: Option<&str>) -> Result<String> {
    let bytes = match path {
        Some(path) if path != "-" => fs::read(path)?,
        _ => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    decode_petition(bytes)
}

/// Decode uploaded bytes as UTF-8 petition text.
pub fn decode_petition(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        CliError::InvalidInput(format!(
            "Petition is not valid UTF-8 text (invalid byte at offset {})",
            e.utf8_error().valid_up_to()
        ))
    })
}
