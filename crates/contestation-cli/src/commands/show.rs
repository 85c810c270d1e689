//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use contestation_domain::PetitionId;
use contestation_store::{SqliteStore, StoreError};

/// Execute the show command.
pub fn execute_show(args: ShowArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let id = PetitionId::from_string(&args.id).map_err(CliError::InvalidInput)?;

    let petition = store.fetch(id).map_err(|e| match e {
        StoreError::NotFound(id) => CliError::NotFound(id),
        other => CliError::Store(other),
    })?;
    println!("{}", formatter.format_petition(&petition)?);

    Ok(())
}
