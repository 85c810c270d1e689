//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use contestation_domain::traits::{PetitionQuery, PetitionStore};
use contestation_domain::CaseType;
use contestation_store::SqliteStore;

/// Execute the list command.
pub fn execute_list(args: ListArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let query = PetitionQuery {
        case_type: args
            .case_type
            .map(|case_type| CaseType::from(case_type).label().to_string()),
        limit: args.limit,
    };

    let petitions = store.list(&query)?;
    println!("{}", formatter.format_petitions(&petitions)?);

    Ok(())
}
