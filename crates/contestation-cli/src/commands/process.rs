//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::commands::{open_store, read_petition};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use contestation_extractor::{Clock, Extractor, FixedClock};
use contestation_renderer::TemplateCatalog;
use std::path::Path;

/// Execute the process command.
pub fn execute_process(
    args: ProcessArgs,
    catalog: &TemplateCatalog,
    database: &Path,
    formatter: &Formatter,
) -> Result<()> {
    if args.stdin && args.file.is_some() {
        return Err(CliError::InvalidInput(
            "Give either a petition file or --stdin, not both".to_string(),
        ));
    }
    if !args.stdin && args.file.is_none() {
        return Err(CliError::InvalidInput(
            "No petition given. Pass a file or use --stdin".to_string(),
        ));
    }

    let mut session = Session::new();
    session.load(read_petition(args.file.as_deref())?);

    match args.today {
        Some(today) => {
            let extractor = Extractor::with_clock(FixedClock(today));
            process_with(&mut session, &extractor, catalog)?
        }
        None => process_with(&mut session, &Extractor::new(), catalog)?,
    }

    if let Some(processed) = session.processed() {
        println!("{}", formatter.format_processed(processed)?);
    }

    if args.save {
        let mut store = open_store(database)?;
        let id = session.save(&mut store)?;
        eprintln!("{}", formatter.success(&format!("Petition saved: {}", id)));
    }

    Ok(())
}

fn process_with<C: Clock>(
    session: &mut Session,
    extractor: &Extractor<C>,
    catalog: &TemplateCatalog,
) -> Result<()> {
    session.process(extractor, catalog)?;
    Ok(())
}
