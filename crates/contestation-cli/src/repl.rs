//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The REPL keeps one [`Session`] alive between commands, so a petition can be
//! loaded, processed, inspected and saved step by step.

use crate::commands::{self, open_store, read_petition};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use chrono::NaiveDate;
use contestation_domain::traits::{PetitionQuery, PetitionStore};
use contestation_domain::CaseType;
use contestation_extractor::{Extractor, FixedClock};
use contestation_renderer::TemplateCatalog;
use contestation_store::SqliteStore;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Run the interactive REPL.
pub fn run_repl(
    config: &Config,
    catalog: &TemplateCatalog,
    database: &Path,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Contestation REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = history_path()?;
    let _ = editor.load_history(&history_path);

    let mut state = ReplState {
        session: Session::new(),
        store: None,
        catalog,
        database,
    };

    loop {
        let prompt = if state.session.petition().is_some() {
            "contestation> "
        } else {
            "contestation (no petition)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = state.execute(cmd, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Load(String),
    Process(Option<NaiveDate>),
    Show(Option<String>),
    Save,
    List {
        case_type: Option<CaseType>,
        limit: Option<usize>,
    },
    Template(CaseType),
}

/// State held across REPL commands.
struct ReplState<'a> {
    session: Session,
    store: Option<SqliteStore>,
    catalog: &'a TemplateCatalog,
    database: &'a Path,
}

impl ReplState<'_> {
    fn execute(&mut self, cmd: ReplCommand, formatter: &Formatter) -> Result<()> {
        match cmd {
            ReplCommand::Load(path) => {
                let text = read_petition(Some(&path))?;
                let lines = text.lines().count();
                let blank = text.trim().is_empty();
                self.session.load(text);
                println!(
                    "{}",
                    formatter.success(&format!("Loaded {} ({} lines)", path, lines))
                );
                if blank {
                    println!(
                        "{}",
                        formatter.warning("Petition is empty; no facts can be extracted")
                    );
                }
            }
            ReplCommand::Process(today) => {
                let processed = match today {
                    Some(today) => self
                        .session
                        .process(&Extractor::with_clock(FixedClock(today)), self.catalog)?,
                    None => self.session.process(&Extractor::new(), self.catalog)?,
                };
                println!("{}", formatter.format_processed(processed)?);
            }
            ReplCommand::Show(None) => {
                let processed = self.session.processed().ok_or_else(|| {
                    CliError::InvalidInput(
                        "Nothing processed yet. Use 'process' first.".to_string(),
                    )
                })?;
                println!("{}", formatter.format_processed(processed)?);
            }
            ReplCommand::Show(Some(id)) => {
                let args = crate::cli::ShowArgs { id };
                let store = ensure_store(&mut self.store, self.database)?;
                commands::execute_show(args, store, formatter)?;
            }
            ReplCommand::Save => {
                if self.session.processed().is_none() {
                    return Err(crate::session::SessionError::NotProcessed.into());
                }
                let store = ensure_store(&mut self.store, self.database)?;
                let id = self.session.save(store)?;
                println!("{}", formatter.success(&format!("Petition saved: {}", id)));
            }
            ReplCommand::List { case_type, limit } => {
                let query = PetitionQuery {
                    case_type: case_type.map(|c| c.label().to_string()),
                    limit,
                };
                let petitions = ensure_store(&mut self.store, self.database)?.list(&query)?;
                println!("{}", formatter.format_petitions(&petitions)?);
            }
            ReplCommand::Template(case_type) => {
                println!(
                    "{}",
                    formatter.format_template(case_type, self.catalog.template(case_type))?
                );
            }
            ReplCommand::Exit | ReplCommand::Help => {}
        }

        Ok(())
    }
}

/// Open the database on first use.
fn ensure_store<'s>(
    store: &'s mut Option<SqliteStore>,
    database: &Path,
) -> Result<&'s mut SqliteStore> {
    if store.is_none() {
        *store = Some(open_store(database)?);
    }
    store
        .as_mut()
        .ok_or_else(|| CliError::Config("Database unavailable".to_string()))
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    debug!("REPL command: {:?}", parts);

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "load" => {
            // File names may contain spaces.
            let rest = line["load".len()..].trim();
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: load <file>".to_string()));
            }
            Ok(ReplCommand::Load(rest.to_string()))
        }
        "process" => {
            let today = parts
                .get(1)
                .map(|s| {
                    s.parse::<NaiveDate>().map_err(|_| {
                        CliError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", s))
                    })
                })
                .transpose()?;
            Ok(ReplCommand::Process(today))
        }
        "show" => Ok(ReplCommand::Show(parts.get(1).map(|s| s.to_string()))),
        "save" => Ok(ReplCommand::Save),
        "list" => {
            let case_type = parts.get(1).map(|s| parse_case_type(s)).transpose()?;
            let limit = parts
                .get(2)
                .map(|s| {
                    s.parse::<usize>()
                        .map_err(|_| CliError::InvalidInput(format!("Invalid limit '{}'", s)))
                })
                .transpose()?;
            Ok(ReplCommand::List { case_type, limit })
        }
        "template" => {
            let case_type = parts.get(1).ok_or_else(|| {
                CliError::InvalidInput("Usage: template <case-type>".to_string())
            })?;
            Ok(ReplCommand::Template(parse_case_type(case_type)?))
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

fn parse_case_type(s: &str) -> Result<CaseType> {
    s.parse::<CaseType>().map_err(|e| {
        let valid: Vec<&str> = CaseType::ALL.iter().map(CaseType::slug).collect();
        CliError::InvalidInput(format!("{}. Valid: {}", e, valid.join(", ")))
    })
}

/// Print REPL help.
fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  load <file>                  Load a petition text file");
    println!("  process [YYYY-MM-DD]         Extract facts and generate the contestation");
    println!("  show [id]                    Show the current result, or a saved petition");
    println!("  save                         Save the processed petition");
    println!("  list [case-type] [limit]     List saved petitions");
    println!("  template <case-type>         Print a contestation template");
    println!("  help                         Show this help message");
    println!("  exit                         Exit the REPL");
    println!();
    println!("Case types: baggage-loss, flight-delay, moral-damages, other");
    println!();
}

fn history_path() -> Result<PathBuf> {
    Ok(Config::dir()?.join("history.txt"))
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!(
        "Failed to initialize editor: {}",
        e
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("save").unwrap(), ReplCommand::Save);
        assert_eq!(parse_repl_command("show").unwrap(), ReplCommand::Show(None));
    }

    #[test]
    fn test_parse_load_keeps_spaces() {
        assert_eq!(
            parse_repl_command("load minha peticao.txt").unwrap(),
            ReplCommand::Load("minha peticao.txt".to_string())
        );
        assert!(parse_repl_command("load").is_err());
    }

    #[test]
    fn test_parse_process_date() {
        assert_eq!(
            parse_repl_command("process 2026-10-19").unwrap(),
            ReplCommand::Process(NaiveDate::from_ymd_opt(2026, 10, 19))
        );
        assert!(parse_repl_command("process 19/10/2026").is_err());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_repl_command("list flight-delay 3").unwrap(),
            ReplCommand::List {
                case_type: Some(CaseType::FlightDelay),
                limit: Some(3),
            }
        );
        assert!(parse_repl_command("list holidays").is_err());
    }

    #[test]
    fn test_parse_case_type_slug_or_label() {
        assert_eq!(
            parse_repl_command("template MORAL-DAMAGES").unwrap(),
            ReplCommand::Template(CaseType::MoralDamages)
        );
        assert_eq!(
            parse_repl_command("list outros").unwrap(),
            ReplCommand::List {
                case_type: Some(CaseType::Other),
                limit: None,
            }
        );
        match parse_repl_command("template bagagem") {
            Err(CliError::InvalidInput(message)) => {
                assert!(message.contains("Invalid case type: bagagem"));
                assert!(message.contains("baggage-loss, flight-delay, moral-damages, other"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!(parse_repl_command("upload x").is_err());
    }

    #[test]
    fn test_state_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let petition = dir.path().join("peticao.txt");
        std::fs::write(&petition, "Autor: Pedro\nDanos morais.\nR$ 1.000,00").unwrap();
        let database = dir.path().join("petitions.db");
        let catalog = TemplateCatalog::builtin();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let mut state = ReplState {
            session: Session::new(),
            store: None,
            catalog: &catalog,
            database: &database,
        };

        assert!(state.execute(ReplCommand::Save, &formatter).is_err());
        assert!(!database.exists());

        let path = petition.to_string_lossy().to_string();
        state.execute(ReplCommand::Load(path), &formatter).unwrap();
        state
            .execute(ReplCommand::Process(NaiveDate::from_ymd_opt(2026, 10, 19)), &formatter)
            .unwrap();
        state.execute(ReplCommand::Save, &formatter).unwrap();

        let petitions = ensure_store(&mut state.store, &database)
            .unwrap()
            .list(&PetitionQuery::default())
            .unwrap();
        assert_eq!(petitions.len(), 1);
        assert_eq!(petitions[0].row.case_type, "Indenização por Danos Morais");
    }
}
