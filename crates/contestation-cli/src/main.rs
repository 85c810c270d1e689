//! Contestation CLI - Draft contestations from petition text.

use clap::Parser;
use contestation_cli::commands;
use contestation_cli::repl;
use contestation_cli::{Cli, Command, Config, Formatter};
use contestation_renderer::TemplateCatalog;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> contestation_cli::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load_or_init(&Config::path()?)?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let database = match &cli.database {
        Some(path) => PathBuf::from(path),
        None => config.database_path()?,
    };

    let catalog = match &config.templates_dir {
        Some(dir) => {
            info!("Loading template overrides from {}", dir.display());
            TemplateCatalog::builtin().with_overrides_from_dir(dir)?
        }
        None => TemplateCatalog::builtin(),
    };

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &catalog, &database, &formatter)?;
        }
        Some(Command::Process(args)) => {
            commands::execute_process(args, &catalog, &database, &formatter)?;
        }
        Some(Command::Template(args)) => {
            commands::execute_template(args, &catalog, &formatter)?;
        }
        Some(cmd) => {
            // Commands that read saved petitions
            let store = commands::open_store(&database)?;

            match cmd {
                Command::List(args) => {
                    commands::execute_list(args, &store, &formatter)?;
                }
                Command::Show(args) => {
                    commands::execute_show(args, &store, &formatter)?;
                }
                _ => unreachable!(),
            }
        }
    }

    Ok(())
}
