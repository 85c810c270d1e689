//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use contestation_domain::CaseType;

/// Contestation CLI - Extract petition facts and draft contestations.
#[derive(Debug, Parser)]
#[command(name = "contestation")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CONTESTATION_CONFIG")]
    pub config: Option<String>,

    /// Database file path (overrides the configuration)
    #[arg(short, long, global = true, env = "CONTESTATION_DATABASE")]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (document or IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract facts from a petition and generate its contestation
    Process(ProcessArgs),

    /// List processed petitions
    List(ListArgs),

    /// Show one processed petition
    Show(ShowArgs),

    /// Print the contestation template for a case type
    Template(TemplateArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Petition text file (UTF-8)
    pub file: Option<String>,

    /// Read the petition from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Save the processed petition to the database
    #[arg(short, long)]
    pub save: bool,

    /// Date the deadline is counted from (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Filter by case type
    #[arg(short = 't', long, value_enum)]
    pub case_type: Option<CaseTypeArg>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Petition ID
    pub id: String,
}

/// Arguments for the template command.
#[derive(Debug, Parser)]
pub struct TemplateArgs {
    /// Case type whose template to print
    #[arg(value_enum)]
    pub case_type: CaseTypeArg,
}

/// Case type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CaseTypeArg {
    /// Extravio de Bagagens
    BaggageLoss,
    /// Indenização por atraso de voo
    FlightDelay,
    /// Indenização por Danos Morais
    MoralDamages,
    /// Outros
    Other,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CaseTypeArg> for CaseType {
    fn from(case_type: CaseTypeArg) -> Self {
        match case_type {
            CaseTypeArg::BaggageLoss => CaseType::BaggageLoss,
            CaseTypeArg::FlightDelay => CaseType::FlightDelay,
            CaseTypeArg::MoralDamages => CaseType::MoralDamages,
            CaseTypeArg::Other => CaseType::Other,
        }
    }
}
