//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::session::ProcessedPetition;
use colored::*;
use contestation_domain::{CaseRecord, CaseType, StoredPetition};
use contestation_renderer::Template;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Maximum characters of free text shown in a table cell.
const CELL_WIDTH: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a freshly processed petition: extracted fields and contestation.
    pub fn format_processed(&self, processed: &ProcessedPetition) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "extracted": record_json(&processed.record),
                    "contestation": processed.contestation,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = self.heading("Informações Extraídas");
                out.push('\n');
                out.push_str(&self.format_record_table(&processed.record));
                out.push_str("\n\n");
                out.push_str(&self.heading("Contestação Gerada"));
                out.push('\n');
                out.push_str(&processed.contestation);
                Ok(out)
            }
            OutputFormat::Quiet => Ok(processed.contestation.clone()),
        }
    }

    /// Format stored petitions.
    pub fn format_petitions(&self, petitions: &[StoredPetition]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = petitions.iter().map(petition_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.format_petitions_table(petitions)),
            OutputFormat::Quiet => {
                let ids: Vec<String> = petitions.iter().map(|p| p.id.to_string()).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format one stored petition with its full contestation.
    pub fn format_petition(&self, petition: &StoredPetition) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&petition_json(petition))?),
            OutputFormat::Table => {
                let row = &petition.row;
                let mut builder = Builder::default();
                builder.push_record(["Campo", "Valor"]);
                builder.push_record(["ID", &petition.id.to_string()]);
                builder.push_record(["Autor", &row.author_name]);
                builder.push_record(["Prazo", &row.deadline]);
                builder.push_record(["Valor", &format_value(row.case_value)]);
                builder.push_record(["Tipo de Caso", &row.case_type]);
                builder.push_record(["Descrição", &row.case_description]);
                builder.push_record(["Data de Inclusão", &petition.uploaded_at.to_string()]);

                let mut out = self.styled_table(builder);
                out.push_str("\n\n");
                out.push_str(&self.heading("Modelo Gerado"));
                out.push('\n');
                out.push_str(&row.contestation_model);
                Ok(out)
            }
            OutputFormat::Quiet => Ok(petition.row.contestation_model.clone()),
        }
    }

    /// Format a contestation template.
    pub fn format_template(&self, case_type: CaseType, template: &Template) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "case_type": case_type.label(),
                    "placeholders": template.placeholders(),
                    "template": template.source(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table | OutputFormat::Quiet => Ok(template.source().to_string()),
        }
    }

    fn format_record_table(&self, record: &CaseRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Campo", "Valor"]);
        builder.push_record(["Autor", record.author_display()]);
        builder.push_record(["Prazo", &record.deadline_display()]);
        builder.push_record(["Valor do Caso", &format_value(record.case_value)]);
        builder.push_record(["Tipo de Caso", record.case_type.label()]);
        builder.push_record(["Descrição", record.description_display()]);
        self.styled_table(builder)
    }

    fn format_petitions_table(&self, petitions: &[StoredPetition]) -> String {
        if petitions.is_empty() {
            return self.colorize("No petitions found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Autor", "Prazo", "Valor", "Tipo de Caso", "Descrição"]);

        for petition in petitions {
            let row = &petition.row;
            builder.push_record([
                &petition.id.to_string()[..8],
                &truncate(&row.author_name),
                &row.deadline,
                &format_value(row.case_value),
                &row.case_type,
                &truncate(&row.case_description),
            ]);
        }

        self.styled_table(builder)
    }

    fn styled_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn heading(&self, text: &str) -> String {
        self.colorize(text, "cyan")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Extracted fields keyed the way they are presented to users.
fn record_json(record: &CaseRecord) -> serde_json::Value {
    serde_json::json!({
        "Autor": record.author_display(),
        "Prazo": record.deadline_display(),
        "Valor do Caso": record.case_value,
        "Tipo de Caso": record.case_type.label(),
        "Descricao": record.description_display(),
    })
}

fn petition_json(petition: &StoredPetition) -> serde_json::Value {
    let row = &petition.row;
    serde_json::json!({
        "id": petition.id.to_string(),
        "author_name": row.author_name,
        "deadline": row.deadline,
        "case_value": row.case_value,
        "case_type": row.case_type,
        "case_description": row.case_description,
        "uploaded_at": petition.uploaded_at,
        "raw_text": row.raw_text,
        "contestation_model": row.contestation_model,
    })
}

fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= CELL_WIDTH {
        return text.to_string();
    }
    let mut short: String = text.chars().take(CELL_WIDTH - 1).collect();
    short.push('…');
    short
}
