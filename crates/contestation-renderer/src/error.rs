//! Error types for the Renderer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering a contestation
#[derive(Error, Debug)]
pub enum RenderError {
    /// The template references a placeholder that was not supplied
    #[error("Missing placeholder: {name}")]
    MissingPlaceholder {
        /// Placeholder name as written in the template
        name: String,
    },

    /// A `$` that starts neither an escape nor a valid placeholder
    #[error("Invalid placeholder in template: line {line}, col {column}")]
    InvalidPlaceholder {
        /// 1-based line of the offending `$`
        line: usize,
        /// Column just past the offending `$` on that line
        column: usize,
    },

    /// A template override could not be read
    #[error("Template I/O error for {}: {source}", path.display())]
    Io {
        /// File or directory being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
