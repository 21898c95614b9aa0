//! Error types for pgparams

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pgparams operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pgparams
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    #[diagnostic(code(pgparams::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(pgparams::config_error))]
    Config { message: String },

    #[error("Invalid call name: {message}")]
    #[diagnostic(code(pgparams::pattern_error))]
    Pattern { message: String },

    #[error("No input files given (pass paths or list them in pgparams.toml)")]
    #[diagnostic(code(pgparams::no_input))]
    NoInput,
}

impl Error {
    /// Wrap an I/O failure with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Calculate line and column number from byte offset
pub fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, c) in input.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}
