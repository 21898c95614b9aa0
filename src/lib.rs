//! pgparams - Rewrite positional `?` placeholders to PostgreSQL `$n` parameters
//!
//! Scans source files for `db.query(...)` calls with a string-literal SQL
//! argument and renumbers the placeholders inside each SQL body.

pub mod cli;
pub mod config;
pub mod error;
pub mod placeholder;
pub mod query;
pub mod rewriter;

pub use error::{Error, Result};
pub use query::{QueryCall, QueryMatcher, DEFAULT_CALL};
pub use rewriter::{convert_source, Conversion};

/// Convert every `db.query` call in a source string
pub fn convert(input: &str) -> Result<String> {
    let matcher = QueryMatcher::new(DEFAULT_CALL)?;
    Ok(convert_source(&matcher, input).output)
}

/// Check if a source string has no placeholders left to convert
pub fn check(input: &str) -> Result<bool> {
    let matcher = QueryMatcher::new(DEFAULT_CALL)?;
    Ok(!convert_source(&matcher, input).changed())
}
