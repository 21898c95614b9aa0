//! Placeholder rewriting over whole source texts
//!
//! Finds every query call, renumbers the placeholders in its SQL body and
//! splices the result back into the text.

pub mod file;

pub use file::{check_file, convert_file, FileReport};

use crate::error::offset_to_line_col;
use crate::placeholder;
use crate::query::reintegrate::Rewrite;
use crate::query::{self, QueryMatcher};
use tracing::{debug, Level};

/// Result of converting one source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The transformed text
    pub output: String,
    /// Query calls recognised in the input
    pub calls: usize,
    /// Query calls whose body contained at least one placeholder
    pub rewritten: usize,
    /// Placeholders renumbered across all calls
    pub placeholders: usize,
}

impl Conversion {
    /// Whether the output differs from the input
    pub fn changed(&self) -> bool {
        self.placeholders > 0
    }
}

/// Rewrite `?` placeholders to `$n` inside every query call in `source`
pub fn convert_source(matcher: &QueryMatcher, source: &str) -> Conversion {
    let calls = query::find_query_calls(matcher, source);
    let mut rewrites = Vec::new();
    let mut placeholders = 0;

    for call in &calls {
        let count = placeholder::count_placeholders(call.body);
        if count == 0 {
            continue;
        }

        if tracing::enabled!(Level::DEBUG) {
            let (line, col) = offset_to_line_col(source, call.span.start);
            debug!(line, col, count, quote = %call.quote.as_char(), "renumbering query placeholders");
        }

        let body = placeholder::renumber(call.body);
        rewrites.push(Rewrite {
            span: call.span.clone(),
            text: format!("{}{}{}", call.prefix, body, call.suffix),
        });
        placeholders += count;
    }

    let output = if rewrites.is_empty() {
        source.to_string()
    } else {
        query::reintegrate_queries(source, &rewrites)
    };

    Conversion {
        output,
        calls: calls.len(),
        rewritten: rewrites.len(),
        placeholders,
    }
}
