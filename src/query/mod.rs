//! Query-call recognition
//!
//! A query call is the textual shape `db.query(<quote><sql><quote>`. This
//! module works in two passes over a source text:
//! 1. Extract: locate every query call and split it into prefix, SQL body and suffix
//! 2. Reintegrate: splice rewritten bodies back into the source at their spans

pub mod extract;
pub mod reintegrate;

use crate::{Error, Result};
use regex::Regex;
use std::ops::Range;

/// Call name recognised when none is configured
pub const DEFAULT_CALL: &str = "db.query";

/// Quote style delimiting an SQL body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `` `...` `` template literal
    Backtick,
    /// `"..."`
    Double,
    /// `'...'`
    Single,
}

impl Quote {
    fn from_delimiter(s: &str) -> Option<Self> {
        QUOTES.into_iter().find(|q| s.starts_with(q.as_char()))
    }

    pub fn as_char(self) -> char {
        match self {
            Quote::Backtick => '`',
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

const QUOTES: [Quote; 3] = [Quote::Backtick, Quote::Double, Quote::Single];

/// A located query call inside a source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCall<'a> {
    /// Byte span of the whole call region in the source
    pub span: Range<usize>,
    /// Call name, parenthesis and opening quote
    pub prefix: &'a str,
    /// The SQL text between the quotes
    pub body: &'a str,
    /// The closing quote
    pub suffix: &'a str,
    /// Quote style of both delimiters
    pub quote: Quote,
}

/// Compiled matcher for one call name
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    call: String,
    regex: Regex,
}

impl QueryMatcher {
    /// Build a matcher for the given call name, matched literally.
    ///
    /// The body closes at the first quote character of any style. Only a
    /// closing quote equal to the opening one makes a query call, so
    /// `db.query("...')` is skipped.
    pub fn new(call: &str) -> Result<Self> {
        let call = call.trim();
        if call.is_empty() {
            return Err(Error::Pattern {
                message: "call name must not be empty".to_string(),
            });
        }

        let pattern = format!(
            r#"{}\s*\(\s*(?P<open>[`"'])(?P<body>[^`"']*)(?P<close>[`"'])"#,
            regex::escape(call)
        );
        let regex = Regex::new(&pattern).map_err(|e| Error::Pattern {
            message: e.to_string(),
        })?;

        Ok(Self {
            call: call.to_string(),
            regex,
        })
    }

    /// The call name this matcher recognises
    pub fn call(&self) -> &str {
        &self.call
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Locate every query call in `source`
pub fn find_query_calls<'a>(matcher: &QueryMatcher, source: &'a str) -> Vec<QueryCall<'a>> {
    extract::extract(matcher, source)
}

/// Rebuild `source` with each rewrite's span replaced by its text
pub fn reintegrate_queries(source: &str, rewrites: &[reintegrate::Rewrite]) -> String {
    reintegrate::reintegrate(source, rewrites)
}
