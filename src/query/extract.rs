//! Query-call extraction from source text
//!
//! Splits each matched call into the fixed prefix, the SQL body and the
//! closing quote, keeping byte spans so the body can be spliced back later.

use super::{Quote, QueryCall, QueryMatcher};

/// Find all query calls in `source`, in order of appearance
pub fn extract<'a>(matcher: &QueryMatcher, source: &'a str) -> Vec<QueryCall<'a>> {
    let mut calls = Vec::new();
    let mut pos = 0;

    while let Some(caps) = matcher.regex().captures_at(source, pos) {
        let (Some(whole), Some(open), Some(body), Some(close)) = (
            caps.get(0),
            caps.name("open"),
            caps.name("body"),
            caps.name("close"),
        ) else {
            break;
        };

        // A closing quote of another style ends the candidate; resume
        // scanning just past its opening quote.
        if open.as_str() != close.as_str() {
            pos = open.end();
            continue;
        }
        let Some(quote) = Quote::from_delimiter(open.as_str()) else {
            pos = open.end();
            continue;
        };

        calls.push(QueryCall {
            span: whole.range(),
            prefix: &source[whole.start()..body.start()],
            body: body.as_str(),
            suffix: close.as_str(),
            quote,
        });
        pos = whole.end();
    }

    calls
}
