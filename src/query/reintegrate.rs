//! Query-call reintegration
//!
//! Rebuilds the source text with rewritten call regions in place.

use std::ops::Range;

/// Replacement text for one call region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub span: Range<usize>,
    pub text: String,
}

/// Copy `source` into a new buffer, substituting each rewrite at its span.
///
/// Rewrites must be disjoint and sorted by start offset, as extraction yields them.
pub fn reintegrate(source: &str, rewrites: &[Rewrite]) -> String {
    let mut result = String::with_capacity(source.len() + rewrites.len() * 4);
    let mut last = 0;

    for rewrite in rewrites {
        result.push_str(&source[last..rewrite.span.start]);
        result.push_str(&rewrite.text);
        last = rewrite.span.end;
    }
    result.push_str(&source[last..]);

    result
}
