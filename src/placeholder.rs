//! Positional placeholder renumbering
//!
//! Turns every `?` in an SQL body into `$1`, `$2`, ... in reading order.

use std::borrow::Cow;

/// The positional placeholder character recognised in SQL bodies
pub const PLACEHOLDER: char = '?';

/// Prefix of a numbered placeholder token
pub const NUMBERED_PREFIX: char = '$';

/// Count positional placeholders in an SQL body
pub fn count_placeholders(sql: &str) -> usize {
    sql.matches(PLACEHOLDER).count()
}

/// Replace each `?` with `$n`, numbering from 1 left to right.
///
/// Bodies without placeholders are returned borrowed and untouched.
pub fn renumber(sql: &str) -> Cow<'_, str> {
    if !sql.contains(PLACEHOLDER) {
        return Cow::Borrowed(sql);
    }

    let mut result = String::with_capacity(sql.len() + 8);
    let mut index = 0usize;
    let mut last = 0;

    for (pos, _) in sql.match_indices(PLACEHOLDER) {
        index += 1;
        result.push_str(&sql[last..pos]);
        result.push(NUMBERED_PREFIX);
        result.push_str(&index.to_string());
        last = pos + PLACEHOLDER.len_utf8();
    }
    result.push_str(&sql[last..]);

    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count_placeholders("a = ? AND b = ?"), 2);
        assert_eq!(count_placeholders("SELECT 1"), 0);
    }

    #[test]
    fn test_renumber_two() {
        assert_eq!(
            renumber("SELECT * FROM t WHERE a=? AND b=?"),
            "SELECT * FROM t WHERE a=$1 AND b=$2"
        );
    }

    #[test]
    fn test_renumber_without_placeholders_borrows() {
        assert!(matches!(renumber("SELECT * FROM t"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_renumber_adjacent() {
        assert_eq!(renumber("??"), "$1$2");
    }

    #[test]
    fn test_renumber_keeps_multibyte_text() {
        assert_eq!(renumber("nombre = ? -- año"), "nombre = $1 -- año");
    }

    #[test]
    fn test_renumber_past_nine() {
        let sql = vec!["?"; 12].join(",");
        let expected = (1..=12).map(|i| format!("${}", i)).collect::<Vec<_>>().join(",");
        assert_eq!(renumber(&sql), expected);
    }
}
