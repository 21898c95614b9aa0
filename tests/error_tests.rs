//! Error handling tests for pgparams
//!
//! File access, configuration and call-name errors.

use pgparams::config::Config;
use pgparams::rewriter::{check_file, convert_file};
use pgparams::{Error, QueryMatcher, DEFAULT_CALL};
use std::fs;
use tempfile::TempDir;

mod file_errors {
    use super::*;

    #[test]
    fn missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.js");
        let matcher = QueryMatcher::new(DEFAULT_CALL).unwrap();

        let err = convert_file(&matcher, &path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("index.js"));
    }

    #[test]
    fn directory_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        let matcher = QueryMatcher::new(DEFAULT_CALL).unwrap();

        assert!(matches!(
            check_file(&matcher, temp.path()),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn non_utf8_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.js");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x3f]).unwrap();
        let matcher = QueryMatcher::new(DEFAULT_CALL).unwrap();

        assert!(matches!(
            convert_file(&matcher, &path),
            Err(Error::Io { .. })
        ));
    }
}

mod config_errors {
    use super::*;

    #[test]
    fn invalid_toml() {
        assert!(matches!(
            Config::from_toml("paths = ["),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn wrong_type_for_paths() {
        assert!(matches!(
            Config::from_toml("paths = \"index.js\""),
            Err(Error::Config { .. })
        ));
    }
}

mod matcher_errors {
    use super::*;

    #[test]
    fn empty_call_name() {
        assert!(matches!(QueryMatcher::new(""), Err(Error::Pattern { .. })));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let matcher = QueryMatcher::new("q(").unwrap();
        let conversion = pgparams::convert_source(&matcher, "q(('SELECT ?')");
        assert_eq!(conversion.output, "q(('SELECT $1')");
    }
}
