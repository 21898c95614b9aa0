//! CLI argument parsing and input resolution

use crate::config::Config;
use crate::{Error, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// pgparams - Rewrite `?` placeholders in db.query() SQL strings to `$n`
#[derive(Parser, Debug)]
#[command(name = "pgparams")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite placeholders in files, in place
    Convert(InputArgs),
    /// Check whether files still contain `?` placeholders (exit code 1 if so)
    Check(InputArgs),
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Call whose string argument holds SQL [default: db.query]
    #[arg(long, value_name = "NAME")]
    pub call: Option<String>,

    /// Config file [default: ./pgparams.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Files to process (overrides `paths` in the config file)
    pub files: Vec<PathBuf>,
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub call: String,
    pub files: Vec<PathBuf>,
}

impl InputArgs {
    /// Merge command-line arguments over the config file
    pub fn resolve(&self) -> Result<Inputs> {
        let config = Config::discover(self.config.as_deref())?;

        let call = self.call.clone().unwrap_or(config.call);
        let files = if self.files.is_empty() {
            config.paths
        } else {
            self.files.clone()
        };

        if files.is_empty() {
            return Err(Error::NoInput);
        }

        Ok(Inputs { call, files })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_convert_with_files() {
        let cli = Cli::try_parse_from(["pgparams", "convert", "a.js", "b.js"]).unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("Expected Convert");
        };
        assert_eq!(args.files, vec![PathBuf::from("a.js"), PathBuf::from("b.js")]);
        assert!(args.call.is_none());
    }

    #[test]
    fn cli_files_override_config_paths() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("pgparams.toml");
        fs::write(&config, "call = \"pool.query\"\npaths = [\"x.js\"]").unwrap();

        let args = InputArgs {
            call: None,
            config: Some(config),
            files: vec![PathBuf::from("y.js")],
        };
        let inputs = args.resolve().unwrap();
        assert_eq!(inputs.call, "pool.query");
        assert_eq!(inputs.files, vec![PathBuf::from("y.js")]);
    }

    #[test]
    fn config_paths_used_when_no_files() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("pgparams.toml");
        fs::write(&config, "paths = [\"x.js\"]").unwrap();

        let args = InputArgs {
            call: Some("conn.query".to_string()),
            config: Some(config),
            files: vec![],
        };
        let inputs = args.resolve().unwrap();
        assert_eq!(inputs.call, "conn.query");
        assert_eq!(inputs.files, vec![temp.path().join("x.js")]);
    }

    #[test]
    fn no_files_anywhere_is_error() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("pgparams.toml");
        fs::write(&config, "").unwrap();

        let args = InputArgs {
            call: None,
            config: Some(config),
            files: vec![],
        };
        assert!(matches!(args.resolve(), Err(Error::NoInput)));
    }
}
