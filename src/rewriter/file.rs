//! File-level conversion: load, transform, save

use super::{convert_source, Conversion};
use crate::error::{Error, Result};
use crate::query::QueryMatcher;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of processing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub calls: usize,
    pub rewritten: usize,
    pub placeholders: usize,
}

impl FileReport {
    fn new(path: &Path, conversion: &Conversion) -> Self {
        Self {
            path: path.to_path_buf(),
            calls: conversion.calls,
            rewritten: conversion.rewritten,
            placeholders: conversion.placeholders,
        }
    }

    /// Whether converting the file changes (or changed) its contents
    pub fn changed(&self) -> bool {
        self.placeholders > 0
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Convert a file in place.
///
/// The file is always written back, byte-identical when nothing matched.
pub fn convert_file(matcher: &QueryMatcher, path: &Path) -> Result<FileReport> {
    let contents = read_source(path)?;
    let conversion = convert_source(matcher, &contents);

    debug!(
        path = %path.display(),
        calls = conversion.calls,
        placeholders = conversion.placeholders,
        "writing converted file"
    );
    fs::write(path, &conversion.output).map_err(|e| Error::io(path, e))?;

    Ok(FileReport::new(path, &conversion))
}

/// Report what converting a file would do without writing it
pub fn check_file(matcher: &QueryMatcher, path: &Path) -> Result<FileReport> {
    let contents = read_source(path)?;
    let conversion = convert_source(matcher, &contents);
    Ok(FileReport::new(path, &conversion))
}
