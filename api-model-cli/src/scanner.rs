//! Source file scanner for discovering specification files.
//!
//! This module provides functionality to recursively scan directories
//! for `.ts` source files, respecting `.gitignore` patterns and custom filters.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{CliResult, ScanError};

/// Extension of specification source files.
pub const SOURCE_EXTENSION: &str = "ts";

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path to the file as found on disk.
    pub path: PathBuf,

    /// Path relative to the scan root.
    pub relative_path: PathBuf,
}

/// Scanner for discovering specification source files.
#[derive(Debug)]
pub struct SourceScanner {
    /// Root directory to scan.
    root: PathBuf,

    /// Whether to respect .gitignore files.
    respect_gitignore: bool,

    /// Optional glob filter pattern.
    filter: Option<glob::Pattern>,
}

impl SourceScanner {
    /// Create a new scanner for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: true,
            filter: None,
        }
    }

    /// Set whether to respect .gitignore files.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Set a glob filter pattern for files.
    ///
    /// Only files whose path relative to the root matches the pattern are
    /// included.
    pub fn with_filter(mut self, pattern: &str) -> Result<Self, ScanError> {
        let glob_pattern = glob::Pattern::new(pattern)
            .map_err(|e| ScanError::invalid_pattern(pattern, e.to_string()))?;
        self.filter = Some(glob_pattern);
        Ok(self)
    }

    /// Scan the directory and return all discovered source files, sorted by path.
    pub fn scan(&self) -> CliResult<Vec<ScannedFile>> {
        if !self.root.exists() {
            return Err(ScanError::not_found(self.root.clone()).into());
        }

        let walker = WalkBuilder::new(&self.root)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .require_git(false)
            .hidden(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(ScanError::Walk)?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if path.extension().map_or(true, |ext| ext != SOURCE_EXTENSION) {
                continue;
            }

            let relative_path = self.relative_path(path);
            if let Some(ref pattern) = self.filter {
                if !pattern.matches_path(&relative_path) {
                    continue;
                }
            }

            files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
            });
        }

        if files.is_empty() {
            return Err(ScanError::no_source_files(self.root.clone()).into());
        }

        tracing::debug!(root = %self.root.display(), files = files.len(), "scanned sources");
        Ok(files)
    }

    /// Get the relative path from root.
    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
