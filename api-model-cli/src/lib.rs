//! # api-model-cli
//!
//! CLI library for extracting a JSON API model from specification sources.
//!
//! This crate provides the core functionality for the `api-model` CLI tool,
//! including source file scanning, corpus loading, model extraction and file
//! output.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`scanner`] - Source file discovery and filtering
//! - [`loader`] - Parsing scanned files into a corpus
//! - [`extract`] - The scan → select → load → read pipeline
//! - [`output`] - JSON rendering of the model
//! - [`writer`] - Model output with dry-run and unchanged-file detection
//! - [`watcher`] - File system watching for development mode
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod extract;
pub mod loader;
pub mod output;
pub mod scanner;
pub mod watcher;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use extract::{check_up_to_date, extract, Extraction};
pub use loader::load_corpus;
pub use scanner::{ScannedFile, SourceScanner};
pub use watcher::FileWatcher;
pub use writer::{ModelStats, ModelWriter, WriteOutcome};
