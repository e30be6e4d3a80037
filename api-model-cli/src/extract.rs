//! The extraction pipeline: scan → select → load → read.

use api_model::{Model, ModelReader};

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::loader::load_corpus;
use crate::output::parse_model;
use crate::scanner::SourceScanner;

/// Outcome of one extraction run.
#[derive(Debug)]
pub struct Extraction {
    /// Number of source files loaded.
    pub files: usize,

    /// Scanned files left out by the file selection.
    pub skipped: usize,

    /// The extracted model.
    pub model: Model,
}

/// Run the whole pipeline for `config`.
///
/// `filter` is an optional glob on paths relative to the input directory.
/// Only files accepted by the configured selection are parsed, so excluded
/// files may contain syntax the loader does not understand.
pub fn extract(config: &Config, filter: Option<&str>) -> CliResult<Extraction> {
    let selection = config.selection()?;

    let mut scanner =
        SourceScanner::new(&config.input.dir).with_gitignore(config.input.respect_gitignore);
    if let Some(pattern) = filter {
        scanner = scanner.with_filter(pattern)?;
    }
    let scanned = scanner.scan()?;

    let total = scanned.len();
    let files: Vec<_> = scanned
        .into_iter()
        .filter(|file| selection.is_eligible(&file.relative_path))
        .collect();
    let skipped = total - files.len();
    if skipped > 0 {
        tracing::debug!(skipped, "files outside the selection were not loaded");
    }

    let corpus = load_corpus(&files)?;
    let model =
        ModelReader::with_options(&corpus, &selection, config.reader_options())?.into_model();

    Ok(Extraction {
        files: files.len(),
        skipped,
        model,
    })
}

/// Compare a previously written model with a fresh extraction.
///
/// Formatting differences are ignored: both sides are compared as models.
pub fn check_up_to_date(existing: &str, fresh: &Extraction) -> CliResult<()> {
    let existing = parse_model(existing)
        .map_err(|e| CliError::Validation(format!("Existing model is not valid JSON: {e}")))?;

    if existing == fresh.model {
        Ok(())
    } else {
        Err(CliError::Validation("Model is out of date".to_string()))
    }
}
