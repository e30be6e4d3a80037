//! Loads scanned source files into a [`Corpus`].
//!
//! Every file is read and parsed even after a failure so that all syntax
//! errors of a run are reported together.

use api_model_syntax::Corpus;

use crate::error::{CliResult, LoadError};
use crate::scanner::ScannedFile;

/// Read and parse `files` into a corpus keyed by their relative paths.
pub fn load_corpus(files: &[ScannedFile]) -> CliResult<Corpus> {
    let mut corpus = Corpus::new();
    let mut errors = Vec::new();

    for file in files {
        let text = match std::fs::read_to_string(&file.path) {
            Ok(text) => text,
            Err(source) => {
                errors.push(LoadError::Io {
                    file: file.path.clone(),
                    source,
                });
                continue;
            }
        };

        if let Err(err) = corpus.add_source(&file.relative_path, text) {
            tracing::debug!(error = %err, "failed to parse source file");
            errors.push(LoadError::Syntax(err));
        }
    }

    match errors.len() {
        0 => Ok(corpus),
        1 => Err(errors.remove(0).into()),
        _ => Err(LoadError::Multiple(errors).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scanned(dir: &TempDir, name: &str, content: &str) -> ScannedFile {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        ScannedFile {
            path,
            relative_path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_loads_files_under_relative_paths() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            scanned(&dir, "a.ts", "enum A { X }"),
            scanned(&dir, "b.ts", "interface B { b: string }"),
        ];

        let corpus = load_corpus(&files).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.files()[1].path(), PathBuf::from("b.ts").as_path());
    }

    #[test]
    fn test_collects_every_syntax_error() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            scanned(&dir, "bad1.ts", "interface {"),
            scanned(&dir, "good.ts", "enum A { X }"),
            scanned(&dir, "bad2.ts", "interface A { run(): void }"),
        ];

        let err = load_corpus(&files).unwrap_err();
        match err {
            CliError::Load(LoadError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].to_string().contains("bad1.ts:1:11"));
                assert!(errors[1].to_string().contains("bad2.ts"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_single_error_is_not_wrapped() {
        let dir = TempDir::new().unwrap();
        let missing = ScannedFile {
            path: dir.path().join("missing.ts"),
            relative_path: PathBuf::from("missing.ts"),
        };

        let err = load_corpus(&[missing]).unwrap_err();
        assert!(matches!(err, CliError::Load(LoadError::Io { .. })));
    }
}
