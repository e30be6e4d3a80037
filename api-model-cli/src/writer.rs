//! Writes the extracted model to its output file.
//!
//! An output file that already holds the same rendering is left untouched.

use std::path::{Path, PathBuf};

use api_model::Model;

use crate::error::{CliResult, WriteError};
use crate::output::render_model;

/// Entity counts of a written model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelStats {
    pub interfaces: usize,
    pub enums: usize,
    /// Properties whose type has no IR mapping.
    pub unresolved: usize,
}

impl ModelStats {
    pub fn of(model: &Model) -> Self {
        Self {
            interfaces: model.interfaces.len(),
            enums: model.enums.len(),
            unresolved: model.unresolved_count(),
        }
    }
}

/// What happened to the output file.
#[derive(Debug)]
pub enum WriteOutcome {
    /// The model was rendered and written.
    Written {
        path: PathBuf,
        bytes: usize,
        stats: ModelStats,
    },
    /// The file already held exactly this rendering.
    Unchanged { path: PathBuf, stats: ModelStats },
    /// Dry run: the rendering that would have been written.
    Preview {
        path: PathBuf,
        content: String,
        stats: ModelStats,
    },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path, .. }
            | WriteOutcome::Unchanged { path, .. }
            | WriteOutcome::Preview { path, .. } => path,
        }
    }

    pub fn stats(&self) -> ModelStats {
        match self {
            WriteOutcome::Written { stats, .. }
            | WriteOutcome::Unchanged { stats, .. }
            | WriteOutcome::Preview { stats, .. } => *stats,
        }
    }

    /// Whether the output file was modified.
    pub fn was_written(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }
}

/// Renders a [`Model`] as JSON and stores it.
#[derive(Debug, Clone, Copy)]
pub struct ModelWriter {
    pretty: bool,
    dry_run: bool,
}

impl ModelWriter {
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            dry_run: false,
        }
    }

    /// Preview the rendering instead of touching the file system.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn write(&self, model: &Model, path: &Path) -> CliResult<WriteOutcome> {
        let content = render_model(model, self.pretty)?;
        let stats = ModelStats::of(model);
        let path = path.to_path_buf();

        if self.dry_run {
            return Ok(WriteOutcome::Preview {
                path,
                content,
                stats,
            });
        }

        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == content) {
            tracing::debug!(path = %path.display(), "model unchanged");
            return Ok(WriteOutcome::Unchanged { path, stats });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, &content).map_err(|source| WriteError::WriteFile {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            bytes = content.len(),
            interfaces = stats.interfaces,
            enums = stats.enums,
            "wrote model"
        );
        Ok(WriteOutcome::Written {
            path,
            bytes: content.len(),
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_model::{Enum, EnumMember, Interface, InterfaceProperty, PropertyType, TypeIR};
    use tempfile::TempDir;

    fn model() -> Model {
        let mut color = Enum::new("Color");
        color.members.push(EnumMember::new("Red"));

        let mut point = Interface::new("Point");
        point.properties.push(InterfaceProperty::new(
            "x",
            PropertyType::Resolved(TypeIR::named("boolean")),
        ));
        point.properties.push(InterfaceProperty::new(
            "y",
            PropertyType::Unresolved {
                syntax: Some("NumberKeyword".to_string()),
                text: "number".to_string(),
            },
        ));

        Model {
            interfaces: vec![point],
            enums: vec![color],
        }
    }

    #[test]
    fn test_write_creates_directories_and_reports_stats() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/model.json");

        let outcome = ModelWriter::new(false).write(&model(), &path).unwrap();

        assert!(outcome.was_written());
        assert_eq!(outcome.path(), path.as_path());
        assert_eq!(
            outcome.stats(),
            ModelStats {
                interfaces: 1,
                enums: 1,
                unresolved: 1,
            }
        );
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            render_model(&model(), false).unwrap()
        );
    }

    #[test]
    fn test_unchanged_model_is_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        let writer = ModelWriter::new(true);

        assert!(writer.write(&model(), &path).unwrap().was_written());
        let outcome = writer.write(&model(), &path).unwrap();
        assert!(matches!(outcome, WriteOutcome::Unchanged { .. }));

        // A different rendering of the same model is rewritten.
        let compact = ModelWriter::new(false).write(&model(), &path).unwrap();
        assert!(compact.was_written());
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");

        let outcome = ModelWriter::new(true)
            .dry_run(true)
            .write(&model(), &path)
            .unwrap();

        assert!(!path.exists());
        match outcome {
            WriteOutcome::Preview { content, stats, .. } => {
                assert!(content.contains("\"Color\""));
                assert_eq!(stats.enums, 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
