//! Selection of the corpus files that contribute to the model.

use std::path::Path;

use regex::Regex;

use crate::error::SelectionError;

/// Path fragment of the bundled compiler declaration file. Files matching it
/// never contribute entities.
pub const BUNDLED_DECLARATIONS: &str = "ntypescript";

/// Include pattern used when none is configured.
pub const DEFAULT_INCLUDE: &str = r"\.ts$";

/// Include filter plus the fixed bundled-declarations exclusion.
#[derive(Debug, Clone)]
pub struct FileSelection {
    include: Vec<Regex>,
}

impl FileSelection {
    /// Build a selection from include regexes. An empty list selects nothing.
    pub fn new<I, S>(patterns: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let include = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| SelectionError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { include })
    }

    /// Whether a file at `path` contributes entities.
    pub fn is_eligible(&self, path: &Path) -> bool {
        let path = normalize(path);
        !path.contains(BUNDLED_DECLARATIONS) && self.include.iter().any(|re| re.is_match(&path))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.include.iter().map(Regex::as_str)
    }
}

impl Default for FileSelection {
    fn default() -> Self {
        // `DEFAULT_INCLUDE` is a valid literal pattern, so this always holds
        // exactly one regex.
        let include = Regex::new(DEFAULT_INCLUDE).into_iter().collect();
        Self { include }
    }
}

/// Path text with `/` separators on every platform.
fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
