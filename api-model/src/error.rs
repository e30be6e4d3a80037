//! Error types for model construction.
//!
//! Both model errors are fatal: any one of them aborts the whole read and no
//! partial model is exposed.

use std::fmt;

use api_model_syntax::{Location, SyntaxKind};
use thiserror::Error;

/// Result type alias for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Structural wrapper whose arity is checked during type resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    Array,
    Map,
}

impl Wrapper {
    /// Number of recognized type nodes the wrapper requires.
    pub fn arity(self) -> usize {
        match self {
            Wrapper::Array => 1,
            Wrapper::Map => 2,
        }
    }
}

impl fmt::Display for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wrapper::Array => f.write_str("array"),
            Wrapper::Map => f.write_str("map"),
        }
    }
}

/// Fatal error raised while building the model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A declaration or property node has no bound symbol.
    #[error("{location}: cannot resolve the name of {kind}")]
    NameResolution { kind: SyntaxKind, location: Location },

    /// An array or map type does not wrap the required number of types.
    #[error("{location}: {wrapper} type expects {expected} type argument(s), found {actual}")]
    ShapeMismatch {
        wrapper: Wrapper,
        expected: usize,
        actual: usize,
        location: Location,
    },
}

impl ModelError {
    pub fn shape_mismatch(wrapper: Wrapper, actual: usize, location: Location) -> Self {
        ModelError::ShapeMismatch {
            wrapper,
            expected: wrapper.arity(),
            actual,
            location,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            ModelError::NameResolution { location, .. } => location,
            ModelError::ShapeMismatch { location, .. } => location,
        }
    }
}

/// Error building a [`FileSelection`](crate::FileSelection).
#[derive(Debug, Error)]
pub enum SelectionError {
    /// An include pattern is not a valid regular expression.
    #[error("Invalid include pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
