//! Type IR definitions.
//!
//! A property's type is either a resolved [`TypeIR`] or an explicit
//! [`PropertyType::Unresolved`] record of the expression that could not be
//! mapped.

use serde::{Deserialize, Serialize};

/// Language-agnostic type of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeIR {
    /// Primitive (`string`, `boolean`, `object`) or opaque named reference
    Type { name: String },

    /// Homogeneous array
    Array { of: Box<TypeIR> },

    /// Key/value map
    Map {
        key: Box<TypeIR>,
        value: Box<TypeIR>,
    },
}

impl TypeIR {
    pub fn named(name: impl Into<String>) -> Self {
        TypeIR::Type { name: name.into() }
    }

    pub fn array(of: TypeIR) -> Self {
        TypeIR::Array { of: Box::new(of) }
    }

    pub fn map(key: TypeIR, value: TypeIR) -> Self {
        TypeIR::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}

/// Type slot of an interface property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyType {
    Resolved(TypeIR),

    /// The type expression has no IR mapping (unions, literals, missing annotation...)
    Unresolved {
        /// Syntax kind of the expression, `None` when the property has no annotation
        #[serde(skip_serializing_if = "Option::is_none")]
        syntax: Option<String>,
        /// Source text of the expression
        text: String,
    },
}

impl PropertyType {
    pub fn resolved(&self) -> Option<&TypeIR> {
        match self {
            PropertyType::Resolved(ty) => Some(ty),
            PropertyType::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, PropertyType::Resolved(_))
    }
}

impl From<TypeIR> for PropertyType {
    fn from(ty: TypeIR) -> Self {
        PropertyType::Resolved(ty)
    }
}
