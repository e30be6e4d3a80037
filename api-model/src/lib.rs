//! # api-model
//!
//! Extracts a language-agnostic model of API type declarations from a parsed
//! [`Corpus`](api_model_syntax::Corpus).
//!
//! The model holds interfaces with typed properties and enums with plain
//! members, in source order. Downstream generators serialize it and emit
//! client bindings from it.
//!
//! ## Example
//!
//! ```
//! use api_model::{FileSelection, ModelReader, TypeIR};
//! use api_model_syntax::Corpus;
//!
//! let mut corpus = Corpus::new();
//! corpus
//!     .add_source("api/lookup.ts", "interface Lookup { data: map<string, string> }")
//!     .unwrap();
//!
//! let reader = ModelReader::new(&corpus, &FileSelection::default()).unwrap();
//! let data = &reader.interfaces()[0].properties[0];
//! assert_eq!(
//!     data.ty.resolved(),
//!     Some(&TypeIR::map(TypeIR::named("string"), TypeIR::named("string")))
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`reader`] - walks selected files and dispatches declarations
//! - [`builder`] - name and type resolution, enum and interface builders
//! - [`selection`] - include filter and bundled-declaration exclusion
//! - [`ir`] - the produced entities
//! - [`error`] - fatal model errors

pub mod builder;
pub mod error;
pub mod ir;
pub mod reader;
pub mod selection;

// Re-export main types for convenience
pub use error::{ModelError, ModelResult, SelectionError, Wrapper};
pub use ir::{Enum, EnumMember, Interface, InterfaceProperty, Model, PropertyType, TypeIR};
pub use reader::{ModelReader, ReaderOptions};
pub use selection::{FileSelection, BUNDLED_DECLARATIONS, DEFAULT_INCLUDE};
