//! # api-model-syntax
//!
//! Corpus loader for API specification sources.
//!
//! This crate turns declarative source files (interfaces, enums, classes and
//! type aliases written in a TypeScript-like syntax) into navigable syntax
//! trees and binds declaration names into a symbol table. It is the input
//! side of `api-model`, which walks these trees to build the language-agnostic
//! model.
//!
//! ## Architecture
//!
//! - [`lexer`] - logos-based tokenizer with doc-comment tracking
//! - [`parser`] - recursive descent parser for the declaration subset
//! - [`tree`] - arena-allocated syntax tree
//! - [`corpus`] - parsed source files, node cursors and the file set
//! - [`binder`] - symbol table and the [`SymbolResolver`] service
//! - [`error`] - syntax error types

pub mod binder;
pub mod corpus;
pub mod error;
pub mod kind;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod tree;

// Re-export main types for convenience
pub use binder::{Binder, Symbol, SymbolKind, SymbolResolver, SymbolTable};
pub use corpus::{Corpus, FileId, Node, SourceFile};
pub use error::{SyntaxError, SyntaxResult};
pub use kind::SyntaxKind;
pub use span::{Location, Span};
pub use tree::{NodeId, SyntaxTree};
