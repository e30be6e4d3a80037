//! Intermediate Representation (IR) module.
//!
//! The IR is the language-agnostic model handed to downstream generators.
//! It is rebuilt from scratch on every read and never mutated afterwards.

pub mod declarations;
pub mod types;

pub use declarations::{Enum, EnumMember, Interface, InterfaceProperty, Model};
pub use types::{PropertyType, TypeIR};
