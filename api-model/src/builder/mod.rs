//! Declaration builders.
//!
//! - [`names`] - name resolution through the injected symbol service
//! - [`type_resolver`] - type expression → [`TypeIR`](crate::ir::TypeIR)
//! - [`enum_builder`] / [`interface_builder`] - declaration → IR entity

pub mod enum_builder;
pub mod interface_builder;
pub mod names;
pub mod type_resolver;

pub use enum_builder::EnumBuilder;
pub use interface_builder::InterfaceBuilder;
pub use names::NameResolver;
pub use type_resolver::{resolve_type, TypeExpr, MAP_ALIAS};
