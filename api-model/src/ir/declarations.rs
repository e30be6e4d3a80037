//! Declaration IR: interfaces, enums and the model document.

use serde::{Deserialize, Serialize};

use super::types::PropertyType;

/// An interface with its properties in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    pub properties: Vec<InterfaceProperty>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            properties: Vec::new(),
        }
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&InterfaceProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceProperty {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: PropertyType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl InterfaceProperty {
    pub fn new(name: impl Into<String>, ty: impl Into<PropertyType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            documentation: None,
        }
    }
}

/// An enumeration with its members in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    pub members: Vec<EnumMember>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            members: Vec::new(),
        }
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
        }
    }
}

/// The complete extracted model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub interfaces: Vec<Interface>,
    pub enums: Vec<Enum>,
}

impl Model {
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty() && self.enums.is_empty()
    }

    /// Number of unresolved property types across all interfaces.
    pub fn unresolved_count(&self) -> usize {
        self.interfaces
            .iter()
            .flat_map(|i| &i.properties)
            .filter(|p| !p.ty.is_resolved())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeIR;

    #[test]
    fn test_documentation_omitted_when_absent() {
        let mut point = Interface::new("Point");
        point
            .properties
            .push(InterfaceProperty::new("x", TypeIR::named("boolean")));
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Point","properties":[{"name":"x","type":{"kind":"type","name":"boolean"}}]}"#
        );
    }

    #[test]
    fn test_model_counts_unresolved() {
        let mut iface = Interface::new("A");
        iface
            .properties
            .push(InterfaceProperty::new("a", TypeIR::named("string")));
        iface.properties.push(InterfaceProperty::new(
            "b",
            PropertyType::Unresolved {
                syntax: None,
                text: String::new(),
            },
        ));
        let model = Model {
            interfaces: vec![iface],
            enums: vec![],
        };
        assert_eq!(model.unresolved_count(), 1);
        assert!(!model.is_empty());
        assert_eq!(
            model.interfaces[0].property("b").map(|p| p.ty.is_resolved()),
            Some(false)
        );
    }
}
