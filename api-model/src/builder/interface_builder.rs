//! Interface declaration → [`Interface`] IR.

use api_model_syntax::{Node, SyntaxKind};

use super::names::NameResolver;
use super::type_resolver::resolve_type;
use crate::error::ModelResult;
use crate::ir::{Interface, InterfaceProperty, PropertyType};

/// Builds one [`Interface`] from an interface declaration node.
pub struct InterfaceBuilder<'r> {
    names: NameResolver<'r>,
    documentation: bool,
}

impl<'r> InterfaceBuilder<'r> {
    pub fn new(names: NameResolver<'r>) -> Self {
        Self {
            names,
            documentation: false,
        }
    }

    /// Also copy documentation comments into the IR.
    pub fn with_documentation(mut self, enabled: bool) -> Self {
        self.documentation = enabled;
        self
    }

    pub fn build(&self, declaration: Node<'_>) -> ModelResult<Interface> {
        let mut result = Interface::new(self.names.name(declaration)?);
        if self.documentation {
            result.documentation = self.names.documentation(declaration);
        }
        self.collect_properties(declaration, &result.name, &mut result.properties)?;

        tracing::debug!(
            name = %result.name,
            properties = result.properties.len(),
            "built interface"
        );
        Ok(result)
    }

    fn collect_properties(
        &self,
        node: Node<'_>,
        owner: &str,
        properties: &mut Vec<InterfaceProperty>,
    ) -> ModelResult<()> {
        for child in node.children() {
            if child.kind() == SyntaxKind::PropertySignature {
                properties.push(self.build_property(child, owner)?);
            } else {
                self.collect_properties(child, owner, properties)?;
            }
        }
        Ok(())
    }

    fn build_property(&self, property: Node<'_>, owner: &str) -> ModelResult<InterfaceProperty> {
        let name = self.names.name(property)?;
        // Children are the name followed by the optional type annotation.
        let annotation = property.children().nth(1);

        let ty = match annotation {
            Some(node) => match resolve_type(node)? {
                Some(ty) => PropertyType::Resolved(ty),
                None => PropertyType::Unresolved {
                    syntax: Some(node.kind().to_string()),
                    text: node.text().to_string(),
                },
            },
            None => PropertyType::Unresolved {
                syntax: None,
                text: String::new(),
            },
        };

        if let PropertyType::Unresolved { syntax, text } = &ty {
            tracing::warn!(
                location = %property.location(),
                interface = owner,
                property = %name,
                syntax = syntax.as_deref().unwrap_or("<none>"),
                text = %text,
                "property type has no model mapping"
            );
        }

        let mut result = InterfaceProperty::new(name, ty);
        if self.documentation {
            result.documentation = self.names.documentation(property);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ModelError, Wrapper};
    use crate::ir::TypeIR;
    use api_model_syntax::Corpus;

    fn build(source: &str) -> ModelResult<Interface> {
        build_with(source, false)
    }

    fn build_with(source: &str, documentation: bool) -> ModelResult<Interface> {
        let mut corpus = Corpus::new();
        corpus.add_source("i.ts", source).unwrap();
        let decl = corpus.files()[0]
            .root()
            .unwrap()
            .children()
            .find(|n| n.kind() == SyntaxKind::InterfaceDeclaration)
            .unwrap();
        InterfaceBuilder::new(NameResolver::new(corpus.symbols()))
            .with_documentation(documentation)
            .build(decl)
    }

    #[test]
    fn test_point_properties_in_order() {
        let point = build("interface Point { x: boolean; y: boolean; tags: string[] }").unwrap();
        assert_eq!(point.name, "Point");
        assert_eq!(
            point.properties,
            vec![
                InterfaceProperty::new("x", TypeIR::named("boolean")),
                InterfaceProperty::new("y", TypeIR::named("boolean")),
                InterfaceProperty::new("tags", TypeIR::array(TypeIR::named("string"))),
            ]
        );
    }

    #[test]
    fn test_lookup_map_property() {
        let lookup = build("interface Lookup { data: map<string, string> }").unwrap();
        assert_eq!(
            lookup.properties[0].ty,
            PropertyType::Resolved(TypeIR::map(
                TypeIR::named("string"),
                TypeIR::named("string")
            ))
        );
    }

    #[test]
    fn test_quoted_and_optional_names() {
        let response = build("interface Response { '200'?: Body; type: string }").unwrap();
        let names: Vec<_> = response.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["200", "type"]);
        assert_eq!(
            response.properties[0].ty,
            PropertyType::Resolved(TypeIR::named("Body"))
        );
    }

    #[test]
    fn test_unrecognized_type_is_explicitly_unresolved() {
        let iface = build("interface A { level: 'low' | 'high'; count: number; raw }").unwrap();
        assert_eq!(
            iface.properties[0].ty,
            PropertyType::Unresolved {
                syntax: Some("UnionType".to_string()),
                text: "'low' | 'high'".to_string(),
            }
        );
        assert_eq!(
            iface.properties[1].ty,
            PropertyType::Unresolved {
                syntax: Some("NumberKeyword".to_string()),
                text: "number".to_string(),
            }
        );
        assert_eq!(
            iface.properties[2].ty,
            PropertyType::Unresolved {
                syntax: None,
                text: String::new(),
            }
        );
    }

    #[test]
    fn test_nested_type_literal_members_are_not_flattened() {
        let response = build("interface Response { '200': { body: string } }").unwrap();
        assert_eq!(response.properties.len(), 1);
        assert!(!response.properties[0].ty.is_resolved());
    }

    #[test]
    fn test_shape_mismatch_propagates() {
        let err = build("interface A { m: map<string> }").unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                wrapper: Wrapper::Map,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_property_documentation() {
        let source = "/** A request. */\ninterface Req {\n  /** Index name. */\n  index: string\n}";
        let iface = build_with(source, true).unwrap();
        assert_eq!(iface.documentation.as_deref(), Some("A request."));
        assert_eq!(
            iface.properties[0].documentation.as_deref(),
            Some("Index name.")
        );
    }
}
