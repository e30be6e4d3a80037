//! Type expression resolution.
//!
//! Only a closed set of type expressions has an IR mapping, see [`TypeExpr`].
//! Everything else resolves to `None` and is recorded by the caller as an
//! unresolved property type.

use api_model_syntax::{Node, SyntaxKind};

use crate::error::{ModelError, ModelResult, Wrapper};
use crate::ir::TypeIR;

/// Name of the generic alias that denotes a key/value map.
pub const MAP_ALIAS: &str = "map";

/// Type expressions with an IR mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeExpr {
    Array,
    Reference,
    String,
    Boolean,
    Any,
}

impl TypeExpr {
    /// Classify a node, `None` when its kind has no IR mapping.
    pub fn classify(kind: SyntaxKind) -> Option<TypeExpr> {
        match kind {
            SyntaxKind::ArrayType => Some(TypeExpr::Array),
            SyntaxKind::TypeReference => Some(TypeExpr::Reference),
            SyntaxKind::StringKeyword => Some(TypeExpr::String),
            SyntaxKind::BooleanKeyword => Some(TypeExpr::Boolean),
            SyntaxKind::AnyKeyword => Some(TypeExpr::Any),
            _ => None,
        }
    }
}

/// Resolve a type expression node into IR.
///
/// Returns `Ok(None)` for expressions outside the recognized set and fails
/// with [`ModelError::ShapeMismatch`] when an array or map wrapper does not
/// hold exactly the required number of recognized type nodes.
pub fn resolve_type(node: Node<'_>) -> ModelResult<Option<TypeIR>> {
    match TypeExpr::classify(node.kind()) {
        Some(expr) => resolve_expr(node, expr).map(Some),
        None => Ok(None),
    }
}

fn resolve_expr(node: Node<'_>, expr: TypeExpr) -> ModelResult<TypeIR> {
    match expr {
        TypeExpr::Array => resolve_array(node),
        TypeExpr::Reference => resolve_reference(node),
        TypeExpr::String => Ok(TypeIR::named("string")),
        TypeExpr::Boolean => Ok(TypeIR::named("boolean")),
        TypeExpr::Any => Ok(TypeIR::named("object")),
    }
}

fn resolve_array(node: Node<'_>) -> ModelResult<TypeIR> {
    let elements: Vec<_> = node.children().filter_map(classified).collect();

    match elements.as_slice() {
        [(element, expr)] => Ok(TypeIR::array(resolve_expr(*element, *expr)?)),
        _ => Err(ModelError::shape_mismatch(
            Wrapper::Array,
            elements.len(),
            node.location(),
        )),
    }
}

fn resolve_reference(node: Node<'_>) -> ModelResult<TypeIR> {
    let type_name = node.children().next().map(|name| name.text());
    if type_name != Some(MAP_ALIAS) {
        return Ok(TypeIR::named(node.text()));
    }

    // Key and value are searched one and two levels down, in document order.
    let slots: Vec<_> = node
        .children()
        .flat_map(|child| std::iter::once(child).chain(child.children()))
        .filter_map(classified)
        .collect();

    match slots.as_slice() {
        [(key, key_expr), (value, value_expr)] => Ok(TypeIR::map(
            resolve_expr(*key, *key_expr)?,
            resolve_expr(*value, *value_expr)?,
        )),
        _ => Err(ModelError::shape_mismatch(
            Wrapper::Map,
            slots.len(),
            node.location(),
        )),
    }
}

fn classified(node: Node<'_>) -> Option<(Node<'_>, TypeExpr)> {
    TypeExpr::classify(node.kind()).map(|expr| (node, expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_model_syntax::{FileId, SourceFile, Span, SyntaxTree};

    /// Resolve the aliased type of `type T = <ty>`.
    fn resolve_source(ty: &str) -> ModelResult<Option<TypeIR>> {
        let file = SourceFile::parse(FileId(0), "t.ts", format!("type T = {ty}")).unwrap();
        let alias = file.root().unwrap().children().next().unwrap();
        let ty_node = alias.children().last().unwrap();
        resolve_type(ty_node)
    }

    fn resolved(ty: &str) -> TypeIR {
        resolve_source(ty).unwrap().unwrap()
    }

    #[test]
    fn test_primitive_keywords() {
        assert_eq!(resolved("string"), TypeIR::named("string"));
        assert_eq!(resolved("boolean"), TypeIR::named("boolean"));
        assert_eq!(resolved("any"), TypeIR::named("object"));
    }

    #[test]
    fn test_array_of_string() {
        assert_eq!(resolved("string[]"), TypeIR::array(TypeIR::named("string")));
        assert_eq!(
            resolved("Foo[][]"),
            TypeIR::array(TypeIR::array(TypeIR::named("Foo")))
        );
    }

    #[test]
    fn test_map_of_primitives() {
        assert_eq!(
            resolved("map<string, boolean>"),
            TypeIR::map(TypeIR::named("string"), TypeIR::named("boolean"))
        );
    }

    #[test]
    fn test_map_with_reference_value() {
        assert_eq!(
            resolved("map<string, Foo>"),
            TypeIR::map(TypeIR::named("string"), TypeIR::named("Foo"))
        );
    }

    #[test]
    fn test_opaque_reference_keeps_full_text() {
        assert_eq!(resolved("Foo"), TypeIR::named("Foo"));
        assert_eq!(
            resolved("Dictionary<string, Foo>"),
            TypeIR::named("Dictionary<string, Foo>")
        );
        assert_eq!(resolved("ns.map"), TypeIR::named("ns.map"));
    }

    #[test]
    fn test_unrecognized_shapes_yield_none() {
        assert_eq!(resolve_source("number").unwrap(), None);
        assert_eq!(resolve_source("'a' | 'b'").unwrap(), None);
        assert_eq!(resolve_source("{ a: string }").unwrap(), None);
    }

    #[test]
    fn test_map_with_nested_array_counts_grandchildren() {
        // The array node and its element are both collected.
        let err = resolve_source("map<string, string[]>").unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                wrapper: Wrapper::Map,
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_map_with_one_argument_is_fatal() {
        let err = resolve_source("map<string>").unwrap_err();
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
    fn test_array_arity_checked_on_built_trees() {
        let text = "string boolean";
        for (children, actual) in [(0usize, 0usize), (2, 2)] {
            let mut tree = SyntaxTree::new();
            let elements: Vec<_> = (0..children)
                .map(|i| {
                    let kind = if i == 0 {
                        SyntaxKind::StringKeyword
                    } else {
                        SyntaxKind::BooleanKeyword
                    };
                    tree.leaf(kind, Span::new(i * 7, i * 7 + 6))
                })
                .collect();
            let array = tree.alloc(SyntaxKind::ArrayType, Span::new(0, text.len()), elements);
            tree.set_root(array);

            let file = SourceFile::from_tree(FileId(0), "t.ts", text, tree);
            let err = resolve_type(file.root().unwrap()).unwrap_err();
            assert_eq!(
                err,
                ModelError::ShapeMismatch {
                    wrapper: Wrapper::Array,
                    expected: 1,
                    actual,
                    location: file.location(0),
                }
            );
        }
    }

    #[test]
    fn test_array_ignores_unrecognized_elements() {
        let text = "number string";
        let mut tree = SyntaxTree::new();
        let number = tree.leaf(SyntaxKind::NumberKeyword, Span::new(0, 6));
        let string = tree.leaf(SyntaxKind::StringKeyword, Span::new(7, 13));
        let array = tree.alloc(
            SyntaxKind::ArrayType,
            Span::new(0, text.len()),
            vec![number, string],
        );
        tree.set_root(array);

        let file = SourceFile::from_tree(FileId(0), "t.ts", text, tree);
        assert_eq!(
            resolve_type(file.root().unwrap()).unwrap(),
            Some(TypeIR::array(TypeIR::named("string")))
        );
    }

    #[test]
    fn test_classify_closed_set() {
        assert_eq!(
            TypeExpr::classify(SyntaxKind::ArrayType),
            Some(TypeExpr::Array)
        );
        assert_eq!(TypeExpr::classify(SyntaxKind::NumberKeyword), None);
        assert_eq!(TypeExpr::classify(SyntaxKind::Identifier), None);
    }
}
