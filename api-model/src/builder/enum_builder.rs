//! Enum declaration → [`Enum`] IR.

use api_model_syntax::{Node, SyntaxKind};

use super::names::NameResolver;
use crate::error::ModelResult;
use crate::ir::{Enum, EnumMember};

/// Builds one [`Enum`] from an enum declaration node.
pub struct EnumBuilder<'r> {
    names: NameResolver<'r>,
    documentation: bool,
}

impl<'r> EnumBuilder<'r> {
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

    pub fn build(&self, declaration: Node<'_>) -> ModelResult<Enum> {
        let mut result = Enum::new(self.names.name(declaration)?);
        if self.documentation {
            result.documentation = self.names.documentation(declaration);
        }
        self.collect_members(declaration, &mut result.members)?;

        tracing::debug!(
            name = %result.name,
            members = result.members.len(),
            "built enum"
        );
        Ok(result)
    }

    /// Members may sit below list nodes, so non-member children are searched too.
    fn collect_members(&self, node: Node<'_>, members: &mut Vec<EnumMember>) -> ModelResult<()> {
        for child in node.children() {
            if child.kind() == SyntaxKind::EnumMember {
                let mut member = EnumMember::new(self.names.name(child)?);
                if self.documentation {
                    member.documentation = self.names.documentation(child);
                }
                members.push(member);
            } else {
                self.collect_members(child, members)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use api_model_syntax::{Corpus, FileId, SourceFile, Span, SyntaxTree};

    fn build(source: &str, documentation: bool) -> ModelResult<Enum> {
        let mut corpus = Corpus::new();
        corpus.add_source("e.ts", source).unwrap();
        let decl = corpus.files()[0].root().unwrap().children().next().unwrap();
        EnumBuilder::new(NameResolver::new(corpus.symbols()))
            .with_documentation(documentation)
            .build(decl)
    }

    #[test]
    fn test_members_in_source_order() {
        let color = build("enum Color { Red, Green, Blue }", false).unwrap();
        assert_eq!(color.name, "Color");
        assert_eq!(color.member_names(), vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_initializers_are_ignored() {
        let op = build("export enum Op { add = 'add', 'remove-all' = 2 }", false).unwrap();
        assert_eq!(op.member_names(), vec!["add", "remove-all"]);
    }

    #[test]
    fn test_empty_enum() {
        let empty = build("enum Nothing {}", false).unwrap();
        assert!(empty.members.is_empty());
    }

    #[test]
    fn test_documentation_only_when_enabled() {
        let source = "/** Level. */\nenum Level {\n  /** Lowest. */\n  Low\n}";
        let plain = build(source, false).unwrap();
        assert_eq!(plain.documentation, None);
        assert_eq!(plain.members[0].documentation, None);

        let documented = build(source, true).unwrap();
        assert_eq!(documented.documentation.as_deref(), Some("Level."));
        assert_eq!(documented.members[0].documentation.as_deref(), Some("Lowest."));
    }

    #[test]
    fn test_members_found_without_list_node() {
        // enum E { A, B } with members directly under the declaration
        let text = "enum E { A, B }";
        let mut tree = SyntaxTree::new();
        let name = tree.leaf(SyntaxKind::Identifier, Span::new(5, 6));
        let a_name = tree.leaf(SyntaxKind::Identifier, Span::new(9, 10));
        let a = tree.alloc(SyntaxKind::EnumMember, Span::new(9, 10), vec![a_name]);
        let b_name = tree.leaf(SyntaxKind::Identifier, Span::new(12, 13));
        let b = tree.alloc(SyntaxKind::EnumMember, Span::new(12, 13), vec![b_name]);
        let decl = tree.alloc(SyntaxKind::EnumDeclaration, Span::new(0, 15), vec![name, a, b]);
        let root = tree.alloc(SyntaxKind::SourceFile, Span::new(0, 15), vec![decl]);
        tree.set_root(root);

        let mut corpus = Corpus::new();
        let id = corpus.add_file(SourceFile::from_tree(FileId(0), "e.ts", text, tree));
        let file = corpus.file(id).unwrap();
        let decl = file.root().unwrap().children().next().unwrap();

        let e = EnumBuilder::new(NameResolver::new(corpus.symbols()))
            .build(decl)
            .unwrap();
        assert_eq!(e.member_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_unnamed_member_is_fatal() {
        let text = "enum E { 1 }";
        let mut tree = SyntaxTree::new();
        let name = tree.leaf(SyntaxKind::Identifier, Span::new(5, 6));
        // A member whose first child is not a name node.
        let literal = tree.leaf(SyntaxKind::LiteralType, Span::new(9, 10));
        let member = tree.alloc(SyntaxKind::EnumMember, Span::new(9, 10), vec![literal]);
        let list = tree.alloc(SyntaxKind::SyntaxList, Span::new(9, 10), vec![member]);
        let decl = tree.alloc(SyntaxKind::EnumDeclaration, Span::new(0, 12), vec![name, list]);
        tree.set_root(decl);

        let mut corpus = Corpus::new();
        let id = corpus.add_file(SourceFile::from_tree(FileId(0), "e.ts", text, tree));
        let decl = corpus.file(id).unwrap().root().unwrap();

        let err = EnumBuilder::new(NameResolver::new(corpus.symbols()))
            .build(decl)
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::NameResolution {
                kind: SyntaxKind::EnumMember,
                ..
            }
        ));
        assert_eq!(err.location().column, 10);
    }
}
