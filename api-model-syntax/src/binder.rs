//! Symbol binding and the resolution service.
//!
//! The binder walks every tree once and binds the name node of each
//! declaration to a [`Symbol`]. Consumers only see the [`SymbolResolver`]
//! trait, so tests can substitute their own resolution service.

use std::collections::HashMap;

use crate::corpus::{FileId, Node, SourceFile};
use crate::kind::SyntaxKind;
use crate::lexer::clean_doc_comment;
use crate::tree::NodeId;

/// Kind of declaration a symbol was bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Interface,
    Enum,
    Class,
    TypeAlias,
    Module,
    Property,
    EnumMember,
}

impl SymbolKind {
    fn from_declaration(kind: SyntaxKind) -> Option<SymbolKind> {
        let kind = match kind {
            SyntaxKind::InterfaceDeclaration => SymbolKind::Interface,
            SyntaxKind::EnumDeclaration => SymbolKind::Enum,
            SyntaxKind::ClassDeclaration => SymbolKind::Class,
            SyntaxKind::TypeAliasDeclaration => SymbolKind::TypeAlias,
            SyntaxKind::ModuleDeclaration => SymbolKind::Module,
            SyntaxKind::PropertySignature | SyntaxKind::PropertyDeclaration => {
                SymbolKind::Property
            }
            SyntaxKind::EnumMember => SymbolKind::EnumMember,
            _ => return None,
        };
        Some(kind)
    }
}

/// A declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Display name; string-literal names are unquoted
    pub name: String,
    pub kind: SymbolKind,
    /// Cleaned documentation comment of the declaration
    pub documentation: Option<String>,
}

/// Resolution service mapping a name-bearing node to its declared symbol.
pub trait SymbolResolver {
    fn symbol_at(&self, node: Node<'_>) -> Option<&Symbol>;
}

/// Symbols of every bound file, keyed by name node.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<(FileId, NodeId), Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: FileId, name_node: NodeId, symbol: Symbol) {
        self.symbols.insert((file, name_node), symbol);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolResolver for SymbolTable {
    fn symbol_at(&self, node: Node<'_>) -> Option<&Symbol> {
        self.symbols.get(&(node.file().id(), node.id()))
    }
}

/// Binds declaration names of a file into a [`SymbolTable`].
pub struct Binder<'t> {
    table: &'t mut SymbolTable,
}

impl<'t> Binder<'t> {
    pub fn new(table: &'t mut SymbolTable) -> Self {
        Binder { table }
    }

    pub fn bind(&mut self, file: &SourceFile) {
        for id in file.tree().preorder() {
            let node = file.node(id);
            let Some(kind) = SymbolKind::from_declaration(node.kind()) else {
                continue;
            };
            let Some(name) = node.name() else {
                continue;
            };

            let symbol = Symbol {
                name: declared_name(name),
                kind,
                documentation: node.doc_comment().and_then(clean_doc_comment),
            };
            self.table.insert(file.id(), name.id(), symbol);
        }
    }
}

/// Identifier text, with quotes stripped from string-literal names.
fn declared_name(name: Node<'_>) -> String {
    let text = name.text();
    if name.kind() == SyntaxKind::StringLiteral && text.len() >= 2 {
        text[1..text.len() - 1].to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::span::Span;
    use crate::tree::SyntaxTree;

    fn symbols_of(corpus: &Corpus) -> Vec<(String, SymbolKind)> {
        let file = &corpus.files()[0];
        file.tree()
            .preorder()
            .into_iter()
            .filter_map(|id| corpus.symbols().symbol_at(file.node(id)))
            .map(|s| (s.name.clone(), s.kind))
            .collect()
    }

    #[test]
    fn test_binds_declarations_and_members() {
        let mut corpus = Corpus::new();
        corpus
            .add_source(
                "a.ts",
                "enum Color { Red, 'dark-blue' }\ninterface Point { x: boolean; '200': string }",
            )
            .unwrap();

        assert_eq!(
            symbols_of(&corpus),
            vec![
                ("Color".to_string(), SymbolKind::Enum),
                ("Red".to_string(), SymbolKind::EnumMember),
                ("dark-blue".to_string(), SymbolKind::EnumMember),
                ("Point".to_string(), SymbolKind::Interface),
                ("x".to_string(), SymbolKind::Property),
                ("200".to_string(), SymbolKind::Property),
            ]
        );
    }

    #[test]
    fn test_type_references_are_not_bound() {
        let mut corpus = Corpus::new();
        corpus
            .add_source("a.ts", "interface A { b: Foo }")
            .unwrap();
        let names: Vec<_> = symbols_of(&corpus).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "b"]);
    }

    #[test]
    fn test_documentation_is_cleaned() {
        let mut corpus = Corpus::new();
        corpus
            .add_source(
                "a.ts",
                "/**\n * A point.\n * @since 1.0\n */\nexport interface Point { x: boolean }",
            )
            .unwrap();
        let file = &corpus.files()[0];
        let decl = file.root().unwrap().children().next().unwrap();
        let symbol = corpus.symbols().symbol_at(decl.name().unwrap()).unwrap();
        assert_eq!(symbol.documentation.as_deref(), Some("A point.\n@since 1.0"));
    }

    #[test]
    fn test_declaration_without_name_is_skipped() {
        let mut tree = SyntaxTree::new();
        let list = tree.leaf(SyntaxKind::SyntaxList, Span::new(0, 0));
        let decl = tree.alloc(SyntaxKind::EnumDeclaration, Span::new(0, 4), vec![list]);
        let root = tree.alloc(SyntaxKind::SourceFile, Span::new(0, 4), vec![decl]);
        tree.set_root(root);

        let mut corpus = Corpus::new();
        corpus.add_file(SourceFile::from_tree(FileId(0), "a.ts", "enum", tree));
        assert!(corpus.symbols().is_empty());
    }
}
