//! Parsed source files and the corpus that owns them.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::binder::{Binder, SymbolTable};
use crate::error::SyntaxResult;
use crate::kind::SyntaxKind;
use crate::parser;
use crate::span::{LineIndex, Location, Span};
use crate::tree::{NodeId, SyntaxTree};

/// Index of a file inside its [`Corpus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

/// One parsed source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    id: FileId,
    path: PathBuf,
    text: String,
    lines: LineIndex,
    tree: SyntaxTree,
}

impl SourceFile {
    /// Parse `text` into a new source file.
    pub fn parse(id: FileId, path: impl Into<PathBuf>, text: impl Into<String>) -> SyntaxResult<Self> {
        let path = path.into();
        let text = text.into();
        let lines = LineIndex::new(&text);
        let tree = parser::parse(&text, &path, &lines)?;
        Ok(SourceFile {
            id,
            path,
            text,
            lines,
            tree,
        })
    }

    /// Wrap an already-built tree, e.g. one assembled with [`SyntaxTree::alloc`].
    pub fn from_tree(
        id: FileId,
        path: impl Into<PathBuf>,
        text: impl Into<String>,
        tree: SyntaxTree,
    ) -> Self {
        let text = text.into();
        SourceFile {
            id,
            path: path.into(),
            lines: LineIndex::new(&text),
            text,
            tree,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// Cursor on the root node.
    pub fn root(&self) -> Option<Node<'_>> {
        self.tree.root().map(|id| Node::new(self, id))
    }

    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node::new(self, id)
    }

    pub fn location(&self, offset: usize) -> Location {
        self.lines.location(&self.path, offset)
    }

    fn slice(&self, span: Span) -> &str {
        self.text.get(span.start..span.end).unwrap_or_default()
    }
}

/// Borrowed cursor on one node of a [`SourceFile`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    file: &'a SourceFile,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub fn new(file: &'a SourceFile, id: NodeId) -> Self {
        Node { file, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn file(&self) -> &'a SourceFile {
        self.file
    }

    pub fn kind(&self) -> SyntaxKind {
        self.file.tree.kind(self.id)
    }

    pub fn span(&self) -> Span {
        self.file.tree.span(self.id)
    }

    /// Source text covered by this node, trimmed.
    pub fn text(&self) -> &'a str {
        self.file.slice(self.span()).trim()
    }

    /// Children in document order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let file = self.file;
        file.tree
            .children(self.id)
            .iter()
            .map(move |id| Node::new(file, *id))
    }

    /// The name-bearing child of a declaration or member.
    pub fn name(&self) -> Option<Node<'a>> {
        self.children().next().filter(|child| child.kind().is_name())
    }

    /// Raw documentation comment attached to this node.
    pub fn doc_comment(&self) -> Option<&'a str> {
        self.file.tree.doc(self.id).map(|span| self.file.slice(span))
    }

    pub fn location(&self) -> Location {
        self.file.location(self.span().start)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind())
            .field("location", &self.location().to_string())
            .finish()
    }
}

/// A set of parsed files plus the symbol table bound over them.
#[derive(Debug, Default)]
pub struct Corpus {
    files: Vec<SourceFile>,
    symbols: SymbolTable,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and bind one source text.
    pub fn add_source(
        &mut self,
        path: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> SyntaxResult<FileId> {
        let id = self.next_id();
        let file = SourceFile::parse(id, path, text)?;
        Ok(self.add_file(file))
    }

    /// Bind and add an already-parsed file. Its id is reassigned.
    pub fn add_file(&mut self, mut file: SourceFile) -> FileId {
        let id = self.next_id();
        file.id = id;
        Binder::new(&mut self.symbols).bind(&file);
        tracing::debug!(
            path = %file.path.display(),
            nodes = file.tree.len(),
            "bound source file"
        );
        self.files.push(file);
        id
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0 as usize)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn next_id(&self) -> FileId {
        FileId(self.files.len() as u32)
    }
}
