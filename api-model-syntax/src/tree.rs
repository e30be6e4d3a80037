//! Arena-allocated syntax tree.
//!
//! Nodes are stored in a flat vector and refer to their children by
//! [`NodeId`]. The parser allocates children before their parent, so the
//! root is always the last node allocated.

use std::collections::HashMap;

use crate::kind::SyntaxKind;
use crate::span::Span;

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: SyntaxKind,
    span: Span,
    children: Vec<NodeId>,
}

/// Syntax tree of one source file.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    root: Option<NodeId>,
    /// Documentation comment spans attached to declaration nodes
    docs: HashMap<NodeId, Span>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node with already-allocated children.
    pub fn alloc(&mut self, kind: SyntaxKind, span: Span, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            span,
            children,
        });
        id
    }

    /// Allocate a childless node.
    pub fn leaf(&mut self, kind: SyntaxKind, span: Span) -> NodeId {
        self.alloc(kind, span, Vec::new())
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    /// Root node; falls back to the last allocated node.
    pub fn root(&self) -> Option<NodeId> {
        self.root.or_else(|| {
            self.nodes
                .len()
                .checked_sub(1)
                .map(|last| NodeId(last as u32))
        })
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.nodes[id.index()].kind
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn attach_doc(&mut self, id: NodeId, doc: Span) {
        self.docs.insert(id, doc);
    }

    pub fn doc(&self, id: NodeId) -> Option<Span> {
        self.docs.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in document order (pre-order from the root).
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }
}
