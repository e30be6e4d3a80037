//! Recursive descent parser for the declaration subset.
//!
//! The parser allocates nodes bottom-up into a [`SyntaxTree`] and fails fast
//! on the first construct it does not understand. Statements and members are
//! handled in `parser/items.rs`, type expressions in `parser/types.rs`.

mod items;
mod types;

use std::path::Path;

use crate::error::{SyntaxError, SyntaxResult};
use crate::kind::SyntaxKind;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::span::{LineIndex, Location, Span};
use crate::tree::{NodeId, SyntaxTree};

/// Parse `source` into a syntax tree rooted at a `SourceFile` node.
pub fn parse(source: &str, path: &Path, lines: &LineIndex) -> SyntaxResult<SyntaxTree> {
    let tokens = tokenize(source).map_err(|e| SyntaxError::UnexpectedCharacter {
        location: lines.location(path, e.span.start),
        found: source[e.span.start..e.span.end].to_string(),
    })?;

    Parser::new(source, path, lines, tokens).parse_source_file()
}

/// Parser state.
pub(crate) struct Parser<'src> {
    source: &'src str,
    path: &'src Path,
    lines: &'src LineIndex,
    tokens: Vec<Token>,
    pos: usize,
    /// End offset of the last consumed token
    prev_end: usize,
    tree: SyntaxTree,
}

impl<'src> Parser<'src> {
    fn new(
        source: &'src str,
        path: &'src Path,
        lines: &'src LineIndex,
        tokens: Vec<Token>,
    ) -> Self {
        Parser {
            source,
            path,
            lines,
            tokens,
            pos: 0,
            prev_end: 0,
            tree: SyntaxTree::new(),
        }
    }

    fn parse_source_file(mut self) -> SyntaxResult<SyntaxTree> {
        let mut statements = Vec::new();
        while !self.at(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
        }

        let root = self.tree.alloc(
            SyntaxKind::SourceFile,
            Span::new(0, self.source.len()),
            statements,
        );
        self.tree.set_root(root);
        Ok(self.tree)
    }

    // ===== Token access =====

    fn current(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek(&self, offset: usize) -> Token {
        self.tokens[(self.pos + offset).min(self.tokens.len() - 1)]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn text(&self, token: Token) -> &'src str {
        &self.source[token.span.start..token.span.end]
    }

    fn at_word(&self, word: &str) -> bool {
        let token = self.current();
        token.kind == TokenKind::Ident && self.text(token) == word
    }

    fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
            self.prev_end = token.span.end;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn eat_word(&mut self, word: &str) -> Option<Token> {
        if self.at_word(word) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind) -> SyntaxResult<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(kind.describe()))
        }
    }

    // ===== Diagnostics =====

    fn location(&self, offset: usize) -> Location {
        self.lines.location(self.path, offset)
    }

    fn describe_current(&self) -> String {
        let token = self.current();
        match token.kind {
            TokenKind::Eof => token.kind.describe().to_string(),
            _ => format!("'{}'", self.text(token)),
        }
    }

    fn error_expected(&self, expected: &str) -> SyntaxError {
        SyntaxError::unexpected_token(
            self.location(self.current().span.start),
            expected,
            self.describe_current(),
        )
    }

    fn unsupported(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::unsupported(self.location(self.current().span.start), message)
    }

    // ===== Node helpers =====

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.prev_end.max(start))
    }

    fn leaf_from_token(&mut self, kind: SyntaxKind, token: Token) -> NodeId {
        self.tree.leaf(kind, token.span)
    }

    /// Parse an identifier into an `Identifier` node.
    fn parse_identifier(&mut self) -> SyntaxResult<NodeId> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(self.leaf_from_token(SyntaxKind::Identifier, token))
    }

    /// Parse `A` or `A.B.C` into an `Identifier` or nested `QualifiedName`.
    fn parse_entity_name(&mut self) -> SyntaxResult<NodeId> {
        let start = self.current().span.start;
        let mut name = self.parse_identifier()?;
        while self.eat(TokenKind::Dot).is_some() {
            let right = self.parse_identifier()?;
            let span = self.span_from(start);
            name = self
                .tree
                .alloc(SyntaxKind::QualifiedName, span, vec![name, right]);
        }
        Ok(name)
    }

    fn attach_doc(&mut self, node: NodeId, doc: Option<Span>) {
        if let Some(doc) = doc {
            self.tree.attach_doc(node, doc);
        }
    }
}
