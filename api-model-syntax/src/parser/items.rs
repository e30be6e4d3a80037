//! Statement, declaration and member parsing.

use super::Parser;
use crate::error::SyntaxResult;
use crate::kind::SyntaxKind;
use crate::lexer::TokenKind;
use crate::span::Span;
use crate::tree::NodeId;

/// Statement modifiers consumed without producing a node.
const STATEMENT_MODIFIERS: &[&str] = &["export", "declare", "default", "abstract"];

/// Member modifiers consumed without producing a node.
const MEMBER_MODIFIERS: &[&str] = &[
    "readonly",
    "static",
    "public",
    "private",
    "protected",
    "declare",
];

impl<'src> Parser<'src> {
    /// Parse one top-level or module-level statement.
    ///
    /// Returns `None` for empty statements.
    pub(super) fn parse_statement(&mut self) -> SyntaxResult<Option<NodeId>> {
        if self.eat(TokenKind::Semi).is_some() {
            return Ok(None);
        }

        let first = self.current();
        let start = first.span.start;
        let doc = first.doc;

        if self.at_word("import") {
            return self.parse_import(start).map(Some);
        }

        while STATEMENT_MODIFIERS.iter().any(|m| self.at_word(m)) {
            self.advance();
            // `export { A } from '...'` and `export * from '...'`
            if self.at(TokenKind::LBrace) || self.at(TokenKind::Star) {
                return self.parse_import(start).map(Some);
            }
        }
        if self.at_word("const") && self.peek_is_word(1, "enum") {
            self.advance();
        }

        let node = if self.at_word("interface") {
            self.parse_interface(start)?
        } else if self.at_word("enum") {
            self.parse_enum(start)?
        } else if self.at_word("class") {
            self.parse_class(start)?
        } else if self.at_word("type") {
            self.parse_type_alias(start)?
        } else if self.at_word("namespace") || self.at_word("module") {
            self.parse_module(start)?
        } else {
            return Err(self.unsupported(format!(
                "statement starting with {}",
                self.describe_current()
            )));
        };

        self.attach_doc(node, doc);
        Ok(Some(node))
    }

    fn peek_is_word(&self, offset: usize, word: &str) -> bool {
        let token = self.peek(offset);
        token.kind == TokenKind::Ident && self.text(token) == word
    }

    /// Skip an import or re-export through its module specifier string.
    fn parse_import(&mut self, start: usize) -> SyntaxResult<NodeId> {
        let mut depth = 0usize;
        loop {
            match self.current().kind {
                TokenKind::Eof => return Err(self.error_expected("module specifier")),
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                TokenKind::String if depth == 0 => {
                    self.advance();
                    break;
                }
                _ => {}
            }
            self.advance();
        }
        // `import x = require('...')`
        self.eat(TokenKind::RParen);
        self.eat(TokenKind::Semi);

        let span = self.span_from(start);
        Ok(self.tree.leaf(SyntaxKind::ImportDeclaration, span))
    }

    /// `interface Name<T> extends A, B { members }`
    fn parse_interface(&mut self, start: usize) -> SyntaxResult<NodeId> {
        self.advance();
        let mut children = vec![self.parse_identifier()?];
        if self.at(TokenKind::Lt) {
            children.extend(self.parse_type_parameters()?);
        }
        if self.at_word("extends") {
            children.push(self.parse_heritage_clause()?);
        }
        children.push(self.parse_member_list(SyntaxKind::PropertySignature)?);

        let span = self.span_from(start);
        Ok(self
            .tree
            .alloc(SyntaxKind::InterfaceDeclaration, span, children))
    }

    /// `class Name<T> extends A implements B { members }`
    fn parse_class(&mut self, start: usize) -> SyntaxResult<NodeId> {
        self.advance();
        let mut children = vec![self.parse_identifier()?];
        if self.at(TokenKind::Lt) {
            children.extend(self.parse_type_parameters()?);
        }
        while self.at_word("extends") || self.at_word("implements") {
            children.push(self.parse_heritage_clause()?);
        }
        children.push(self.parse_member_list(SyntaxKind::PropertyDeclaration)?);

        let span = self.span_from(start);
        Ok(self.tree.alloc(SyntaxKind::ClassDeclaration, span, children))
    }

    /// `enum Name { A, B = 'b', }`
    fn parse_enum(&mut self, start: usize) -> SyntaxResult<NodeId> {
        self.advance();
        let name = self.parse_identifier()?;
        self.expect(TokenKind::LBrace)?;

        let list_start = self.current().span.start;
        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) {
            if self.eat(TokenKind::Comma).is_some() {
                continue;
            }
            members.push(self.parse_enum_member()?);
        }
        let list = self.alloc_list(list_start, members);
        self.expect(TokenKind::RBrace)?;

        let span = self.span_from(start);
        Ok(self
            .tree
            .alloc(SyntaxKind::EnumDeclaration, span, vec![name, list]))
    }

    fn parse_enum_member(&mut self) -> SyntaxResult<NodeId> {
        let first = self.current();
        let mut children = vec![self.parse_property_name()?];

        if self.eat(TokenKind::Eq).is_some() {
            children.push(self.parse_enum_initializer()?);
        }

        let span = self.span_from(first.span.start);
        let member = self.tree.alloc(SyntaxKind::EnumMember, span, children);
        self.attach_doc(member, first.doc);
        Ok(member)
    }

    fn parse_enum_initializer(&mut self) -> SyntaxResult<NodeId> {
        let start = self.current().span.start;
        match self.current().kind {
            TokenKind::String => {
                let token = self.advance();
                Ok(self.leaf_from_token(SyntaxKind::StringLiteral, token))
            }
            TokenKind::Number => {
                let token = self.advance();
                Ok(self.leaf_from_token(SyntaxKind::NumericLiteral, token))
            }
            TokenKind::Minus => {
                self.advance();
                self.expect(TokenKind::Number)?;
                let span = self.span_from(start);
                Ok(self.tree.leaf(SyntaxKind::NumericLiteral, span))
            }
            TokenKind::Ident => self.parse_entity_name(),
            _ => Err(self.error_expected("enum member initializer")),
        }
    }

    /// `type Name<T> = Type;`
    fn parse_type_alias(&mut self, start: usize) -> SyntaxResult<NodeId> {
        self.advance();
        let mut children = vec![self.parse_identifier()?];
        if self.at(TokenKind::Lt) {
            children.extend(self.parse_type_parameters()?);
        }
        self.expect(TokenKind::Eq)?;
        children.push(self.parse_type()?);
        self.eat(TokenKind::Semi);

        let span = self.span_from(start);
        Ok(self
            .tree
            .alloc(SyntaxKind::TypeAliasDeclaration, span, children))
    }

    /// `namespace Name { statements }`
    fn parse_module(&mut self, start: usize) -> SyntaxResult<NodeId> {
        self.advance();
        let name = if self.at(TokenKind::String) {
            let token = self.advance();
            self.leaf_from_token(SyntaxKind::StringLiteral, token)
        } else {
            self.parse_identifier()?
        };
        if self.at(TokenKind::Dot) {
            return Err(self.unsupported("dotted namespace names"));
        }

        let block_start = self.expect(TokenKind::LBrace)?.span.start;
        let mut statements = Vec::new();
        while !self.at(TokenKind::RBrace) {
            if self.at(TokenKind::Eof) {
                return Err(self.error_expected(TokenKind::RBrace.describe()));
            }
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
        }
        self.expect(TokenKind::RBrace)?;
        let block_span = self.span_from(block_start);
        let block = self
            .tree
            .alloc(SyntaxKind::ModuleBlock, block_span, statements);

        let span = self.span_from(start);
        Ok(self
            .tree
            .alloc(SyntaxKind::ModuleDeclaration, span, vec![name, block]))
    }

    /// `extends A, B.C<D>` or `implements A`
    fn parse_heritage_clause(&mut self) -> SyntaxResult<NodeId> {
        let start = self.advance().span.start;
        let mut types = Vec::new();
        loop {
            let type_start = self.current().span.start;
            let mut children = vec![self.parse_entity_name()?];
            if self.at(TokenKind::Lt) {
                children.extend(self.parse_type_arguments()?);
            }
            let span = self.span_from(type_start);
            types.push(
                self.tree
                    .alloc(SyntaxKind::ExpressionWithTypeArguments, span, children),
            );
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }

        let span = self.span_from(start);
        Ok(self.tree.alloc(SyntaxKind::HeritageClause, span, types))
    }

    /// `<T, U extends X = Y>`
    fn parse_type_parameters(&mut self) -> SyntaxResult<Vec<NodeId>> {
        self.expect(TokenKind::Lt)?;
        let mut params = Vec::new();
        loop {
            let start = self.current().span.start;
            let mut children = vec![self.parse_identifier()?];
            if self.eat_word("extends").is_some() {
                children.push(self.parse_type()?);
            }
            if self.eat(TokenKind::Eq).is_some() {
                children.push(self.parse_type()?);
            }
            let span = self.span_from(start);
            params.push(self.tree.alloc(SyntaxKind::TypeParameter, span, children));
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::Gt)?;
        Ok(params)
    }

    /// `{ a: T; b?: U }` wrapped in a `SyntaxList` node.
    fn parse_member_list(&mut self, member_kind: SyntaxKind) -> SyntaxResult<NodeId> {
        self.expect(TokenKind::LBrace)?;
        let list_start = self.current().span.start;
        let members = self.parse_members(member_kind)?;
        let list = self.alloc_list(list_start, members);
        self.expect(TokenKind::RBrace)?;
        Ok(list)
    }

    /// Members up to (not including) the closing brace.
    pub(super) fn parse_members(&mut self, member_kind: SyntaxKind) -> SyntaxResult<Vec<NodeId>> {
        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) {
            if self.at(TokenKind::Eof) {
                return Err(self.error_expected(TokenKind::RBrace.describe()));
            }
            if self.eat(TokenKind::Semi).is_some() || self.eat(TokenKind::Comma).is_some() {
                continue;
            }
            members.push(self.parse_property(member_kind)?);
        }
        Ok(members)
    }

    fn alloc_list(&mut self, list_start: usize, members: Vec<NodeId>) -> NodeId {
        let span = match (members.first(), members.last()) {
            (Some(first), Some(last)) => {
                Span::new(self.tree.span(*first).start, self.tree.span(*last).end)
            }
            _ => Span::new(list_start, list_start),
        };
        self.tree.alloc(SyntaxKind::SyntaxList, span, members)
    }

    /// `readonly name?: Type`
    fn parse_property(&mut self, member_kind: SyntaxKind) -> SyntaxResult<NodeId> {
        let first = self.current();

        while MEMBER_MODIFIERS.iter().any(|m| self.at_word(m))
            && matches!(
                self.peek(1).kind,
                TokenKind::Ident | TokenKind::String | TokenKind::Number | TokenKind::LBracket
            )
        {
            self.advance();
        }

        if self.at(TokenKind::LBracket) {
            return Err(self.unsupported("index signatures"));
        }
        let mut children = vec![self.parse_property_name()?];

        if self.eat(TokenKind::Question).is_none() {
            self.eat(TokenKind::Bang);
        }
        if self.at(TokenKind::LParen) || self.at(TokenKind::Lt) {
            return Err(self.unsupported("method signatures"));
        }
        if self.eat(TokenKind::Colon).is_some() {
            children.push(self.parse_type()?);
        }
        if self.at(TokenKind::Eq) {
            return Err(self.unsupported("property initializers"));
        }

        let span = self.span_from(first.span.start);
        let property = self.tree.alloc(member_kind, span, children);
        self.attach_doc(property, first.doc);
        Ok(property)
    }

    fn parse_property_name(&mut self) -> SyntaxResult<NodeId> {
        let kind = match self.current().kind {
            TokenKind::Ident => SyntaxKind::Identifier,
            TokenKind::String => SyntaxKind::StringLiteral,
            TokenKind::Number => SyntaxKind::NumericLiteral,
            _ => return Err(self.error_expected("property name")),
        };
        let token = self.advance();
        Ok(self.leaf_from_token(kind, token))
    }
}
