//! Type expression parsing.

use super::Parser;
use crate::error::SyntaxResult;
use crate::kind::SyntaxKind;
use crate::lexer::TokenKind;
use crate::tree::NodeId;

impl<'src> Parser<'src> {
    /// Parse a type expression: `A | B`, `A & B`, `T[]`, references, literals.
    pub(super) fn parse_type(&mut self) -> SyntaxResult<NodeId> {
        let start = self.current().span.start;
        self.eat(TokenKind::Pipe);

        let mut types = vec![self.parse_intersection_type()?];
        while self.eat(TokenKind::Pipe).is_some() {
            types.push(self.parse_intersection_type()?);
        }

        if types.len() == 1 {
            return Ok(types.remove(0));
        }
        let span = self.span_from(start);
        Ok(self.tree.alloc(SyntaxKind::UnionType, span, types))
    }

    fn parse_intersection_type(&mut self) -> SyntaxResult<NodeId> {
        let start = self.current().span.start;
        self.eat(TokenKind::Amp);

        let mut types = vec![self.parse_postfix_type()?];
        while self.eat(TokenKind::Amp).is_some() {
            types.push(self.parse_postfix_type()?);
        }

        if types.len() == 1 {
            return Ok(types.remove(0));
        }
        let span = self.span_from(start);
        Ok(self.tree.alloc(SyntaxKind::IntersectionType, span, types))
    }

    /// Primary type followed by any number of `[]` suffixes.
    fn parse_postfix_type(&mut self) -> SyntaxResult<NodeId> {
        let start = self.current().span.start;
        let mut ty = self.parse_primary_type()?;

        while self.at(TokenKind::LBracket) {
            if self.peek(1).kind != TokenKind::RBracket {
                return Err(self.unsupported("indexed access types"));
            }
            self.advance();
            self.advance();
            let span = self.span_from(start);
            ty = self.tree.alloc(SyntaxKind::ArrayType, span, vec![ty]);
        }
        Ok(ty)
    }

    fn parse_primary_type(&mut self) -> SyntaxResult<NodeId> {
        let start = self.current().span.start;

        match self.current().kind {
            TokenKind::Ident => {
                let word = self.text(self.current());
                if word == "true" || word == "false" {
                    let token = self.advance();
                    return Ok(self.leaf_from_token(SyntaxKind::LiteralType, token));
                }
                if let Some(kind) = SyntaxKind::from_type_keyword(word) {
                    let token = self.advance();
                    return Ok(self.leaf_from_token(kind, token));
                }
                self.parse_type_reference()
            }
            TokenKind::String => {
                let token = self.advance();
                let literal = self.leaf_from_token(SyntaxKind::StringLiteral, token);
                Ok(self
                    .tree
                    .alloc(SyntaxKind::LiteralType, token.span, vec![literal]))
            }
            TokenKind::Number | TokenKind::Minus => {
                self.eat(TokenKind::Minus);
                self.expect(TokenKind::Number)?;
                let span = self.span_from(start);
                let literal = self.tree.leaf(SyntaxKind::NumericLiteral, span);
                Ok(self.tree.alloc(SyntaxKind::LiteralType, span, vec![literal]))
            }
            TokenKind::LBrace => {
                self.advance();
                let members = self.parse_members(SyntaxKind::PropertySignature)?;
                self.expect(TokenKind::RBrace)?;
                let span = self.span_from(start);
                Ok(self.tree.alloc(SyntaxKind::TypeLiteral, span, members))
            }
            TokenKind::LBracket => {
                self.advance();
                let mut elements = Vec::new();
                while !self.at(TokenKind::RBracket) {
                    elements.push(self.parse_type()?);
                    if self.eat(TokenKind::Comma).is_none() {
                        break;
                    }
                }
                self.expect(TokenKind::RBracket)?;
                let span = self.span_from(start);
                Ok(self.tree.alloc(SyntaxKind::TupleType, span, elements))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_type()?;
                self.expect(TokenKind::RParen)?;
                let span = self.span_from(start);
                Ok(self
                    .tree
                    .alloc(SyntaxKind::ParenthesizedType, span, vec![inner]))
            }
            _ => Err(self.error_expected("type")),
        }
    }

    /// `Name` or `ns.Name<A, B>`; type arguments become direct children.
    fn parse_type_reference(&mut self) -> SyntaxResult<NodeId> {
        let start = self.current().span.start;
        let mut children = vec![self.parse_entity_name()?];
        if self.at(TokenKind::Lt) {
            children.extend(self.parse_type_arguments()?);
        }
        let span = self.span_from(start);
        Ok(self.tree.alloc(SyntaxKind::TypeReference, span, children))
    }

    /// `<A, B>`
    pub(super) fn parse_type_arguments(&mut self) -> SyntaxResult<Vec<NodeId>> {
        self.expect(TokenKind::Lt)?;
        let mut args = vec![self.parse_type()?];
        while self.eat(TokenKind::Comma).is_some() {
            args.push(self.parse_type()?);
        }
        self.expect(TokenKind::Gt)?;
        Ok(args)
    }
}
