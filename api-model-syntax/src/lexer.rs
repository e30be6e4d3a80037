//! Lexer for declaration sources using logos.
//!
//! Keywords are not reserved at this level: every word is an `Ident` and the
//! parser compares text, so `type`, `map` or `string` stay usable as names.
//! Comments are dropped, except that the last `/** ... */` block before a
//! token is remembered as that token's documentation comment.

use logos::Logos;

use crate::span::Span;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    String,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("*")]
    Star,
    #[token("-")]
    Minus,
}

/// Token kinds seen by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    String,
    Number,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Comma,
    Semi,
    Colon,
    Question,
    Bang,
    Dot,
    Eq,
    Pipe,
    Amp,
    Star,
    Minus,
    Eof,
}

impl TokenKind {
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::String => "string literal",
            TokenKind::Number => "number",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::Comma => "','",
            TokenKind::Semi => "';'",
            TokenKind::Colon => "':'",
            TokenKind::Question => "'?'",
            TokenKind::Bang => "'!'",
            TokenKind::Dot => "'.'",
            TokenKind::Eq => "'='",
            TokenKind::Pipe => "'|'",
            TokenKind::Amp => "'&'",
            TokenKind::Star => "'*'",
            TokenKind::Minus => "'-'",
            TokenKind::Eof => "end of file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Documentation comment immediately preceding this token
    pub doc: Option<Span>,
}

/// Unrecognized input at `span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub span: Span,
}

/// Lex all tokens from `source`, terminated by an `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);
    let mut pending_doc: Option<Span> = None;

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let raw = result.map_err(|()| LexError { span })?;

        let kind = match raw {
            RawToken::LineComment => continue,
            RawToken::BlockComment => {
                let slice = lexer.slice();
                if slice.starts_with("/**") && slice != "/**/" {
                    pending_doc = Some(span);
                }
                continue;
            }
            RawToken::Ident => TokenKind::Ident,
            RawToken::String => TokenKind::String,
            RawToken::Number => TokenKind::Number,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semi => TokenKind::Semi,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Question => TokenKind::Question,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Amp => TokenKind::Amp,
            RawToken::Star => TokenKind::Star,
            RawToken::Minus => TokenKind::Minus,
        };

        tokens.push(Token {
            kind,
            span,
            doc: pending_doc.take(),
        });
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(source.len(), source.len()),
        doc: None,
    });
    Ok(tokens)
}

/// Strip comment delimiters and leading `*` gutters from a doc comment.
///
/// Returns `None` when nothing but whitespace remains.
pub fn clean_doc_comment(raw: &str) -> Option<String> {
    let body = raw
        .strip_prefix("/**")
        .and_then(|s| s.strip_suffix("*/"))
        .unwrap_or(raw);

    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').map(str::trim_start).unwrap_or(line)
        })
        .collect();

    let text = lines.join("\n").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_keywords_lex_as_identifiers() {
        assert_eq!(
            kinds("interface type map"),
            vec![
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_punctuation_and_literals() {
        assert_eq!(
            kinds("'200': { a?: string[] } = 42;"),
            vec![
                TokenKind::String,
                TokenKind::Colon,
                TokenKind::LBrace,
                TokenKind::Ident,
                TokenKind::Question,
                TokenKind::Colon,
                TokenKind::Ident,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::RBrace,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("// license\n/* block */ enum"),
            vec![TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_doc_comment_attaches_to_next_token() {
        let source = "/** The color */\nenum Color {}";
        let tokens = tokenize(source).unwrap();
        let doc = tokens[0].doc.unwrap();
        assert_eq!(&source[doc.start..doc.end], "/** The color */");
        assert!(tokens[1].doc.is_none());
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let err = tokenize("enum # {}").unwrap_err();
        assert_eq!(err.span, Span::new(5, 6));
    }

    #[test]
    fn test_clean_doc_comment() {
        let raw = "/**\n * @rest_spec_name indices.clone\n * @since 7.4.0\n */";
        assert_eq!(
            clean_doc_comment(raw).as_deref(),
            Some("@rest_spec_name indices.clone\n@since 7.4.0")
        );
        assert_eq!(clean_doc_comment("/** */"), None);
        assert_eq!(
            clean_doc_comment("/** Single line */").as_deref(),
            Some("Single line")
        );
    }
}
