//! Token definitions for the Qex lexer

use crate::common::Span;
use logos::Logos;

/// A token with its kind, span, and text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

/// Token kinds recognized by the lexer
///
/// The symbol alphabet covers identifiers and every operator name in one
/// class, so `+` and `add` lex identically. A leading-`-` digit run lexes as
/// a number; `Number` takes priority over `Symbol` when both match the same
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Literals
    #[regex(r"-?[0-9]+(\.[0-9]+)?", priority = 3)]
    Number,

    // Symbols (identifiers and operator names)
    #[regex(r"[a-zA-Z0-9_+\-*/^%\\=<>!&]+", priority = 2)]
    Symbol,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Special
    Eof,
}

impl TokenKind {
    /// Check if this token opens or closes an expression sequence
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::RParen | TokenKind::LBrace | TokenKind::RBrace
        )
    }

    /// Get the string representation of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "<number>",
            TokenKind::Symbol => "<symbol>",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Eof => "<eof>",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
