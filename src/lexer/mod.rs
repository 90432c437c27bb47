//! Lexer for the Qex language
//!
//! Built on logos. Produces an Eof-terminated token stream, or a
//! [`ParseError`] for any character outside the symbol alphabet.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::common::Span;
use crate::diagnostics::{ParseError, SourceFile};
use logos::Logos;

/// Lex a source string into a token stream
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    lex_file(&SourceFile::new("<stdin>", source))
}

/// Lex a named source file into a token stream
pub fn lex_file(file: &SourceFile) -> Result<Vec<Token>, ParseError> {
    let source = file.content.as_ref();
    let mut tokens = Vec::new();

    for (result, range) in TokenKind::lexer(source).spanned() {
        let span = Span::from(range);
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                span,
                text: source[span.start..span.end].to_string(),
            }),
            Err(()) => {
                return Err(ParseError::InvalidToken {
                    span: span.into(),
                    src: file.to_named_source(),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(source.len(), source.len()),
        text: String::new(),
    });

    Ok(tokens)
}
