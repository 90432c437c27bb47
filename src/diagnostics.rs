//! Diagnostic reporting with source locations
//!
//! Syntax errors are reported through miette with span labels. They are a
//! separate channel from runtime `Value::Error` results: a line that fails to
//! parse never reaches the reader or the evaluator.

use crate::common::Span;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

/// Source text for error reporting
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Arc::from(content.into()),
        }
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

/// Convert our Span to miette's SourceSpan
impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Syntax error produced by the lexer or parser
#[derive(Error, Debug, Diagnostic)]
pub enum ParseError {
    #[error("Unrecognized character")]
    #[diagnostic(code(parse::invalid_token))]
    InvalidToken {
        #[label("not part of any token")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected `{found}`")]
    #[diagnostic(
        code(parse::unmatched_delimiter),
        help("there is no matching opening delimiter")
    )]
    UnmatchedDelimiter {
        found: String,
        #[label("unexpected closing delimiter")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected end of input: expected `{expected}`")]
    #[diagnostic(code(parse::unclosed_delimiter))]
    UnclosedDelimiter {
        expected: String,
        #[label("opened here")]
        open_span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}
