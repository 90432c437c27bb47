//! Parser for the Qex language
//!
//! A recursive descent parser that produces a tagged syntax tree from a
//! token stream. The grammar is small:
//!
//! ```text
//! root  := expr* EOF
//! expr  := number | symbol | sexpr | qexpr
//! sexpr := '(' expr* ')'
//! qexpr := '{' expr* '}'
//! ```

use crate::ast::{SyntaxNode, TAG_NUMBER, TAG_QEXPR, TAG_ROOT, TAG_SEXPR, TAG_SYMBOL};
use crate::common::Span;
use crate::diagnostics::{ParseError, SourceFile};
use crate::lexer::{Token, TokenKind};

/// Parse a token stream into a syntax tree rooted at a `root` node
pub fn parse(tokens: &[Token], file: &SourceFile) -> Result<SyntaxNode, ParseError> {
    let mut parser = Parser::new(tokens, file);
    parser.parse_root()
}

/// Parser state
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    file: &'a SourceFile,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], file: &'a SourceFile) -> Self {
        Self {
            tokens,
            pos: 0,
            file,
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream should have at least EOF")
        })
    }

    fn peek(&self) -> TokenKind {
        self.current().kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn advance(&mut self) -> &Token {
        let tok = &self.tokens[self.pos.min(self.tokens.len() - 1)];
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn span(&self) -> Span {
        self.current().span
    }

    // ==================== GRAMMAR ====================

    fn parse_root(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = Vec::new();

        while !self.at(TokenKind::Eof) {
            children.push(self.parse_expr()?);
        }

        Ok(SyntaxNode::seq(TAG_ROOT, children))
    }

    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        match self.peek() {
            TokenKind::Number => {
                let text = self.advance().text.clone();
                Ok(SyntaxNode::leaf(TAG_NUMBER, text))
            }
            TokenKind::Symbol => {
                let text = self.advance().text.clone();
                Ok(SyntaxNode::leaf(TAG_SYMBOL, text))
            }
            TokenKind::LBrace => self.parse_seq(TAG_QEXPR, TokenKind::RBrace),
            TokenKind::LParen => self.parse_seq(TAG_SEXPR, TokenKind::RParen),
            TokenKind::RParen | TokenKind::RBrace => Err(ParseError::UnmatchedDelimiter {
                found: self.current().text.clone(),
                span: self.span().into(),
                src: self.file.to_named_source(),
            }),
            TokenKind::Eof => Err(ParseError::UnclosedDelimiter {
                expected: "expression".to_string(),
                open_span: self.span().into(),
                src: self.file.to_named_source(),
            }),
        }
    }

    /// Parse a delimited expression sequence, keeping the delimiter tokens
    /// as `char` children so the tree mirrors the wire layout the reader
    /// expects.
    fn parse_seq(&mut self, tag: &'static str, close: TokenKind) -> Result<SyntaxNode, ParseError> {
        let (open_span, open_text) = {
            let tok = self.advance();
            (tok.span, tok.text.clone())
        };
        let mut children = vec![SyntaxNode::delimiter(open_text)];

        while !self.at(close) {
            if self.at(TokenKind::Eof) {
                return Err(ParseError::UnclosedDelimiter {
                    expected: close.as_str().to_string(),
                    open_span: open_span.into(),
                    src: self.file.to_named_source(),
                });
            }
            children.push(self.parse_expr()?);
        }

        let close_text = self.advance().text.clone();
        children.push(SyntaxNode::delimiter(close_text));

        Ok(SyntaxNode::seq(tag, children))
    }
}
