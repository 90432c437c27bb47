//! Syntax tree for the Qex language
//!
//! The parser produces a generic tagged tree rather than a typed AST: every
//! node carries a tag string and either literal text (leaves) or an ordered
//! list of children (sequences). Sequence nodes keep their structural
//! delimiter children (tag `char`); the tree reader in `interp::read` skips
//! those when building runtime values. Serde derives support the CLI's
//! parse-tree JSON dump.

use serde::Serialize;

/// Tag on the whole-input node
pub const TAG_ROOT: &str = "root";
/// Tag on integer literal leaves
pub const TAG_NUMBER: &str = "number";
/// Tag on symbol leaves
pub const TAG_SYMBOL: &str = "symbol";
/// Tag on parenthesized expression sequences
pub const TAG_SEXPR: &str = "sexpr";
/// Tag on braced expression sequences
pub const TAG_QEXPR: &str = "qexpr";
/// Tag on structural delimiter children of sexpr/qexpr nodes
pub const TAG_CHAR: &str = "char";

/// A tagged syntax-tree node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxNode {
    pub tag: &'static str,
    pub text: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// A leaf node carrying literal text
    pub fn leaf(tag: &'static str, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// A sequence node with ordered children
    pub fn seq(tag: &'static str, children: Vec<SyntaxNode>) -> Self {
        Self {
            tag,
            text: String::new(),
            children,
        }
    }

    /// Structural delimiter node, kept in the tree and skipped by the reader
    pub fn delimiter(text: impl Into<String>) -> Self {
        Self::leaf(TAG_CHAR, text)
    }

    /// Children that carry expressions (delimiters filtered out)
    pub fn exprs(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|c| c.tag != TAG_CHAR)
    }
}
