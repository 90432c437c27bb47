//! Tree reader: tagged syntax tree -> runtime value tree
//!
//! The reader is total over well-formed parser output. An unknown tag means
//! the grammar and the reader have diverged, which is a defect in this
//! program rather than a user error, so it panics instead of producing a
//! language-level `Value::Error`.

use crate::ast::{SyntaxNode, TAG_CHAR, TAG_NUMBER, TAG_QEXPR, TAG_ROOT, TAG_SEXPR, TAG_SYMBOL};

use super::value::Value;

/// Convert a syntax-tree node into a value
pub fn read(node: &SyntaxNode) -> Value {
    match node.tag {
        TAG_NUMBER => read_number(&node.text),
        TAG_SYMBOL => Value::Symbol(node.text.clone()),
        TAG_ROOT | TAG_SEXPR => Value::Sexpr(read_children(node)),
        TAG_QEXPR => Value::Qexpr(read_children(node)),
        other => panic!("reader received unknown syntax tag `{}`", other),
    }
}

/// Read expression children in order, skipping structural delimiter nodes
fn read_children(node: &SyntaxNode) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| child.tag != TAG_CHAR)
        .map(read)
        .collect()
}

/// Parse an integer literal. The grammar admits a decimal suffix but the
/// language is integer-only: everything after the first `.` is dropped, and
/// only an out-of-range integer part produces an error value.
fn read_number(text: &str) -> Value {
    let integer_part = text.split('.').next().unwrap_or(text);
    match integer_part.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::error("invalid number"),
    }
}
