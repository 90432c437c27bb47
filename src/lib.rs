//! Qex, a tiny dynamically-typed s-expression language
//!
//! A value model, a single flat binding environment, and a tree-walking
//! evaluator. Lists come in two flavors: s-expressions `( ... )` evaluate by
//! applying their head to their tail, q-expressions `{ ... }` are inert data.
//! Runtime failures are ordinary `Error` values flowing through the same
//! channel as results; only syntax errors use a separate diagnostic path.
//!
//! # Architecture
//!
//! ```text
//! Source → Lexer → Parser → tagged syntax tree → Reader → Value → Evaluator → Value
//! ```
//!
//! # Example
//!
//! ```text
//! qex> (def {x} 5)
//! ()
//! qex> (+ x (* 2 3))
//! 11
//! qex> (head {a b c})
//! {a}
//! ```

pub mod ast;
pub mod common;
pub mod diagnostics;
pub mod interp;
pub mod lexer;
pub mod parser;
pub mod repl;

// Re-exports for convenience
pub use ast::SyntaxNode;
pub use diagnostics::{ParseError, SourceFile};
pub use interp::{Env, RunState, Value};

/// Interpreter version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse source text to a tagged syntax tree
pub fn parse(file: &SourceFile) -> Result<SyntaxNode, ParseError> {
    let tokens = lexer::lex_file(file)?;
    parser::parse(&tokens, file)
}

/// Run one unit of input (a REPL line or script line) against an environment
pub fn run_line(env: &mut Env, file: &SourceFile) -> Result<Value, ParseError> {
    let tree = parse(file)?;
    tracing::trace!(input = %file.content, "evaluating");
    Ok(interp::eval(env, interp::read(&tree)))
}

/// Convenience wrapper over [`run_line`] for anonymous input
pub fn run_source(env: &mut Env, source: &str) -> Result<Value, ParseError> {
    run_line(env, &SourceFile::new("<stdin>", source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_run_source_pipeline() {
        let mut env = Env::new();
        let result = run_source(&mut env, "(+ 1 2)").unwrap();
        assert_eq!(result, Value::Number(3));
    }
}
