//! Runtime values for the evaluator

use std::fmt;

use super::env::Env;

/// A native builtin function: takes the environment and owns its argument
/// list, returns the result value.
pub type BuiltinFn = fn(&mut Env, Vec<Value>) -> Value;

/// Runtime value
///
/// Every value exclusively owns its children; `clone()` is the deep copy the
/// environment boundary requires. Runtime failures are ordinary values
/// (`Value::Error`) and flow through the same channel as results.
#[derive(Clone)]
pub enum Value {
    /// Fixed-width signed integer
    Number(i64),
    /// Name to be looked up in the environment
    Symbol(String),
    /// Runtime error, self-evaluating and propagating
    Error(String),
    /// Native builtin function
    Function(BuiltinFn),
    /// Ordered sequence evaluated by applying head to tail
    Sexpr(Vec<Value>),
    /// Ordered sequence that evaluates to itself (quoted)
    Qexpr(Vec<Value>),
}

impl Value {
    /// Construct an error value
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Get the type name of this value, as used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Symbol(_) => "Symbol",
            Value::Error(_) => "Error",
            Value::Function(_) => "Function",
            Value::Sexpr(_) => "S-Expression",
            Value::Qexpr(_) => "Q-Expression",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// An empty s-expression, the unit-like result of `def`, `values`, `exit`
    pub fn empty_sexpr() -> Self {
        Value::Sexpr(Vec::new())
    }
}

fn fmt_seq(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::Function(_) => write!(f, "<function>"),
            Value::Sexpr(items) => fmt_seq(f, items, '(', ')'),
            Value::Qexpr(items) => fmt_seq(f, items, '{', '}'),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({})", n),
            Value::Symbol(s) => write!(f, "Symbol({:?})", s),
            Value::Error(msg) => write!(f, "Error({:?})", msg),
            Value::Function(_) => write!(f, "Function(<function>)"),
            Value::Sexpr(items) => f.debug_tuple("Sexpr").field(items).finish(),
            Value::Qexpr(items) => f.debug_tuple("Qexpr").field(items).finish(),
        }
    }
}

/// Structural equality for data values. Functions are compared by behavior
/// only, never by identity, so two Function values are never equal here.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Sexpr(a), Value::Sexpr(b)) => a == b,
            (Value::Qexpr(a), Value::Qexpr(b)) => a == b,
            _ => false,
        }
    }
}
