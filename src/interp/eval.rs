//! Tree-walking evaluator
//!
//! Reduction is a plain recursive walk: symbols resolve through the
//! environment, s-expressions evaluate their children left to right and then
//! apply the head to the tail, everything else evaluates to itself.

use super::env::Env;
use super::value::Value;

/// Reduce a value to its result. Runtime failures come back as
/// `Value::Error`; this function never fails at the Rust level.
pub fn eval(env: &mut Env, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name),
        Value::Sexpr(items) => eval_sexpr(env, items),
        // Number, Error, Function and Qexpr are self-evaluating
        other => other,
    }
}

fn eval_sexpr(env: &mut Env, items: Vec<Value>) -> Value {
    // Evaluate every child left to right
    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        evaluated.push(eval(env, item));
    }

    // First error supersedes the whole expression; siblings to its right are
    // dropped unreported
    if let Some(i) = evaluated.iter().position(Value::is_error) {
        return evaluated.swap_remove(i);
    }

    // () is a value, not an error
    if evaluated.is_empty() {
        return Value::Sexpr(evaluated);
    }

    // A lone expression stands for itself
    if evaluated.len() == 1 {
        return evaluated.remove(0);
    }

    // Apply head to tail
    let head = evaluated.remove(0);
    match head {
        Value::Function(func) => func(env, evaluated),
        _ => Value::error("First element is not a function!"),
    }
}
