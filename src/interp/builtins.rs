//! Builtin registry and native functions
//!
//! Every builtin receives the environment and owns its argument list. Arity
//! and type checks run before any environment mutation; a violated contract
//! comes back as a `Value::Error` naming the function, the expectation, and
//! what was actually passed.

use super::env::Env;
use super::eval;
use super::value::{BuiltinFn, Value};

/// The fixed name -> function table. This is the single source of truth for
/// both registration and the protected-name set.
pub const TABLE: &[(&str, BuiltinFn)] = &[
    // List functions
    ("head", head),
    ("tail", tail),
    ("list", list),
    ("eval", eval_quoted),
    ("join", join),
    ("cons", cons),
    ("len", len),
    ("init", init),
    // Mathematical functions (symbol and word alias share one implementation)
    ("+", add),
    ("add", add),
    ("-", sub),
    ("sub", sub),
    ("*", mul),
    ("mul", mul),
    ("/", div),
    ("div", div),
    ("%", modulo),
    ("mod", modulo),
    ("^", pow),
    ("pow", pow),
    ("min", min),
    ("max", max),
    // Variable functions
    ("def", def),
    ("values", values),
    // Misc. functions
    ("exit", exit),
];

/// Early-return an error value when a builtin contract is violated
macro_rules! ensure {
    ($cond:expr, $($fmt:tt)+) => {
        if !($cond) {
            return Value::error(format!($($fmt)+));
        }
    };
}

fn arity_error(name: &str, got: usize, want: usize) -> Value {
    Value::error(format!(
        "Function '{}' passed incorrect number of arguments. Got {}, expected {}.",
        name, got, want
    ))
}

fn type_error(name: &str, index: usize, got: &Value, want: &str) -> Value {
    Value::error(format!(
        "Function '{}' passed incorrect type for argument {}. Got {}, expected {}.",
        name, index, got.type_name(), want
    ))
}

fn empty_list_error(name: &str) -> Value {
    Value::error(format!("Function '{}' passed empty list {{}}.", name))
}

// ==================== LIST FUNCTIONS ====================

/// `head {a b c}` -> `{a}`
fn head(_env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("head", args.len(), 1);
    }
    match args.remove(0) {
        Value::Qexpr(mut items) => {
            if items.is_empty() {
                return empty_list_error("head");
            }
            items.truncate(1);
            Value::Qexpr(items)
        }
        other => type_error("head", 0, &other, "Q-Expression"),
    }
}

/// `tail {a b c}` -> `{b c}`
fn tail(_env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("tail", args.len(), 1);
    }
    match args.remove(0) {
        Value::Qexpr(mut items) => {
            if items.is_empty() {
                return empty_list_error("tail");
            }
            items.remove(0);
            Value::Qexpr(items)
        }
        other => type_error("tail", 0, &other, "Q-Expression"),
    }
}

/// Retag the argument sequence as a q-expression
fn list(_env: &mut Env, args: Vec<Value>) -> Value {
    Value::Qexpr(args)
}

/// Retag a q-expression as an s-expression and evaluate it
fn eval_quoted(env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("eval", args.len(), 1);
    }
    match args.remove(0) {
        Value::Qexpr(items) => eval::eval(env, Value::Sexpr(items)),
        other => type_error("eval", 0, &other, "Q-Expression"),
    }
}

/// Concatenate one or more q-expressions in argument order
fn join(_env: &mut Env, args: Vec<Value>) -> Value {
    ensure!(
        !args.is_empty(),
        "Function 'join' passed incorrect number of arguments. Got 0, expected at least 1."
    );
    for (i, arg) in args.iter().enumerate() {
        if !matches!(arg, Value::Qexpr(_)) {
            return type_error("join", i, arg, "Q-Expression");
        }
    }

    let mut joined = Vec::new();
    for arg in args {
        if let Value::Qexpr(items) = arg {
            joined.extend(items);
        }
    }
    Value::Qexpr(joined)
}

/// Prepend a number or symbol to a q-expression
fn cons(_env: &mut Env, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return arity_error("cons", args.len(), 2);
    }
    if !matches!(args[0], Value::Number(_) | Value::Symbol(_)) {
        return type_error("cons", 0, &args[0], "Number or Symbol");
    }
    if !matches!(args[1], Value::Qexpr(_)) {
        return type_error("cons", 1, &args[1], "Q-Expression");
    }

    let Ok([first, rest]) = <[Value; 2]>::try_from(args) else {
        unreachable!("cons arity was checked above");
    };
    match rest {
        Value::Qexpr(mut items) => {
            items.insert(0, first);
            Value::Qexpr(items)
        }
        _ => unreachable!("cons argument 1 was checked above"),
    }
}

/// Element count of a q-expression
fn len(_env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("len", args.len(), 1);
    }
    match args.remove(0) {
        Value::Qexpr(items) => Value::Number(items.len() as i64),
        other => type_error("len", 0, &other, "Q-Expression"),
    }
}

/// `init {a b c}` -> `{a b}`
fn init(_env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("init", args.len(), 1);
    }
    match args.remove(0) {
        Value::Qexpr(mut items) => {
            if items.is_empty() {
                return empty_list_error("init");
            }
            items.pop();
            Value::Qexpr(items)
        }
        other => type_error("init", 0, &other, "Q-Expression"),
    }
}

// ==================== MATHEMATICAL FUNCTIONS ====================

/// Integer power by repeated multiplication; the exponent is known
/// nonnegative by the time this runs.
fn int_pow(base: i64, exponent: i64) -> i64 {
    let mut acc = 1i64;
    for _ in 0..exponent {
        acc = acc.wrapping_mul(base);
    }
    acc
}

/// Left fold over an all-Number argument list. Arithmetic is wrapping
/// two's-complement i64 throughout.
fn arith(args: Vec<Value>, op: &str) -> Value {
    for (i, arg) in args.iter().enumerate() {
        if !matches!(arg, Value::Number(_)) {
            return type_error(op, i, arg, "Number");
        }
    }

    let mut nums = args.into_iter().map(|arg| match arg {
        Value::Number(n) => n,
        _ => unreachable!("argument types were checked above"),
    });
    let Some(mut acc) = nums.next() else {
        return Value::error(format!(
            "Function '{}' passed incorrect number of arguments. Got 0, expected at least 1.",
            op
        ));
    };

    // Lone operand: `-` negates, everything else passes it through
    let mut rest = nums.peekable();
    if rest.peek().is_none() && op == "-" {
        return Value::Number(acc.wrapping_neg());
    }

    for y in rest {
        acc = match op {
            "+" => acc.wrapping_add(y),
            "-" => acc.wrapping_sub(y),
            "*" => acc.wrapping_mul(y),
            "/" => {
                if y == 0 {
                    return Value::error("Division by zero!");
                }
                acc.wrapping_div(y)
            }
            "%" => {
                if y == 0 {
                    return Value::error("Division by zero!");
                }
                acc.wrapping_rem(y)
            }
            "^" => {
                if y < 0 {
                    return Value::error("Invalid number!");
                }
                int_pow(acc, y)
            }
            "min" => acc.min(y),
            "max" => acc.max(y),
            _ => unreachable!("unknown arithmetic operator `{}`", op),
        };
    }

    Value::Number(acc)
}

fn add(_env: &mut Env, args: Vec<Value>) -> Value {
    arith(args, "+")
}

fn sub(_env: &mut Env, args: Vec<Value>) -> Value {
    arith(args, "-")
}

fn mul(_env: &mut Env, args: Vec<Value>) -> Value {
    arith(args, "*")
}

fn div(_env: &mut Env, args: Vec<Value>) -> Value {
    arith(args, "/")
}

fn modulo(_env: &mut Env, args: Vec<Value>) -> Value {
    arith(args, "%")
}

fn pow(_env: &mut Env, args: Vec<Value>) -> Value {
    arith(args, "^")
}

fn min(_env: &mut Env, args: Vec<Value>) -> Value {
    arith(args, "min")
}

fn max(_env: &mut Env, args: Vec<Value>) -> Value {
    arith(args, "max")
}

// ==================== VARIABLE FUNCTIONS ====================

/// `def {names...} values...` binds each name to the matching value. Every
/// check runs before the first binding so a rejected `def` leaves the
/// environment untouched.
fn def(env: &mut Env, mut args: Vec<Value>) -> Value {
    ensure!(
        !args.is_empty(),
        "Function 'def' passed incorrect number of arguments. Got 0, expected at least 2."
    );

    let first = args.remove(0);
    let Value::Qexpr(syms) = first else {
        return type_error("def", 0, &first, "Q-Expression");
    };
    for (i, sym) in syms.iter().enumerate() {
        if !matches!(sym, Value::Symbol(_)) {
            return type_error("def", i, sym, "Symbol");
        }
    }
    ensure!(
        syms.len() == args.len(),
        "Function 'def' cannot define incorrect number of values to symbols"
    );
    for sym in &syms {
        if let Value::Symbol(name) = sym {
            ensure!(
                !env.is_protected(name),
                "Function 'def' cannot define builtin symbol"
            );
        }
    }

    for (sym, value) in syms.iter().zip(args.iter()) {
        if let Value::Symbol(name) = sym {
            env.put(name, value);
        }
    }

    Value::empty_sexpr()
}

/// `values ()` prints every bound name, one per line, in insertion order
fn values(env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("values", args.len(), 1);
    }
    let arg = args.remove(0);
    let Value::Sexpr(items) = arg else {
        return type_error("values", 0, &arg, "S-Expression");
    };
    ensure!(items.is_empty(), "Function 'values' passed invalid input");

    let names: Vec<String> = env.names().map(str::to_string).collect();
    for name in names {
        env.print_line(name);
    }

    Value::empty_sexpr()
}

// ==================== MISC. FUNCTIONS ====================

/// `exit ()` moves the run flag from Running to ConfirmExit. The driving
/// loop owns every transition after that.
fn exit(env: &mut Env, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("exit", args.len(), 1);
    }
    let arg = args.remove(0);
    let Value::Sexpr(items) = arg else {
        return type_error("exit", 0, &arg, "S-Expression");
    };
    ensure!(items.is_empty(), "Function 'exit' passed invalid input");

    tracing::debug!("exit requested, awaiting confirmation");
    env.request_exit();

    Value::empty_sexpr()
}
