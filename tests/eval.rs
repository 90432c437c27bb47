//! Evaluator integration tests
//!
//! Tests the full pipeline: source → lex → parse → read → evaluate

use pretty_assertions::assert_eq;
use qex::{Env, Value};

/// Helper to evaluate one line against a fresh environment
fn eval_source(source: &str) -> Value {
    let mut env = Env::new();
    eval_in(&mut env, source)
}

/// Helper to evaluate one line against an existing environment
fn eval_in(env: &mut Env, source: &str) -> Value {
    match qex::run_source(env, source) {
        Ok(value) => value,
        Err(e) => panic!("Parse failed for {:?}: {}", source, e),
    }
}

/// Helper to check the result is a number
fn assert_num(source: &str, expected: i64) {
    match eval_source(source) {
        Value::Number(n) => assert_eq!(n, expected, "for {:?}", source),
        v => panic!("Expected Number({}) from {:?}, got {:?}", expected, source, v),
    }
}

/// Helper to check the result is an error with an exact message
fn assert_err(source: &str, message: &str) {
    match eval_source(source) {
        Value::Error(msg) => assert_eq!(msg, message, "for {:?}", source),
        v => panic!("Expected Error from {:?}, got {:?}", source, v),
    }
}

/// Helper to check the rendered form of the result
fn assert_renders(source: &str, expected: &str) {
    assert_eq!(eval_source(source).to_string(), expected, "for {:?}", source);
}

// ==================== Literals and Self-Evaluation ====================

#[test]
fn test_integer_literal_roundtrip() {
    assert_num("0", 0);
    assert_num("42", 42);
    assert_num("-17", -17);
    assert_num("9223372036854775807", i64::MAX);
}

#[test]
fn test_decimal_literal_truncates() {
    assert_num("3.99", 3);
    assert_num("-2.5", -2);
}

#[test]
fn test_out_of_range_literal_is_error() {
    assert_err("9223372036854775808", "invalid number");
}

#[test]
fn test_empty_sexpr_is_a_value() {
    assert_renders("()", "()");
}

#[test]
fn test_qexpr_is_inert() {
    assert_renders("{+ 1 2}", "{+ 1 2}");
    assert_renders("{}", "{}");
}

#[test]
fn test_single_expression_unwraps() {
    assert_num("(5)", 5);
    assert_num("((5))", 5);
}

#[test]
fn test_idempotence_of_evaluated_values() {
    let mut env = Env::new();
    for source in ["42", "{1 2}", "(/ 1 0)"] {
        let once = eval_in(&mut env, source);
        let twice = qex::interp::eval(&mut env, once.clone());
        assert_eq!(once, twice, "for {:?}", source);
    }
}

// ==================== Symbols and the Environment ====================

#[test]
fn test_unbound_symbol() {
    assert_err("y", "Unbound symbol 'y'");
    assert_renders("nope", "Error: Unbound symbol 'nope'");
}

#[test]
fn test_builtin_symbol_renders_as_function() {
    assert_renders("+", "<function>");
    assert_renders("head", "<function>");
}

#[test]
fn test_def_binds_and_persists() {
    let mut env = Env::new();
    assert_eq!(eval_in(&mut env, "(def {x} 5)"), Value::empty_sexpr());
    assert_eq!(eval_in(&mut env, "x"), Value::Number(5));
    assert_eq!(eval_in(&mut env, "(+ x 1)"), Value::Number(6));
}

#[test]
fn test_def_multiple_symbols_positional() {
    let mut env = Env::new();
    eval_in(&mut env, "(def {a b c} 1 2 3)");
    assert_eq!(eval_in(&mut env, "(+ a b c)"), Value::Number(6));
}

#[test]
fn test_def_overwrites_prior_binding() {
    let mut env = Env::new();
    eval_in(&mut env, "(def {x} 5)");
    eval_in(&mut env, "(def {x} 9)");
    assert_eq!(eval_in(&mut env, "x"), Value::Number(9));
}

#[test]
fn test_def_bound_value_is_a_copy() {
    let mut env = Env::new();
    eval_in(&mut env, "(def {xs} {1 2 3})");
    // Consuming a copy of the binding leaves the binding itself intact
    assert_eq!(
        eval_in(&mut env, "(tail xs)"),
        Value::Qexpr(vec![Value::Number(2), Value::Number(3)])
    );
    assert_eq!(
        eval_in(&mut env, "xs"),
        Value::Qexpr(vec![Value::Number(1), Value::Number(2), Value::Number(3)])
    );
}

#[test]
fn test_def_protected_name_rejected() {
    let mut env = Env::new();
    assert_eq!(
        eval_in(&mut env, "(def {+} 5)"),
        Value::error("Function 'def' cannot define builtin symbol")
    );
    // `+` is still the builtin
    assert_eq!(eval_in(&mut env, "(+ 1 2)"), Value::Number(3));
}

#[test]
fn test_def_count_mismatch() {
    assert_err(
        "(def {a b} 1)",
        "Function 'def' cannot define incorrect number of values to symbols",
    );
}

#[test]
fn test_def_non_symbol_in_list() {
    assert_err(
        "(def {1} 5)",
        "Function 'def' passed incorrect type for argument 0. Got Number, expected Symbol.",
    );
}

// ==================== Arithmetic ====================

#[test]
fn test_arithmetic_basics() {
    assert_num("(+ 1 2)", 3);
    assert_num("(- 10 3 2)", 5);
    assert_num("(* 6 7)", 42);
    assert_num("(/ 84 2)", 42);
    assert_num("(% 47 5)", 2);
    assert_num("(^ 2 10)", 1024);
    assert_num("(min 3 1 2)", 1);
    assert_num("(max 3 7 2)", 7);
}

#[test]
fn test_word_aliases_match_operators() {
    assert_num("(add 1 2)", 3);
    assert_num("(sub 10 4)", 6);
    assert_num("(mul 3 3)", 9);
    assert_num("(div 9 3)", 3);
    assert_num("(mod 9 4)", 1);
    assert_num("(pow 3 2)", 9);
}

#[test]
fn test_unary_minus_negates() {
    assert_num("(- 5)", -5);
    assert_num("(- -5)", 5);
}

#[test]
fn test_variadic_fold() {
    assert_num("(+ 1 2 3 4 5)", 15);
    assert_num("(* 1 2 3 4)", 24);
}

#[test]
fn test_nested_evaluation_order() {
    assert_num("(+ 1 (* 2 3))", 7);
    assert_num("(* (+ 1 2) (- 10 4))", 18);
}

#[test]
fn test_division_by_zero() {
    assert_err("(/ 4 0)", "Division by zero!");
    assert_err("(% 4 0)", "Division by zero!");
}

#[test]
fn test_negative_exponent() {
    assert_err("(^ 2 -3)", "Invalid number!");
}

#[test]
fn test_arith_type_mismatch_reports_offender() {
    assert_err(
        "(+ 1 {2})",
        "Function '+' passed incorrect type for argument 1. Got Q-Expression, expected Number.",
    );
}

// ==================== List Builtins ====================

#[test]
fn test_list_retags_arguments() {
    assert_renders("(list 1 2 3)", "{1 2 3}");
    assert_renders("(list)", "<function>"); // a lone head evaluates to itself
}

#[test]
fn test_head_and_tail() {
    assert_renders("(head {1 2 3})", "{1}");
    assert_renders("(tail {1 2 3})", "{2 3}");
    assert_renders("(tail {1})", "{}");
}

#[test]
fn test_init_drops_last() {
    assert_renders("(init {1 2 3})", "{1 2}");
}

#[test]
fn test_empty_list_operations() {
    assert_err("(head {})", "Function 'head' passed empty list {}.");
    assert_err("(tail {})", "Function 'tail' passed empty list {}.");
    assert_err("(init {})", "Function 'init' passed empty list {}.");
}

#[test]
fn test_join_concatenates_in_order() {
    assert_renders("(join {1 2} {3})", "{1 2 3}");
    assert_renders("(join {1} {2} {3 4})", "{1 2 3 4}");
    assert_renders("(join {})", "{}");
}

#[test]
fn test_cons_prepends() {
    assert_renders("(cons 0 {1 2})", "{0 1 2}");
    assert_renders("(cons 1 {})", "{1}");
}

#[test]
fn test_len_counts_elements() {
    assert_num("(len {1 2 3})", 3);
    assert_num("(len {})", 0);
}

#[test]
fn test_eval_runs_quoted_expression() {
    assert_num("(eval {+ 1 2})", 3);
    assert_renders("(eval {list 1 2})", "{1 2}");
    assert_num("(eval (head {5 10 15}))", 5);
}

#[test]
fn test_list_builtin_type_mismatches() {
    assert_err(
        "(head 1)",
        "Function 'head' passed incorrect type for argument 0. Got Number, expected Q-Expression.",
    );
    assert_err(
        "(join {1} 2)",
        "Function 'join' passed incorrect type for argument 1. Got Number, expected Q-Expression.",
    );
    assert_err(
        "(cons {1} {2})",
        "Function 'cons' passed incorrect type for argument 0. Got Q-Expression, expected Number or Symbol.",
    );
    assert_err(
        "(eval 5)",
        "Function 'eval' passed incorrect type for argument 0. Got Number, expected Q-Expression.",
    );
}

#[test]
fn test_arity_mismatches() {
    assert_err(
        "(head {1} {2})",
        "Function 'head' passed incorrect number of arguments. Got 2, expected 1.",
    );
    assert_err(
        "(cons 1)",
        "Function 'cons' passed incorrect number of arguments. Got 1, expected 2.",
    );
}

// ==================== Error Propagation ====================

#[test]
fn test_first_error_wins() {
    // Both operands are errors; the leftmost propagates
    assert_err("(+ (/ 1 0) nope)", "Division by zero!");
    assert_err("(+ nope (/ 1 0))", "Unbound symbol 'nope'");
}

#[test]
fn test_error_supersedes_head_check() {
    // The error in the tail wins even though the head is not a function
    assert_err("(5 (/ 1 0))", "Division by zero!");
}

#[test]
fn test_non_function_head() {
    assert_err("(5 1 2)", "First element is not a function!");
    assert_err("({1} 2 3)", "First element is not a function!");
}

#[test]
fn test_errors_are_not_fatal_to_the_session() {
    let mut env = Env::new();
    eval_in(&mut env, "(/ 1 0)");
    assert_eq!(eval_in(&mut env, "(+ 1 2)"), Value::Number(3));
}

// ==================== Environment Dump ====================

#[test]
fn test_values_lists_bound_names_in_order() {
    let mut env = Env::new();
    eval_in(&mut env, "(def {alpha} 1)");
    eval_in(&mut env, "(def {beta} 2)");
    env.take_output();

    assert_eq!(eval_in(&mut env, "(values ())"), Value::empty_sexpr());
    let output = env.take_output();
    assert!(output.iter().any(|n| n == "head"));
    let alpha = output.iter().position(|n| n == "alpha");
    let beta = output.iter().position(|n| n == "beta");
    assert!(alpha.is_some() && beta.is_some());
    assert!(alpha < beta, "names should print in insertion order");
}

#[test]
fn test_values_rejects_non_sexpr_argument() {
    assert_err(
        "(values {})",
        "Function 'values' passed incorrect type for argument 0. Got Q-Expression, expected S-Expression.",
    );
}

// ==================== Rendering ====================

#[test]
fn test_render_grammar() {
    assert_renders("{1 {2 3} (+)}", "{1 {2 3} (+)}");
    assert_renders("(list (list 1 2) 3)", "{{1 2} 3}");
}
