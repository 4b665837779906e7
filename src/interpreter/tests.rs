#![cfg(test)]

use std::rc::Rc;

use crate::language;
use crate::parser::Parser;
use crate::parser::stmt::StmtMeta;
use crate::runtime::{Environment, RuntimeError, Value};
use crate::interpreter::interpret;


fn parse_program(source: &str) -> Vec<StmtMeta> {
    let lexer = language::create_default_lexer_rules()
        .build_once(source.chars());

    Parser::new(lexer)
        .collect::<Result<Vec<_>, _>>()
        .expect("unexpected parse error")
}

fn eval_in(source: &str, env: &Rc<Environment>) -> Result<Option<Value>, RuntimeError> {
    interpret(&parse_program(source), env)
}

fn eval_source(source: &str) -> Result<Option<Value>, RuntimeError> {
    eval_in(source, &Environment::new_root())
}

fn eval_value(source: &str) -> Value {
    eval_source(source)
        .expect("unexpected runtime error")
        .expect("program produced no value")
}

fn eval_error(source: &str) -> String {
    eval_source(source)
        .expect_err("expected a runtime error")
        .to_string()
}


#[test]
fn eval_integer_arithmetic() {
    let cases = [
        ("5", 5),
        ("-5", -5),
        ("1 + 2 * 3", 7),
        ("(1 + 2) * 3", 9),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2", 16),
        ("50 / 2 * 2 + 10", 60),
        ("3 * (3 * 3) + 10", 37),
        ("-50 + 100 + -50", 0),
        ("7 / 2", 3),
    ];

    for (source, expected) in cases {
        assert_eq!(eval_value(source), Value::Integer(expected), "source: {}", source);
    }
}

#[test]
fn eval_boolean_operators() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 <= 1", true),
        ("2 >= 3", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("true == true", true),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("\"a\" == \"a\"", true),
        ("\"a\" == \"b\"", false),
        ("1 == \"1\"", false),
    ];

    for (source, expected) in cases {
        assert_eq!(eval_value(source), Value::from(expected), "source: {}", source);
    }
}

#[test]
fn eval_not_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!5", true),
    ];

    for (source, expected) in cases {
        assert_eq!(eval_value(source), Value::from(expected), "source: {}", source);
    }
}

#[test]
fn eval_string_literals_and_concat() {
    assert_eq!(eval_value(r#""hello world""#), Value::String(Rc::from("hello world")));
    assert_eq!(eval_value(r#""hello" + " " + "world""#), Value::String(Rc::from("hello world")));
}

#[test]
fn eval_if_else() {
    let cases = [
        ("if (true) { 10 }", Value::Integer(10)),
        ("if (false) { 10 }", Value::Nil),
        ("if (1 < 2) { 10 } else { 20 }", Value::Integer(10)),
        ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),

        // zero is truthy, only false and nil are falsy
        ("if (0) { 1 } else { 2 }", Value::Integer(1)),
        ("if (false) { 1 } else { 2 }", Value::Integer(2)),
        ("if (\"\") { 1 } else { 2 }", Value::Integer(1)),
    ];

    for (source, expected) in cases {
        assert_eq!(eval_value(source), expected, "source: {}", source);
    }
}

#[test]
fn eval_let_bindings() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5; a + 5;", 10),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
    ];

    for (source, expected) in cases {
        assert_eq!(eval_value(source), Value::Integer(expected), "source: {}", source);
    }
}

#[test]
fn eval_unbound_identifier_is_error() {
    assert_eq!(eval_error("foobar"), "identifier not found: foobar");
}

#[test]
fn eval_type_errors() {
    let cases = [
        ("5 + true", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false", "unknown operator: BOOLEAN + BOOLEAN"),
        ("\"a\" - \"b\"", "unknown operator: STRING - STRING"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5 / 0", "division by zero"),
    ];

    for (source, expected) in cases {
        assert_eq!(eval_error(source), expected, "source: {}", source);
    }
}

#[test]
fn eval_error_short_circuits_evaluation() {
    // the unbound name on the left stops the right operand from running
    assert_eq!(eval_error("nope + (1 / 0)"), "identifier not found: nope");
}

#[test]
fn eval_function_definition_and_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];

    for (source, expected) in cases {
        assert_eq!(eval_value(source), Value::Integer(expected), "source: {}", source);
    }
}

#[test_log::test]
fn eval_recursion() {
    let source = "
        let fib = fn(n) {
            if (n < 2) { n } else { fib(n - 1) + fib(n - 2) }
        };
        fib(15)
    ";
    assert_eq!(eval_value(source), Value::Integer(610));
}

#[test]
fn eval_recursive_function() {
    let source = "
        let countdown = fn(n) {
            if (n == 0) { 0 } else { countdown(n - 1) }
        };
        countdown(5)
    ";
    assert_eq!(eval_value(source), Value::Integer(0));
}

#[test]
fn eval_return_short_circuits_block() {
    let cases = [
        ("fn() { return 10; 9; }()", 10),
        ("fn() { 9; return 10; }()", 10),
        ("fn() { if (true) { return 10; } 9; }()", 10),
        // return unwinds only to the nearest call boundary
        ("let inner = fn() { return 1; }; fn() { inner(); 2 }()", 2),
    ];

    for (source, expected) in cases {
        assert_eq!(eval_value(source), Value::Integer(expected), "source: {}", source);
    }
}

#[test]
fn eval_nested_return_unwinds_to_function() {
    let source = "
        let f = fn() {
            if (10 > 1) {
                if (10 > 1) {
                    return 10;
                }
                return 1;
            }
        };
        f()
    ";
    assert_eq!(eval_value(source), Value::Integer(10));
}

#[test]
fn eval_top_level_return() {
    assert_eq!(eval_value("return 5; 9;"), Value::Integer(5));
}

#[test]
fn eval_closures_capture_definition_env() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y }; };
        let addTwo = newAdder(2);
        addTwo(3);
    ";
    assert_eq!(eval_value(source), Value::Integer(5));
}

#[test]
fn eval_closures_are_lexical_not_dynamic() {
    // the x visible inside f is the definition-site binding, not the caller's
    let source = "
        let x = 1;
        let f = fn() { x };
        let g = fn() { let x = 99; f() };
        g()
    ";
    assert_eq!(eval_value(source), Value::Integer(1));
}

#[test]
fn eval_shadowing_is_scoped_to_call() {
    let source = "
        let x = 5;
        let f = fn(x) { x * 2 };
        f(10) + x
    ";
    assert_eq!(eval_value(source), Value::Integer(25));
}

#[test]
fn eval_call_errors() {
    assert_eq!(eval_error("5(1)"), "not a function: INTEGER");
    assert_eq!(eval_error("let f = fn(x) { x }; f()"), "wrong number of arguments: expected 1, got 0");
    assert_eq!(eval_error("let f = fn() { 1 }; f(2)"), "wrong number of arguments: expected 0, got 1");
}

#[test]
fn eval_arguments_evaluate_left_to_right() {
    let source = "
        let f = fn(a, b) { a };
        f(1, 2)
    ";
    assert_eq!(eval_value(source), Value::Integer(1));

    // an error in an earlier argument stops the later ones
    assert_eq!(eval_error("let f = fn(a, b) { a }; f(nope, 1 / 0)"), "identifier not found: nope");
}

#[test]
fn eval_let_produces_no_value() {
    let result = eval_source("let a = 5;").expect("unexpected runtime error");
    assert_eq!(result, None);
}

#[test_log::test]
fn eval_session_state_persists() {
    let env = Environment::new_root();

    eval_in("let counter = fn(x) { fn() { x + 1 } };", &env).unwrap();
    eval_in("let next = counter(41);", &env).unwrap();

    let result = eval_in("next()", &env).unwrap();
    assert_eq!(result, Some(Value::Integer(42)));
}

#[test]
fn eval_function_equality_is_identity() {
    let source = "let f = fn() { 1 }; f == f";
    assert_eq!(eval_value(source), Value::BoolTrue);

    let source = "let f = fn() { 1 }; let g = fn() { 1 }; f == g";
    assert_eq!(eval_value(source), Value::BoolFalse);
}
