#![cfg(test)]

use crate::language;
use crate::parser::{Parser, ParserError, ParserErrorKind};
use crate::parser::expr::Expr;
use crate::parser::stmt::{Stmt, StmtMeta};


fn parse_str(source: &str) -> Vec<Result<StmtMeta, ParserError>> {
    let lexer = language::create_default_lexer_rules()
        .build_once(source.chars());
    Parser::new(lexer).collect()
}

fn parse_expr_stmt(source: &str) -> Expr {
    let mut stmts = parse_str(source);
    assert!(stmts.len() == 1, "expected a single statement: {:?}", stmts);
    match stmts.remove(0).expect("unexpected parse error").take_variant() {
        Stmt::Expression(expr) => expr,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

// renders an expression fully parenthesized, to make precedence visible
fn expr_text(expr: &Expr) -> String {
    match expr {
        Expr::Identifier(name) => name.clone(),
        Expr::BooleanLiteral(value) => value.to_string(),
        Expr::IntegerLiteral(value) => value.to_string(),
        Expr::StringLiteral(value) => format!("{:?}", value),

        Expr::UnaryOp(op, operand) => format!("({}{})", op, expr_text(operand)),

        Expr::BinaryOp(op, operands) => {
            let (lhs, rhs) = &**operands;
            format!("({} {} {})", expr_text(lhs), op, expr_text(rhs))
        },

        Expr::If { condition, .. } => format!("if {}", expr_text(condition)),

        Expr::FunctionDef(fundef) => format!("fn({})", fundef.params().join(", ")),

        Expr::Call { callee, args } => {
            let args: Vec<String> = args.iter().map(expr_text).collect();
            format!("{}({})", expr_text(callee), args.join(", "))
        },
    }
}


#[test]
fn parser_operator_precedence() {
    let cases = [
        ("1 + 2 * 3",       "(1 + (2 * 3))"),
        ("1 * 2 + 3",       "((1 * 2) + 3)"),
        ("(1 + 2) * 3",     "((1 + 2) * 3)"),
        ("1 + 2 == 3 * 1",  "((1 + 2) == (3 * 1))"),
        ("1 < 2 != 2 < 1",  "((1 < 2) != (2 < 1))"),
        ("a <= b == c >= d", "((a <= b) == (c >= d))"),
        ("1 + 2 / 3 - 4",   "((1 + (2 / 3)) - 4)"),
    ];

    for (source, expected) in cases {
        let expr = parse_expr_stmt(source);
        assert_eq!(expr_text(&expr), expected, "source: {}", source);
    }
}

#[test]
fn parser_left_associativity() {
    let expr = parse_expr_stmt("1 - 2 - 3");
    assert_eq!(expr_text(&expr), "((1 - 2) - 3)");

    let expr = parse_expr_stmt("8 / 4 / 2");
    assert_eq!(expr_text(&expr), "((8 / 4) / 2)");
}

#[test]
fn parser_unary_operators() {
    let cases = [
        ("-5",      "(-5)"),
        ("!true",   "(!true)"),
        ("!-a",     "(!(-a))"),
        ("-a * b",  "((-a) * b)"),
        ("!a == b", "((!a) == b)"),
    ];

    for (source, expected) in cases {
        let expr = parse_expr_stmt(source);
        assert_eq!(expr_text(&expr), expected, "source: {}", source);
    }
}

#[test]
fn parser_call_expressions() {
    let cases = [
        ("add(1, 2 * 3)",   "add(1, (2 * 3))"),
        ("add()",           "add()"),
        ("-add(1)",         "(-add(1))"),
        ("adder(1)(2)",     "adder(1)(2)"),
        ("a + add(b) * c",  "(a + (add(b) * c))"),
    ];

    for (source, expected) in cases {
        let expr = parse_expr_stmt(source);
        assert_eq!(expr_text(&expr), expected, "source: {}", source);
    }
}

#[test]
fn parser_atoms() {
    assert!(matches!(parse_expr_stmt("foobar"), Expr::Identifier(name) if name == "foobar"));
    assert!(matches!(parse_expr_stmt("5"), Expr::IntegerLiteral(5)));
    assert!(matches!(parse_expr_stmt("true"), Expr::BooleanLiteral(true)));
    assert!(matches!(parse_expr_stmt("false"), Expr::BooleanLiteral(false)));
    assert!(matches!(parse_expr_stmt(r#""hello""#), Expr::StringLiteral(s) if &*s == "hello"));
}

#[test]
fn parser_let_stmt() {
    let mut stmts = parse_str("let answer = 6 * 7;");
    assert!(stmts.len() == 1);

    match stmts.remove(0).unwrap().take_variant() {
        Stmt::Let { name, init } => {
            assert_eq!(name, "answer");
            assert_eq!(expr_text(&init), "(6 * 7)");
        },
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn parser_return_stmt() {
    let mut stmts = parse_str("return 2 + 3;");
    assert!(stmts.len() == 1);

    match stmts.remove(0).unwrap().take_variant() {
        Stmt::Return(expr) => assert_eq!(expr_text(&expr), "(2 + 3)"),
        other => panic!("expected return statement, got {:?}", other),
    }
}

#[test]
fn parser_if_expr() {
    let expr = parse_expr_stmt("if (x < y) { x } else { y }");
    match expr {
        Expr::If { condition, branch, else_branch } => {
            assert_eq!(expr_text(&condition), "(x < y)");
            assert!(branch.stmts().len() == 1);
            assert!(else_branch.expect("missing else branch").stmts().len() == 1);
        },
        other => panic!("expected if expression, got {:?}", other),
    }
}

#[test]
fn parser_if_without_else() {
    let expr = parse_expr_stmt("if (x) { 1 }");
    match expr {
        Expr::If { else_branch, .. } => assert!(else_branch.is_none()),
        other => panic!("expected if expression, got {:?}", other),
    }
}

#[test]
fn parser_function_def() {
    let expr = parse_expr_stmt("fn(x, y) { x + y }");
    match expr {
        Expr::FunctionDef(fundef) => {
            assert_eq!(fundef.params().join(","), "x,y");
            assert!(fundef.body().stmts().len() == 1);
        },
        other => panic!("expected function def, got {:?}", other),
    }
}

#[test]
fn parser_function_def_no_params() {
    let expr = parse_expr_stmt("fn() { 1 }");
    match expr {
        Expr::FunctionDef(fundef) => assert!(fundef.params().is_empty()),
        other => panic!("expected function def, got {:?}", other),
    }
}

#[test]
fn parser_semicolons_are_optional() {
    let stmts = parse_str("let a = 1\na + 2");
    assert!(stmts.len() == 2, "unexpected output: {:?}", stmts);
    assert!(stmts.iter().all(|result| result.is_ok()));
}

#[test]
fn parser_missing_identifier_in_let() {
    let stmts = parse_str("let = 5;");
    assert!(stmts.len() == 1);
    assert!(matches!(
        stmts[0].as_ref().unwrap_err().kind(),
        ParserErrorKind::ExpectedIdentifier(..)
    ), "unexpected output: {:?}", stmts);
}

#[test]
fn parser_missing_assignment_in_let() {
    let stmts = parse_str("let x 5;");
    assert!(stmts.len() == 1);
    assert!(matches!(
        stmts[0].as_ref().unwrap_err().kind(),
        ParserErrorKind::ExpectedToken { .. }
    ), "unexpected output: {:?}", stmts);
}

#[test]
fn parser_expected_start_of_expr() {
    let stmts = parse_str("* 5");
    assert!(stmts.len() == 1);
    assert!(matches!(
        stmts[0].as_ref().unwrap_err().kind(),
        ParserErrorKind::ExpectedStartOfExpr(..)
    ), "unexpected output: {:?}", stmts);
}

#[test]
fn parser_illegal_token_is_reported() {
    let stmts = parse_str("let a = @;");
    assert!(stmts.len() == 1);
    assert!(matches!(
        stmts[0].as_ref().unwrap_err().kind(),
        ParserErrorKind::IllegalToken(lexeme) if lexeme == "@"
    ), "unexpected output: {:?}", stmts);
}

#[test]
fn parser_recovers_after_error() {
    let stmts = parse_str("let = 5; let x = 6;");
    assert!(stmts.len() == 2, "unexpected output: {:?}", stmts);
    assert!(stmts[0].is_err());
    assert!(stmts[1].is_ok());
}

#[test]
fn parser_collects_multiple_errors() {
    let stmts = parse_str("let = 5; let = 6;");
    assert!(stmts.len() == 2, "unexpected output: {:?}", stmts);
    assert!(stmts.iter().all(|result| result.is_err()));
}

#[test]
fn parser_stmt_symbols_cover_source() {
    use crate::debug::SourceError;

    let stmts = parse_str("let x = 5;\nx + 1");
    assert!(stmts.len() == 2);

    let symbol = *stmts[0].as_ref().unwrap().debug_symbol();
    assert_eq!((symbol.start, symbol.end), (0, 10));

    let symbol = *stmts[1].as_ref().unwrap().debug_symbol();
    assert_eq!((symbol.start, symbol.end), (11, 16));

    // error symbols point at the failure site
    let errors = parse_str("let = 5;");
    let symbol = errors[0].as_ref().unwrap_err().debug_symbol().unwrap();
    assert!(symbol.start < symbol.end);
}
