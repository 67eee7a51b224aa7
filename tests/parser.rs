use aspen::{
    ast::{Expr, InfixOperator, PrefixOperator, Program, Statement},
    interpreter::{lexer::Lexer, parser::core::Parser},
};

/// Parses a source string, asserting there are no syntax errors.
fn parse(source: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "parse errors for {source:?}: {:?}",
            parser.errors());
    program
}

/// Parses a source string and returns the collected error messages.
fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

/// Extracts the single expression statement of a one-statement program.
fn parse_expression(source: &str) -> Expr {
    let mut program = parse(source);
    assert_eq!(program.statements.len(), 1, "source: {source:?}");
    match program.statements.remove(0) {
        Statement::Expression { expr } => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn let_statements() {
    let program = parse("let x = 5; let y = 10; let foobar = 838383;");
    let names: Vec<_> = program.statements
                               .iter()
                               .map(|statement| match statement {
                                   Statement::Let { name, .. } => name.as_str(),
                                   other => panic!("expected let, got {other:?}"),
                               })
                               .collect();
    assert_eq!(names, ["x", "y", "foobar"]);
}

#[test]
fn return_statements() {
    let program = parse("return 5; return 10; return 993322;");
    assert_eq!(program.statements.len(), 3);
    for statement in &program.statements {
        assert!(matches!(statement, Statement::Return { .. }));
    }
}

#[test]
fn semicolons_are_optional() {
    let program = parse("let x = 5 let y = 6 x + y");
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn literal_expressions() {
    assert_eq!(parse_expression("5"), Expr::IntegerLiteral { value: 5 });
    assert_eq!(parse_expression("true"), Expr::BooleanLiteral { value: true });
    assert_eq!(parse_expression("\"hi\""),
               Expr::StringLiteral { value: "hi".to_string() });
    assert_eq!(parse_expression("foobar"),
               Expr::Identifier { name: "foobar".to_string() });
}

#[test]
fn prefix_expressions() {
    assert_eq!(parse_expression("-15"),
               Expr::Prefix { op:    PrefixOperator::Negate,
                              right: Box::new(Expr::IntegerLiteral { value: 15 }), });
    assert_eq!(parse_expression("!ok"),
               Expr::Prefix { op:    PrefixOperator::Not,
                              right: Box::new(Expr::Identifier { name: "ok".to_string() }), });
}

#[test]
fn infix_expressions() {
    let operators = [("5 + 5", InfixOperator::Add),
                     ("5 - 5", InfixOperator::Sub),
                     ("5 * 5", InfixOperator::Mul),
                     ("5 / 5", InfixOperator::Div),
                     ("5 < 5", InfixOperator::Lt),
                     ("5 > 5", InfixOperator::Gt),
                     ("5 == 5", InfixOperator::Eq),
                     ("5 != 5", InfixOperator::NotEq)];

    for (source, op) in operators {
        assert_eq!(parse_expression(source),
                   Expr::Infix { left:  Box::new(Expr::IntegerLiteral { value: 5 }),
                                 op,
                                 right: Box::new(Expr::IntegerLiteral { value: 5 }), },
                   "source: {source:?}");
    }
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b);"),
                 ("!-a", "(!(-a));"),
                 ("a + b + c", "((a + b) + c);"),
                 ("a + b - c", "((a + b) - c);"),
                 ("a * b * c", "((a * b) * c);"),
                 ("a + b / c", "(a + (b / c));"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
                 ("3 > 5 == false", "((3 > 5) == false);"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
                 ("(5 + 5) * 2", "((5 + 5) * 2);"),
                 ("2 / (5 + 5)", "(2 / (5 + 5));"),
                 ("-(5 + 5)", "(-(5 + 5));"),
                 ("!(true == true)", "(!(true == true));"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g));"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d);"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])));")];

    for (source, expected) in cases {
        assert_eq!(parse(source).to_string(), expected, "source: {source:?}");
    }
}

#[test]
fn if_expression() {
    let expr = parse_expression("if (x < y) { x }");
    match expr {
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequence.statements.len(), 1);
            assert!(alternative.is_none());
        },
        other => panic!("expected if expression, got {other:?}"),
    }
}

#[test]
fn if_else_expression() {
    let expr = parse_expression("if (x < y) { x } else { y }");
    match expr {
        Expr::If { alternative, .. } => {
            let alternative = alternative.expect("missing else branch");
            assert_eq!(alternative.statements.len(), 1);
        },
        other => panic!("expected if expression, got {other:?}"),
    }
}

#[test]
fn function_literals() {
    let expr = parse_expression("fn(x, y) { x + y; }");
    match expr {
        Expr::FunctionLiteral { parameters, body } => {
            assert_eq!(parameters, ["x", "y"]);
            assert_eq!(body.statements.len(), 1);
        },
        other => panic!("expected function literal, got {other:?}"),
    }

    let cases = [("fn() {}", 0), ("fn(x) {}", 1), ("fn(x, y, z) {}", 3)];
    for (source, count) in cases {
        match parse_expression(source) {
            Expr::FunctionLiteral { parameters, .. } => {
                assert_eq!(parameters.len(), count, "source: {source:?}");
            },
            other => panic!("expected function literal, got {other:?}"),
        }
    }
}

#[test]
fn call_expressions() {
    let expr = parse_expression("add(1, 2 * 3, 4 + 5)");
    match expr {
        Expr::Call { function, arguments } => {
            assert_eq!(function.to_string(), "add");
            assert_eq!(arguments.len(), 3);
            assert_eq!(arguments[1].to_string(), "(2 * 3)");
        },
        other => panic!("expected call expression, got {other:?}"),
    }
}

#[test]
fn array_literals() {
    assert_eq!(parse_expression("[]"), Expr::ArrayLiteral { elements: Vec::new() });

    match parse_expression("[1, 2 * 2, 3 + 3]") {
        Expr::ArrayLiteral { elements } => assert_eq!(elements.len(), 3),
        other => panic!("expected array literal, got {other:?}"),
    }
}

#[test]
fn hash_literals() {
    assert_eq!(parse_expression("{}"), Expr::HashLiteral { pairs: Vec::new() });

    match parse_expression("{\"one\": 1, \"two\": 2, \"three\": 3}") {
        Expr::HashLiteral { pairs } => {
            assert_eq!(pairs.len(), 3);
            assert_eq!(pairs[0].0.to_string(), "\"one\"");
        },
        other => panic!("expected hash literal, got {other:?}"),
    }

    // Keys and values may be arbitrary expressions, and a trailing comma
    // is allowed.
    match parse_expression("{1 + 1: 2 * 2,}") {
        Expr::HashLiteral { pairs } => {
            assert_eq!(pairs[0].0.to_string(), "(1 + 1)");
            assert_eq!(pairs[0].1.to_string(), "(2 * 2)");
        },
        other => panic!("expected hash literal, got {other:?}"),
    }
}

#[test]
fn printed_programs_reparse_to_the_same_tree() {
    let sources = ["let x = 5 * 5 + 10; x",
                   "let add = fn(a, b) { a + b }; add(2, 3)",
                   "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
                   "\"Hello\" + \" \" + \"World\"",
                   "let a = [1, 2, 3]; push(a, 4)",
                   "let m = {\"k\": 1, 2: \"v\"}; m[\"k\"]",
                   "let counter = fn() { let n = 0; fn() { n } }; counter()()",
                   "map([1, 2, 3], fn(x) { -x })"];

    for source in sources {
        let first = parse(source);
        let second = parse(&first.to_string());
        assert_eq!(first, second, "source: {source:?}");
    }
}

#[test]
fn expect_peek_mismatches_are_collected() {
    assert_eq!(parse_errors("let x 5;")[0],
               "expected next token to be Assign, got Integer instead");
    assert_eq!(parse_errors("let = 5;")[0],
               "expected next token to be Identifier, got Assign instead");
    assert_eq!(parse_errors("if x { 1 }")[0],
               "expected next token to be LParen, got Identifier instead");
    assert_eq!(parse_errors("[1, 2")[0],
               "expected next token to be RBracket, got EOF instead");
    assert_eq!(parse_errors("{1, 2}")[0],
               "expected next token to be Colon, got Comma instead");
}

#[test]
fn missing_prefix_rules_are_reported() {
    assert_eq!(parse_errors("+ 5")[0], "no prefix parse function for Plus found");
    assert_eq!(parse_errors("@")[0], "no prefix parse function for Illegal found");
    // An integer literal too large for 64 bits fails in the lexer and
    // surfaces the same way.
    assert_eq!(parse_errors("9223372036854775808")[0],
               "no prefix parse function for Illegal found");
}

#[test]
fn parsing_continues_past_a_failed_statement() {
    let mut parser = Parser::new(Lexer::new("let x 5; let y = 10;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert!(program.statements
                   .iter()
                   .any(|statement| matches!(statement, Statement::Let { name, .. } if name == "y")));
}
