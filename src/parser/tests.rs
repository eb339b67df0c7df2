//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the supported constructs:
//! - Expression statements and operator precedence
//! - Member, call, assignment and array expressions
//! - Variable and function declarations
//! - Control flow statements
//! - Error reporting

use pretty_assertions::assert_eq;

use super::{
    expr::parse_primary_expr,
    parser::{parse, Parser, MAX_NESTING_DEPTH},
};
use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{BinaryOperator, LiteralKind, PrefixOperator},
        statements::VariableKind,
    },
    errors::errors::{Error, ErrorImpl, Stage},
    lexer::{lexer::tokenize, tokens::TokenKind},
};

fn parse_source(source: &str) -> Result<Program<'_>, Error> {
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();
    parse(tokens)
}

fn single_expr<'src>(program: &'src Program<'src>) -> &'src Expr<'src> {
    assert_eq!(program.len(), 1);
    match &program.body[0] {
        Stmt::Expression(stmt) => &stmt.expression,
        other => panic!("expected expression statement, got {}", other.get_name()),
    }
}

fn identifier_name<'src>(expr: &Expr<'src>) -> &'src str {
    match expr {
        Expr::Identifier(identifier) => identifier.name,
        other => panic!("expected identifier, got {}", other.get_name()),
    }
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("  // nothing here\n").unwrap();

    assert!(program.is_empty());
}

#[test]
fn test_parse_identifier_statement() {
    let program = parse_source("x;").unwrap();

    let expr = single_expr(&program);
    assert_eq!(identifier_name(expr), "x");
    assert_eq!(program.body[0].get_location().col(), 0);
}

#[test]
fn test_parse_debugger_statement() {
    let program = parse_source("debugger;").unwrap();

    assert_eq!(program.len(), 1);
    assert!(matches!(program.body[0], Stmt::Debugger(_)));
}

#[test]
fn test_parse_empty_statements() {
    let program = parse_source(";;").unwrap();

    assert_eq!(program.len(), 2);
    assert!(program.iter().all(|stmt| matches!(stmt, Stmt::Empty(_))));
}

#[test]
fn test_parse_keyword_literal_statement() {
    let program = parse_source("true;").unwrap();

    match single_expr(&program) {
        Expr::Literal(literal) => {
            assert_eq!(literal.value, "true");
            assert_eq!(literal.kind, LiteralKind::Boolean);
        }
        other => panic!("expected literal, got {}", other.get_name()),
    }
}

#[test]
fn test_parse_literals() {
    let program = parse_source("42; 'text'; null").unwrap();

    let kinds: Vec<LiteralKind> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Expression(stmt) => match &stmt.expression {
                Expr::Literal(literal) => literal.kind,
                other => panic!("expected literal, got {}", other.get_name()),
            },
            other => panic!("expected expression statement, got {}", other.get_name()),
        })
        .collect();
    assert_eq!(kinds, vec![LiteralKind::Number, LiteralKind::String, LiteralKind::Null]);
}

#[test]
fn test_parse_member_expression() {
    let program = parse_source("a.b;").unwrap();

    match single_expr(&program) {
        Expr::Member(member) => {
            assert_eq!(identifier_name(&member.object), "a");
            assert_eq!(member.property.name, "b");
            assert_eq!(member.property.location.col(), 2);
        }
        other => panic!("expected member expression, got {}", other.get_name()),
    }
}

#[test]
fn test_parse_member_chain_nests_left() {
    let program = parse_source("a.b.c").unwrap();

    let Expr::Member(outer) = single_expr(&program) else {
        panic!("expected member expression");
    };
    assert_eq!(outer.property.name, "c");
    let Expr::Member(inner) = outer.object.as_ref() else {
        panic!("expected nested member expression");
    };
    assert_eq!(inner.property.name, "b");
    assert_eq!(identifier_name(&inner.object), "a");
}

#[test]
fn test_parse_member_with_keyword_property() {
    let program = parse_source("promise.catch").unwrap();

    let Expr::Member(member) = single_expr(&program) else {
        panic!("expected member expression");
    };
    assert_eq!(member.property.name, "catch");
}

#[test]
fn test_parse_call_expression() {
    let program = parse_source("console.log(\"hi\", x, 1,);").unwrap();

    let Expr::Call(call) = single_expr(&program) else {
        panic!("expected call expression");
    };
    assert!(matches!(call.callee.as_ref(), Expr::Member(_)));
    assert_eq!(call.arguments.len(), 3);
}

#[test]
fn test_parse_call_without_arguments() {
    let program = parse_source("run()").unwrap();

    let Expr::Call(call) = single_expr(&program) else {
        panic!("expected call expression");
    };
    assert_eq!(identifier_name(&call.callee), "run");
    assert!(call.arguments.is_empty());
}

#[test]
fn test_parse_assignment_is_right_associative() {
    let program = parse_source("a = b = 1;").unwrap();

    let Expr::Assignment(outer) = single_expr(&program) else {
        panic!("expected assignment");
    };
    assert_eq!(identifier_name(&outer.assignee), "a");
    let Expr::Assignment(inner) = outer.value.as_ref() else {
        panic!("expected nested assignment");
    };
    assert_eq!(identifier_name(&inner.assignee), "b");
}

#[test]
fn test_parse_assignment_to_member() {
    let program = parse_source("a.b = c + 1").unwrap();

    let Expr::Assignment(assignment) = single_expr(&program) else {
        panic!("expected assignment");
    };
    assert!(matches!(assignment.assignee.as_ref(), Expr::Member(_)));
    assert!(matches!(assignment.value.as_ref(), Expr::Binary(_)));
}

#[test]
fn test_parse_invalid_assignment_target() {
    let error = parse_source("1 = x").unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::InvalidAssignmentTarget);
    assert_eq!(error.get_location().col(), 2);
}

#[test]
fn test_parse_binary_is_left_associative() {
    let program = parse_source("a - b + c").unwrap();

    let Expr::Binary(outer) = single_expr(&program) else {
        panic!("expected binary expression");
    };
    assert_eq!(outer.operator, BinaryOperator::Add);
    assert_eq!(identifier_name(&outer.right), "c");
    let Expr::Binary(inner) = outer.left.as_ref() else {
        panic!("expected nested binary expression");
    };
    assert_eq!(inner.operator, BinaryOperator::Subtract);
    assert_eq!(identifier_name(&inner.left), "a");
}

#[test]
fn test_parse_multiplicative_binds_tighter() {
    let program = parse_source("a + b % c").unwrap();

    let Expr::Binary(outer) = single_expr(&program) else {
        panic!("expected binary expression");
    };
    assert_eq!(outer.operator, BinaryOperator::Add);
    let Expr::Binary(right) = outer.right.as_ref() else {
        panic!("expected binary right operand");
    };
    assert_eq!(right.operator, BinaryOperator::Modulo);
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    let program = parse_source("(a + b) * c").unwrap();

    let Expr::Binary(outer) = single_expr(&program) else {
        panic!("expected binary expression");
    };
    assert_eq!(outer.operator, BinaryOperator::Multiply);
    assert!(matches!(outer.left.as_ref(), Expr::Binary(_)));
}

#[test]
fn test_parse_parenthesized_operand_starts_at_paren() {
    let program = parse_source("(a) + b;").unwrap();

    let location = program.body[0].get_location();
    assert_eq!((location.row(), location.col()), (0, 0));
    let Expr::Binary(binary) = single_expr(&program) else {
        panic!("expected binary expression");
    };
    assert_eq!((binary.location.row(), binary.location.col()), (0, 0));
    assert_eq!(binary.left.get_location().col(), 1);
}

#[test]
fn test_parse_parenthesized_callee_starts_at_paren() {
    let program = parse_source("x;
(f)(1).y = 2;").unwrap();

    assert_eq!(program.body[1].get_location().row(), 1);
    assert_eq!(program.body[1].get_location().col(), 0);
    let Stmt::Expression(stmt) = &program.body[1] else {
        panic!("expected expression statement");
    };
    let Expr::Assignment(assignment) = &stmt.expression else {
        panic!("expected assignment");
    };
    assert_eq!(assignment.location.col(), 0);
    let Expr::Member(member) = assignment.assignee.as_ref() else {
        panic!("expected member expression");
    };
    assert_eq!(member.location.col(), 0);
    assert_eq!(member.object.get_location().col(), 0);
}

#[test]
fn test_parse_group_statement_starts_at_paren() {
    let program = parse_source("(a + b);").unwrap();

    assert_eq!(program.body[0].get_location().col(), 0);
    // The group adds no node; the sum itself starts at `a`
    assert_eq!(single_expr(&program).get_location().col(), 1);
}

#[test]
fn test_parse_prefix_expression() {
    let program = parse_source("-a.b + !c").unwrap();

    let Expr::Binary(binary) = single_expr(&program) else {
        panic!("expected binary expression");
    };
    let Expr::Prefix(negate) = binary.left.as_ref() else {
        panic!("expected prefix expression");
    };
    assert_eq!(negate.operator, PrefixOperator::Negate);
    assert!(matches!(negate.operand.as_ref(), Expr::Member(_)));
    let Expr::Prefix(not) = binary.right.as_ref() else {
        panic!("expected prefix expression");
    };
    assert_eq!(not.operator, PrefixOperator::Not);
}

#[test]
fn test_parse_array_expression() {
    let program = parse_source("[1, 'two', [three],]").unwrap();

    let Expr::Array(array) = single_expr(&program) else {
        panic!("expected array expression");
    };
    assert_eq!(array.elements.len(), 3);
    assert!(matches!(array.elements[2], Expr::Array(_)));
}

#[test]
fn test_parse_empty_array() {
    let program = parse_source("[];").unwrap();

    let Expr::Array(array) = single_expr(&program) else {
        panic!("expected array expression");
    };
    assert!(array.elements.is_empty());
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_source("let x = 42, y;").unwrap();

    let Stmt::VarDecl(decl) = &program.body[0] else {
        panic!("expected variable declaration");
    };
    assert_eq!(decl.kind, VariableKind::Let);
    assert_eq!(decl.declarations.len(), 2);
    assert_eq!(decl.declarations[0].id.name, "x");
    assert!(decl.declarations[0].init.is_some());
    assert_eq!(decl.declarations[1].id.name, "y");
    assert!(decl.declarations[1].init.is_none());
}

#[test]
fn test_parse_var_and_const_declarations() {
    let program = parse_source("var a\nconst b = a").unwrap();

    assert_eq!(program.len(), 2);
    let kinds: Vec<VariableKind> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::VarDecl(decl) => decl.kind,
            other => panic!("expected variable declaration, got {}", other.get_name()),
        })
        .collect();
    assert_eq!(kinds, vec![VariableKind::Var, VariableKind::Const]);
}

#[test]
fn test_parse_const_requires_initializer() {
    let error = parse_source("const PI;").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::MissingConstInitializer {
            name: "PI".to_string()
        }
    );
    assert_eq!(error.get_location().col(), 6);
}

#[test]
fn test_parse_function_declaration() {
    let source = "function add(a, b = 2) {\n    return a + b;\n}";
    let program = parse_source(source).unwrap();

    let Stmt::FnDecl(function) = &program.body[0] else {
        panic!("expected function declaration");
    };
    assert_eq!(function.id.name, "add");
    assert!(!function.is_async);
    assert!(!function.is_generator);
    assert_eq!(function.params.len(), 2);
    assert!(function.params[0].default.is_none());
    assert!(function.params[1].default.is_some());
    assert_eq!(function.body.body.len(), 1);

    let Stmt::Return(ret) = &function.body.body[0] else {
        panic!("expected return statement");
    };
    assert!(matches!(ret.argument, Some(Expr::Binary(_))));
    assert_eq!(ret.location.row(), 1);
    assert_eq!(ret.location.col(), 4);
}

#[test]
fn test_parse_async_generator_function() {
    let program = parse_source("async function* gen() {}").unwrap();

    let Stmt::FnDecl(function) = &program.body[0] else {
        panic!("expected function declaration");
    };
    assert!(function.is_async);
    assert!(function.is_generator);
    assert!(function.params.is_empty());
    assert!(function.body.body.is_empty());
    assert_eq!(function.location.col(), 0);
}

#[test]
fn test_parse_async_requires_function() {
    let error = parse_source("async x").unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedTokenDetailed { token, .. } if token == "x"
    ));
}

#[test]
fn test_parse_return_without_argument() {
    let program = parse_source("function f() { return }\nreturn;").unwrap();

    let Stmt::FnDecl(function) = &program.body[0] else {
        panic!("expected function declaration");
    };
    assert!(matches!(function.body.body[0], Stmt::Return(ref ret) if ret.argument.is_none()));
    assert!(matches!(program.body[1], Stmt::Return(ref ret) if ret.argument.is_none()));
}

#[test]
fn test_parse_return_at_end_of_input() {
    let program = parse_source("return").unwrap();

    assert!(matches!(program.body[0], Stmt::Return(ref ret) if ret.argument.is_none()));
}

#[test]
fn test_parse_block_statement() {
    let program = parse_source("{ a; { b } ; }").unwrap();

    let Stmt::Block(block) = &program.body[0] else {
        panic!("expected block");
    };
    let names: Vec<&str> = block.iter().map(|stmt| stmt.get_name()).collect();
    assert_eq!(
        names,
        vec!["ExpressionStatement", "BlockStatement", "EmptyStatement"]
    );
}

#[test]
fn test_parse_unclosed_block() {
    let error = parse_source("{ a;").unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedEndOfInput { .. }));
    assert_eq!(error.get_context(), "<eof>");
}

#[test]
fn test_parse_if_else_statement() {
    let program = parse_source("if (x) { y = 1 } else z();").unwrap();

    assert_eq!(program.len(), 1);
    let Stmt::If(if_stmt) = &program.body[0] else {
        panic!("expected if statement");
    };
    assert_eq!(identifier_name(&if_stmt.test), "x");
    assert!(matches!(if_stmt.consequent.as_ref(), Stmt::Block(_)));
    assert!(matches!(
        if_stmt.alternate.as_deref(),
        Some(Stmt::Expression(_))
    ));
}

#[test]
fn test_parse_if_without_else() {
    let program = parse_source("if (ready) go(); next();").unwrap();

    assert_eq!(program.len(), 2);
    let Stmt::If(if_stmt) = &program.body[0] else {
        panic!("expected if statement");
    };
    assert!(if_stmt.alternate.is_none());
}

#[test]
fn test_parse_if_requires_parenthesized_test() {
    let error = parse_source("if x { }").unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedTokenDetailed { message, .. } if message == "expected `(` after `if`"
    ));
}

#[test]
fn test_parse_semicolon_after_if_body_is_an_empty_statement() {
    let program = parse_source("if (x) a;;").unwrap();

    let names: Vec<&str> = program.iter().map(|stmt| stmt.get_name()).collect();
    assert_eq!(names, vec!["IfStatement", "EmptyStatement"]);

    let program = parse_source("if (x) a; else b;;").unwrap();
    assert_eq!(program.len(), 2);
    assert!(matches!(program.body[1], Stmt::Empty(_)));
}

#[test]
fn test_parse_semicolon_after_while_body_is_an_empty_statement() {
    let program = parse_source("while (x) debugger;;").unwrap();

    let names: Vec<&str> = program.iter().map(|stmt| stmt.get_name()).collect();
    assert_eq!(names, vec!["WhileStatement", "EmptyStatement"]);
}

#[test]
fn test_parse_while_statement() {
    let program = parse_source("while (i) { i = i - 1; }").unwrap();

    let Stmt::While(while_stmt) = &program.body[0] else {
        panic!("expected while statement");
    };
    assert_eq!(identifier_name(&while_stmt.test), "i");
    let Stmt::Block(body) = while_stmt.body.as_ref() else {
        panic!("expected block body");
    };
    assert_eq!(body.body.len(), 1);
}

#[test]
fn test_parse_do_is_unsupported() {
    let error = parse_source("do { } while (x)").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnsupportedConstruct {
            construct: "do loops".to_string()
        }
    );
}

#[test]
fn test_parse_for_is_unsupported() {
    let error = parse_source("for (x) {}").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnsupportedConstruct {
            construct: "for loops".to_string()
        }
    );
}

#[test]
fn test_parse_other_keywords_are_unsupported() {
    let error = parse_source("class Foo {}").unwrap_err();

    assert_eq!(error.get_error_name(), "UnsupportedConstruct");
    assert_eq!(error.get_context(), "class");
}

#[test]
fn test_parse_colon_is_unsupported() {
    let error = parse_source("label: x").unwrap_err();

    assert_eq!(error.get_error_name(), "UnsupportedConstruct");
    assert_eq!(error.get_location().col(), 5);
}

#[test]
fn test_parse_unexpected_statement_start() {
    let error = parse_source("a; }").unwrap_err();

    assert_eq!(error.get_stage(), Stage::Parser);
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "}".to_string(),
            message: "cannot start a statement".to_string()
        }
    );
    assert_eq!(error.get_location().col(), 3);
    assert_eq!(error.get_location().path(), "test.js");
}

#[test]
fn test_parse_operator_without_operand_is_rejected() {
    let error = parse_source("* a").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "*".to_string(),
            message: "cannot start an expression".to_string()
        }
    );
}

#[test]
fn test_parse_missing_operand_at_end_of_input() {
    let error = parse_source("a +").unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedEndOfInput { .. }));
    assert_eq!(error.get_location().col(), 2);
}

#[test]
fn test_parse_unclosed_call() {
    let error = parse_source("f(a b)").unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedTokenDetailed { token, .. } if token == "b"
    ));
}

#[test]
fn test_parse_deeply_nested_arrays_fail_cleanly() {
    let source = "[".repeat(10_000);
    let error = parse_source(&source).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
    assert_eq!(error.get_context(), "[");
    assert_eq!(error.get_location().col(), MAX_NESTING_DEPTH - 1);
}

#[test]
fn test_parse_deeply_nested_blocks_and_prefixes_fail_cleanly() {
    let blocks = "{".repeat(10_000);
    let error = parse_source(&blocks).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");

    let prefixes = format!("{}a", "-".repeat(10_000));
    let error = parse_source(&prefixes).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");

    let groups = format!("{}a", "(".repeat(10_000));
    let error = parse_source(&groups).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_parse_nesting_below_the_limit() {
    let nested = format!("{}{};\n", "[".repeat(100), "]".repeat(100));
    let source = nested.repeat(5);
    let program = parse_source(&source).unwrap();

    assert_eq!(program.len(), 5);
}

#[test]
fn test_parse_primary_rejects_other_tokens() {
    let tokens = tokenize(";", None).unwrap();
    let mut parser = Parser::new(tokens);

    let error = parse_primary_expr(&mut parser).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: ";".to_string(),
            message: "expected an identifier or a literal".to_string()
        }
    );
    assert_eq!(error.get_context(), ";");
}

#[test]
fn test_parser_cursor() {
    let tokens = tokenize("a . b", None).unwrap();
    let mut parser = Parser::new(tokens);

    assert_eq!(parser.current_token_kind(), Some(TokenKind::Identifier));
    assert_eq!(parser.peek().map(|token| token.kind), Some(TokenKind::Dot));
    assert!(parser.expect(TokenKind::Dot).is_err());
    assert_eq!(parser.advance().unwrap().value, "a");
    assert!(parser.consume_if(TokenKind::Dot));
    assert!(parser.peek().is_none());
    assert_eq!(parser.expect(TokenKind::Identifier).unwrap().value, "b");
    assert!(!parser.has_tokens());
    assert!(matches!(
        parser.advance().unwrap_err().get_kind(),
        ErrorImpl::UnexpectedEndOfInput { .. }
    ));
}

#[test]
fn test_parse_preserves_statement_order() {
    let program = parse_source("let a = 1; a = 2; debugger; a;").unwrap();

    let names: Vec<&str> = program.iter().map(|stmt| stmt.get_name()).collect();
    assert_eq!(
        names,
        vec![
            "VariableDeclaration",
            "ExpressionStatement",
            "DebuggerStatement",
            "ExpressionStatement"
        ]
    );
}

#[test]
fn test_parse_is_repeatable() {
    let source = "function f(a) { if (a) { return [a, a.b(1)]; } }\nf(2);";

    assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
}
