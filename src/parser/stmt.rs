use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{
            BlockStmt, DebuggerStmt, EmptyStmt, ExpressionStmt, FnDeclStmt, FunctionArgument,
            IfStmt, ReturnStmt, VarDeclStmt, VariableDeclarator, VariableKind, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::LOOKUPS, parser::Parser};

/// Tokens that may open an expression statement. Several of them (`.`, `=`,
/// `*`, `/`, `%`) are then rejected by the expression parser with a more
/// precise message.
const EXPRESSION_STARTS: [TokenKind; 13] = [
    TokenKind::Identifier,
    TokenKind::String,
    TokenKind::Number,
    TokenKind::Dot,
    TokenKind::Assignment,
    TokenKind::OpenBracket,
    TokenKind::OpenParen,
    TokenKind::Plus,
    TokenKind::Dash,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Percent,
    TokenKind::Not,
];

pub fn parse_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    parser.enter()?;
    let stmt = parse_stmt_at_depth(parser)?;
    parser.leave();

    Ok(stmt)
}

fn parse_stmt_at_depth<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let Some(token) = parser.current_token() else {
        return Err(parser.end_of_input("a statement"));
    };

    if let Some(stmt_fn) = LOOKUPS.stmt.get(&token.kind).copied() {
        return stmt_fn(parser);
    }

    if token.is_one_of_many(&EXPRESSION_STARTS) {
        return parse_expression_stmt(parser);
    }

    Err(parser.unexpected("cannot start a statement"))
}

pub fn parse_expression_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let location = parser.get_location();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.consume_if(TokenKind::Semicolon);

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        location,
    }))
}

/// Dispatches on the keyword text. A `;` directly after the statement is
/// consumed; none is required. `if` and `while` end in a nested statement
/// that has already taken its own `;`.
pub fn parse_keyword_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let keyword = match parser.current_token() {
        Some(token) => token.value,
        None => return Err(parser.end_of_input("a statement")),
    };

    let stmt = match keyword {
        "function" | "async" => parse_fn_decl_stmt(parser)?,
        "return" => parse_return_stmt(parser)?,
        "let" | "const" | "var" => parse_var_decl_stmt(parser)?,
        "if" => return parse_if_stmt(parser),
        "while" => return parse_while_stmt(parser),
        "debugger" => parse_debugger_stmt(parser)?,
        "true" | "false" | "null" => return parse_expression_stmt(parser),
        "do" => return Err(parser.unsupported("do loops")),
        "else" => return Err(parser.unexpected("`else` without a preceding `if`")),
        other => return Err(parser.unsupported(&format!("`{}` statements", other))),
    };

    parser.consume_if(TokenKind::Semicolon);
    Ok(stmt)
}

/// `for` is not a reserved word in this language, so loops headed by it are
/// caught here before they parse as a call to `for`.
pub fn parse_identifier_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    if parser.current_token().is_some_and(|token| token.value == "for") {
        return Err(parser.unsupported("for loops"));
    }

    parse_expression_stmt(parser)
}

pub fn parse_empty_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let token = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Empty(EmptyStmt {
        location: token.location,
    }))
}

pub fn parse_debugger_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let token = parser.expect_keyword("debugger")?;

    Ok(Stmt::Debugger(DebuggerStmt {
        location: token.location,
    }))
}

pub fn parse_block<'src>(parser: &mut Parser<'src>) -> Result<BlockStmt<'src>, Error> {
    let start = parser.expect_error(TokenKind::OpenCurly, "expected `{` to open a block")?;

    let mut body = Vec::new();
    while !parser.check(TokenKind::CloseCurly) {
        if !parser.has_tokens() {
            return Err(parser.end_of_input("`}` to close the block"));
        }
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body,
        location: start.location,
    })
}

pub fn parse_block_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

fn parse_identifier<'src>(
    parser: &mut Parser<'src>,
    message: &str,
) -> Result<IdentifierExpr<'src>, Error> {
    let token = parser.expect_error(TokenKind::Identifier, message)?;

    Ok(IdentifierExpr {
        name: token.value,
        location: token.location,
    })
}

pub fn parse_fn_decl_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let is_async = parser.check_keyword("async");
    let start = if is_async {
        let start = parser.advance()?;
        parser.expect_keyword("function")?;
        start
    } else {
        parser.expect_keyword("function")?
    };

    let is_generator = parser.consume_if(TokenKind::Star);
    let id = parse_identifier(parser, "expected function name")?;

    parser.expect(TokenKind::OpenParen)?;

    let mut params = Vec::new();
    while !parser.check(TokenKind::CloseParen) {
        let id = parse_identifier(parser, "expected parameter name")?;
        let default = if parser.consume_if(TokenKind::Assignment) {
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            None
        };
        params.push(FunctionArgument { id, default });

        if !parser.consume_if(TokenKind::Comma) {
            break;
        }
    }

    parser.expect_error(TokenKind::CloseParen, "expected `,` or `)` in parameter list")?;

    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        id,
        is_async,
        is_generator,
        params,
        body,
        location: start.location,
    }))
}

pub fn parse_var_decl_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let Some(kind) = parser
        .current_token()
        .and_then(|token| VariableKind::from_keyword(token.value))
    else {
        return Err(parser.unexpected("expected `let`, `const` or `var`"));
    };
    let start = parser.advance()?;

    let mut declarations = Vec::new();
    loop {
        let id = parse_identifier(parser, "expected identifier during variable declaration")?;
        let init = if parser.consume_if(TokenKind::Assignment) {
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            None
        };

        if kind == VariableKind::Const && init.is_none() {
            return Err(Error::new(
                ErrorImpl::MissingConstInitializer {
                    name: id.name.to_string(),
                },
                id.location,
            )
            .with_context(id.name));
        }

        declarations.push(VariableDeclarator { id, init });

        if !parser.consume_if(TokenKind::Comma) {
            break;
        }
    }

    Ok(Stmt::VarDecl(VarDeclStmt {
        kind,
        declarations,
        location: start.location,
    }))
}

pub fn parse_return_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let start = parser.expect_keyword("return")?;

    let argument = if !parser.has_tokens()
        || parser.check(TokenKind::Semicolon)
        || parser.check(TokenKind::CloseCurly)
    {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    Ok(Stmt::Return(ReturnStmt {
        argument,
        location: start.location,
    }))
}

pub fn parse_if_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let start = parser.expect_keyword("if")?;

    parser.expect_error(TokenKind::OpenParen, "expected `(` after `if`")?;
    let test = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::CloseParen, "expected `)` after the condition")?;

    let consequent = parse_stmt(parser)?;

    let alternate = if parser.check_keyword("else") {
        parser.advance()?;
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        test,
        consequent: Box::new(consequent),
        alternate,
        location: start.location,
    }))
}

pub fn parse_while_stmt<'src>(parser: &mut Parser<'src>) -> Result<Stmt<'src>, Error> {
    let start = parser.expect_keyword("while")?;

    parser.expect_error(TokenKind::OpenParen, "expected `(` after `while`")?;
    let test = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::CloseParen, "expected `)` after the condition")?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        test,
        body: Box::new(body),
        location: start.location,
    }))
}
