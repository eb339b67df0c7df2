use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayExpr, AssignmentExpr, BinaryExpr, BinaryOperator, CallExpr, IdentifierExpr,
            LiteralExpr, LiteralKind, MemberExpr, PrefixExpr, PrefixOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Location,
};

use super::{
    lookups::{BindingPower, LOOKUPS},
    parser::Parser,
};

pub fn parse_expr<'src>(parser: &mut Parser<'src>, bp: BindingPower) -> Result<Expr<'src>, Error> {
    parser.enter()?;
    let expr = parse_expr_at_depth(parser, bp)?;
    parser.leave();

    Ok(expr)
}

fn parse_expr_at_depth<'src>(
    parser: &mut Parser<'src>,
    bp: BindingPower,
) -> Result<Expr<'src>, Error> {
    // First parse NUD
    let Some(token_kind) = parser.current_token_kind() else {
        return Err(parser.end_of_input("an expression"));
    };
    let Some(nud_fn) = LOOKUPS.nud.get(&token_kind).copied() else {
        return Err(parser.unexpected("cannot start an expression"));
    };

    // Infix nodes start where the whole expression starts, `(` included
    let start = parser.get_location();
    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than the caller, keep extending lhs
    while let Some(token_kind) = parser.current_token_kind() {
        let next_bp = LOOKUPS
            .binding_power
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let Some(led_fn) = LOOKUPS.led.get(&token_kind).copied() else {
            return Err(parser.unexpected("cannot follow an expression"));
        };
        left = led_fn(parser, left, start.clone(), next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr<'src>(parser: &mut Parser<'src>) -> Result<Expr<'src>, Error> {
    let kind = match parser.current_token_kind() {
        Some(TokenKind::Number) => LiteralKind::Number,
        Some(TokenKind::String) => LiteralKind::String,
        Some(TokenKind::Identifier) => {
            let token = parser.advance()?;
            return Ok(Expr::Identifier(IdentifierExpr {
                name: token.value,
                location: token.location,
            }));
        }
        _ => return Err(parser.unexpected("expected an identifier or a literal")),
    };

    let token = parser.advance()?;
    Ok(Expr::Literal(LiteralExpr {
        value: token.value,
        kind,
        location: token.location,
    }))
}

/// `true`, `false` and `null` are the only keywords that start an expression.
pub fn parse_keyword_expr<'src>(parser: &mut Parser<'src>) -> Result<Expr<'src>, Error> {
    let kind = match parser.current_token().map(|token| token.value) {
        Some("true") | Some("false") => LiteralKind::Boolean,
        Some("null") => LiteralKind::Null,
        _ => return Err(parser.unexpected("keyword cannot start an expression")),
    };

    let token = parser.advance()?;
    Ok(Expr::Literal(LiteralExpr {
        value: token.value,
        kind,
        location: token.location,
    }))
}

pub fn parse_array_expr<'src>(parser: &mut Parser<'src>) -> Result<Expr<'src>, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?;

    let mut elements = vec![];
    while !parser.check(TokenKind::CloseBracket) {
        elements.push(parse_expr(parser, BindingPower::Default)?);

        if !parser.consume_if(TokenKind::Comma) {
            break;
        }
    }

    parser.expect_error(TokenKind::CloseBracket, "expected `,` or `]` in array")?;

    Ok(Expr::Array(ArrayExpr {
        elements,
        location: start.location,
    }))
}

pub fn parse_grouping_expr<'src>(parser: &mut Parser<'src>) -> Result<Expr<'src>, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::CloseParen, "expected `)` to close the group")?;

    Ok(expr)
}

pub fn parse_prefix_expr<'src>(parser: &mut Parser<'src>) -> Result<Expr<'src>, Error> {
    let Some(operator) = parser
        .current_token_kind()
        .and_then(PrefixOperator::from_token_kind)
    else {
        return Err(parser.unexpected("expected a prefix operator"));
    };

    let operator_token = parser.advance()?;
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        operand: Box::new(operand),
        location: operator_token.location,
    }))
}

pub fn parse_binary_expr<'src>(
    parser: &mut Parser<'src>,
    left: Expr<'src>,
    location: Location,
    bp: BindingPower,
) -> Result<Expr<'src>, Error> {
    let Some(operator) = parser
        .current_token_kind()
        .and_then(BinaryOperator::from_token_kind)
    else {
        return Err(parser.unexpected("expected a binary operator"));
    };

    parser.advance()?;
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        operator,
        location,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_assignment_expr<'src>(
    parser: &mut Parser<'src>,
    left: Expr<'src>,
    location: Location,
    _bp: BindingPower,
) -> Result<Expr<'src>, Error> {
    if !left.is_assignable() {
        return Err(parser.error(ErrorImpl::InvalidAssignmentTarget));
    }

    parser.expect(TokenKind::Assignment)?;
    // Default power on the right makes `a = b = c` group as `a = (b = c)`
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment(AssignmentExpr {
        location,
        assignee: Box::new(left),
        value: Box::new(value),
    }))
}

pub fn parse_call_expr<'src>(
    parser: &mut Parser<'src>,
    left: Expr<'src>,
    location: Location,
    _bp: BindingPower,
) -> Result<Expr<'src>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    while !parser.check(TokenKind::CloseParen) {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        if !parser.consume_if(TokenKind::Comma) {
            break;
        }
    }

    parser.expect_error(TokenKind::CloseParen, "expected `,` or `)` in argument list")?;

    Ok(Expr::Call(CallExpr {
        location,
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_member_expr<'src>(
    parser: &mut Parser<'src>,
    left: Expr<'src>,
    location: Location,
    _bp: BindingPower,
) -> Result<Expr<'src>, Error> {
    parser.expect(TokenKind::Dot)?;

    let is_property_name = parser
        .current_token()
        .is_some_and(|token| token.is_one_of_many(&[TokenKind::Identifier, TokenKind::Keyword]));
    if !is_property_name {
        return Err(parser.unexpected("expected property name after `.`"));
    }

    let property = parser.advance()?;

    Ok(Expr::Member(MemberExpr {
        location,
        object: Box::new(left),
        property: IdentifierExpr {
            name: property.value,
            location: property.location,
        },
    }))
}

/// `:` after an expression belongs to labels and object literals, neither of
/// which the grammar covers yet.
pub fn parse_colon_expr<'src>(
    parser: &mut Parser<'src>,
    _left: Expr<'src>,
    _location: Location,
    _bp: BindingPower,
) -> Result<Expr<'src>, Error> {
    Err(parser.unsupported("`:` after an expression (labels and object literals)"))
}
