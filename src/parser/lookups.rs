use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Location,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first.
///
/// Multiplicative binds tighter than additive; operators of equal power
/// associate to the left.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
}

pub type StmtHandler = for<'src> fn(&mut Parser<'src>) -> Result<Stmt<'src>, Error>;
pub type NUDHandler = for<'src> fn(&mut Parser<'src>) -> Result<Expr<'src>, Error>;
/// Infix handlers also receive the location where the whole expression
/// started, which becomes the new node's location.
pub type LEDHandler = for<'src> fn(
    &mut Parser<'src>,
    Expr<'src>,
    Location,
    BindingPower,
) -> Result<Expr<'src>, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

#[derive(Default)]
pub struct Lookups {
    pub stmt: StmtLookup,
    pub nud: NUDLookup,
    pub led: LEDLookup,
    pub binding_power: BPLookup,
}

impl Lookups {
    /// Registers a left denotation (infix) handler and its binding power.
    fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power.insert(kind, binding_power);
        self.led.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler.
    fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud.insert(kind, nud_fn);
    }

    fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt.insert(kind, stmt_fn);
    }
}

lazy_static! {
    pub static ref LOOKUPS: Lookups = create_token_lookups();
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::default();

    lookups.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    lookups.led(TokenKind::Colon, BindingPower::Assignment, parse_colon_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    lookups.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Member
    lookups.led(TokenKind::Dot, BindingPower::Member, parse_member_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Number, parse_primary_expr);
    lookups.nud(TokenKind::Identifier, parse_primary_expr);
    lookups.nud(TokenKind::String, parse_primary_expr);
    lookups.nud(TokenKind::Keyword, parse_keyword_expr);
    lookups.nud(TokenKind::OpenBracket, parse_array_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::Plus, parse_prefix_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);

    // Statements
    lookups.stmt(TokenKind::Keyword, parse_keyword_stmt);
    lookups.stmt(TokenKind::Identifier, parse_identifier_stmt);
    lookups.stmt(TokenKind::OpenCurly, parse_block_stmt);
    lookups.stmt(TokenKind::Semicolon, parse_empty_stmt);

    lookups
}
