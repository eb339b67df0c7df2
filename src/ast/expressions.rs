use crate::{lexer::tokens::TokenKind, Location};

use super::ast::Expr;

// LITERALS

/// Identifier Expression
/// A bare name, also used for declaration names and member properties.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr<'src> {
    pub name: &'src str,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    String,
    Boolean,
    Null,
}

/// Literal Expression
/// Keeps the literal exactly as written; strings include their quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr<'src> {
    pub value: &'src str,
    pub kind: LiteralKind,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr<'src> {
    pub elements: Vec<Expr<'src>>,
    pub location: Location,
}

// COMPOUND

/// Member Expression
/// `object.property`; chains nest to the left, so `a.b.c` is `(a.b).c`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr<'src> {
    pub object: Box<Expr<'src>>,
    pub property: IdentifierExpr<'src>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr<'src> {
    pub callee: Box<Expr<'src>>,
    pub arguments: Vec<Expr<'src>>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr<'src> {
    pub assignee: Box<Expr<'src>>,
    pub value: Box<Expr<'src>>,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Percent => Some(BinaryOperator::Modulo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<'src> {
    pub operator: BinaryOperator,
    pub left: Box<Expr<'src>>,
    pub right: Box<Expr<'src>>,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Plus,
    Negate,
    Not,
}

impl PrefixOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(PrefixOperator::Plus),
            TokenKind::Dash => Some(PrefixOperator::Negate),
            TokenKind::Not => Some(PrefixOperator::Not),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOperator::Plus => "+",
            PrefixOperator::Negate => "-",
            PrefixOperator::Not => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr<'src> {
    pub operator: PrefixOperator,
    pub operand: Box<Expr<'src>>,
    pub location: Location,
}
