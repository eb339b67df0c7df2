use std::slice::Iter;

use crate::Location;

use super::{
    expressions::{
        ArrayExpr, AssignmentExpr, BinaryExpr, CallExpr, IdentifierExpr, LiteralExpr, MemberExpr,
        PrefixExpr,
    },
    statements::{
        BlockStmt, DebuggerStmt, EmptyStmt, ExpressionStmt, FnDeclStmt, IfStmt, ReturnStmt,
        VarDeclStmt, WhileStmt,
    },
};

/// Statement
///
/// Every statement kind the parser can produce. Nodes borrow their text from
/// the source buffer and own their children.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<'src> {
    Empty(EmptyStmt),
    Debugger(DebuggerStmt),
    Block(BlockStmt<'src>),
    If(IfStmt<'src>),
    While(WhileStmt<'src>),
    Expression(ExpressionStmt<'src>),
    Return(ReturnStmt<'src>),
    VarDecl(VarDeclStmt<'src>),
    FnDecl(FnDeclStmt<'src>),
}

impl Stmt<'_> {
    /// Location of the statement's first token.
    pub fn get_location(&self) -> &Location {
        match self {
            Stmt::Empty(stmt) => &stmt.location,
            Stmt::Debugger(stmt) => &stmt.location,
            Stmt::Block(stmt) => &stmt.location,
            Stmt::If(stmt) => &stmt.location,
            Stmt::While(stmt) => &stmt.location,
            Stmt::Expression(stmt) => &stmt.location,
            Stmt::Return(stmt) => &stmt.location,
            Stmt::VarDecl(stmt) => &stmt.location,
            Stmt::FnDecl(stmt) => &stmt.location,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            Stmt::Empty(_) => "EmptyStatement",
            Stmt::Debugger(_) => "DebuggerStatement",
            Stmt::Block(_) => "BlockStatement",
            Stmt::If(_) => "IfStatement",
            Stmt::While(_) => "WhileStatement",
            Stmt::Expression(_) => "ExpressionStatement",
            Stmt::Return(_) => "ReturnStatement",
            Stmt::VarDecl(_) => "VariableDeclaration",
            Stmt::FnDecl(_) => "FunctionDeclaration",
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'src> {
    Identifier(IdentifierExpr<'src>),
    Literal(LiteralExpr<'src>),
    Array(ArrayExpr<'src>),
    Member(MemberExpr<'src>),
    Call(CallExpr<'src>),
    Assignment(AssignmentExpr<'src>),
    Binary(BinaryExpr<'src>),
    Prefix(PrefixExpr<'src>),
}

impl Expr<'_> {
    /// Location of the expression's first token.
    pub fn get_location(&self) -> &Location {
        match self {
            Expr::Identifier(expr) => &expr.location,
            Expr::Literal(expr) => &expr.location,
            Expr::Array(expr) => &expr.location,
            Expr::Member(expr) => &expr.location,
            Expr::Call(expr) => &expr.location,
            Expr::Assignment(expr) => &expr.location,
            Expr::Binary(expr) => &expr.location,
            Expr::Prefix(expr) => &expr.location,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            Expr::Identifier(_) => "Identifier",
            Expr::Literal(_) => "Literal",
            Expr::Array(_) => "ArrayExpression",
            Expr::Member(_) => "MemberExpression",
            Expr::Call(_) => "CallExpression",
            Expr::Assignment(_) => "AssignmentExpression",
            Expr::Binary(_) => "BinaryExpression",
            Expr::Prefix(_) => "PrefixExpression",
        }
    }

    /// Whether the expression may appear on the left of `=`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Identifier(_) | Expr::Member(_))
    }
}

/// Program
///
/// The top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program<'src> {
    pub body: Vec<Stmt<'src>>,
}

impl<'src> Program<'src> {
    pub fn iter(&self) -> Iter<'_, Stmt<'src>> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
