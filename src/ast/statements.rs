use std::slice::Iter;

use crate::Location;

use super::{
    ast::{Expr, Stmt},
    expressions::IdentifierExpr,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStmt {
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebuggerStmt {
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt<'src> {
    pub body: Vec<Stmt<'src>>,
    pub location: Location,
}

impl<'src> BlockStmt<'src> {
    pub fn iter(&self) -> Iter<'_, Stmt<'src>> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt<'src> {
    pub expression: Expr<'src>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt<'src> {
    pub test: Expr<'src>,
    pub consequent: Box<Stmt<'src>>,
    pub alternate: Option<Box<Stmt<'src>>>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt<'src> {
    pub test: Expr<'src>,
    pub body: Box<Stmt<'src>>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt<'src> {
    pub argument: Option<Expr<'src>>,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Let,
    Const,
    Var,
}

impl VariableKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "let" => Some(VariableKind::Let),
            "const" => Some(VariableKind::Const),
            "var" => Some(VariableKind::Var),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Let => "let",
            VariableKind::Const => "const",
            VariableKind::Var => "var",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator<'src> {
    pub id: IdentifierExpr<'src>,
    pub init: Option<Expr<'src>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt<'src> {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator<'src>>,
    pub location: Location,
}

/// A function parameter, optionally with a default value.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArgument<'src> {
    pub id: IdentifierExpr<'src>,
    pub default: Option<Expr<'src>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt<'src> {
    pub id: IdentifierExpr<'src>,
    pub is_async: bool,
    pub is_generator: bool,
    pub params: Vec<FunctionArgument<'src>>,
    pub body: BlockStmt<'src>,
    pub location: Location,
}
