//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It uses recursive descent for statements and a Pratt
//! parser for expressions, and handles:
//!
//! - Statement parsing (declarations, blocks, control flow)
//! - Expression parsing (binary and prefix operators, calls, members, arrays)
//! - Fail-fast error reporting at the offending token
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
