//! Error types and diagnostics for the front end.
//!
//! This module defines the single error type returned by both the lexer and
//! the parser. It includes:
//!
//! - The error structure with source location and context snippet
//! - Specific error variants for the lexing and parsing stages
//! - The four-line diagnostic rendering
//! - Optional suggestions shown below a diagnostic

pub mod errors;
