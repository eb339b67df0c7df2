//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization driven by an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, strings, numbers and punctuation
//! - Row and column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
