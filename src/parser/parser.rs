//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser walks the token vector with a single cursor; statements are
//! parsed by recursive descent and expressions by a Pratt parser driven by
//! the NUD/LED tables in `lookups`.

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{snippet, Error, ErrorImpl, EOF_CONTEXT},
    lexer::tokens::{Token, TokenKind},
    Location,
};

use super::stmt::parse_stmt;

/// How deeply statements and expressions may nest before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser<'src> {
    /// The list of tokens to parse
    tokens: Vec<Token<'src>>,
    /// Current position in the token stream
    pos: usize,
    /// Statements and expressions currently being parsed
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing, `None` at end of input.
    pub fn current_token(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the token after the current one without advancing.
    pub fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos + 1)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Whether the current token has the given kind. Always false at end of
    /// input.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Whether the current token is the given keyword.
    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.current_token()
            .is_some_and(|token| token.is_keyword(keyword))
    }

    /// Advances to the next token and returns the one consumed.
    pub fn advance(&mut self) -> Result<Token<'src>, Error> {
        let token = self
            .current_token()
            .cloned()
            .ok_or_else(|| self.end_of_input("a token"))?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the current token if it has the given kind.
    pub fn consume_if(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind, reporting `message` otherwise.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token<'src>, Error> {
        match self.current_token_kind() {
            None => Err(self.end_of_input(&expected_kind.to_string())),
            Some(kind) if kind == expected_kind => self.advance(),
            Some(_) => Err(self.unexpected(message)),
        }
    }

    /// Expects a token of the specified kind with a default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token<'src>, Error> {
        self.expect_error(expected_kind, &format!("expected {}", expected_kind))
    }

    pub fn expect_keyword(&mut self, keyword: &str) -> Result<Token<'src>, Error> {
        if self.check_keyword(keyword) {
            return self.advance();
        }

        if self.has_tokens() {
            Err(self.unexpected(&format!("expected `{}`", keyword)))
        } else {
            Err(self.end_of_input(&format!("`{}`", keyword)))
        }
    }

    /// Enters one level of statement or expression nesting. Must be paired
    /// with `leave` on success.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Location of the current token, or of the last token once the input is
    /// exhausted.
    pub fn get_location(&self) -> Location {
        self.current_token()
            .or_else(|| self.tokens.last())
            .map(|token| token.location.clone())
            .unwrap_or_else(Location::null)
    }

    /// Error at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        let context = match self.current_token() {
            Some(token) => snippet(token.value),
            None => String::from(EOF_CONTEXT),
        };
        Error::new(error_impl, self.get_location()).with_context(context)
    }

    /// `UnexpectedTokenDetailed` at the current token, or end of input when
    /// there is none.
    pub fn unexpected(&self, message: &str) -> Error {
        match self.current_token() {
            Some(token) => self.error(ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.to_string(),
                message: message.to_string(),
            }),
            None => self.end_of_input(message),
        }
    }

    pub fn end_of_input(&self, expected: &str) -> Error {
        let error_impl = ErrorImpl::UnexpectedEndOfInput {
            expected: expected.to_string(),
        };
        Error::new(error_impl, self.get_location()).with_context(EOF_CONTEXT)
    }

    pub fn unsupported(&self, construct: &str) -> Error {
        self.error(ErrorImpl::UnsupportedConstruct {
            construct: construct.to_string(),
        })
    }
}

/// Parses a stream of tokens into a Program.
///
/// Statements are parsed until the tokens run out. The first syntax error
/// aborts the whole parse; no partial tree is returned.
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Program<'_>, Error> {
    let mut parser = Parser::new(tokens);

    let mut body = vec![];
    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}
