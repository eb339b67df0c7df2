use std::fmt::Display;

use thiserror::Error;

use crate::Location;

/// Maximum number of characters of source shown under a diagnostic header.
pub const CONTEXT_LENGTH: usize = 12;

/// Context placeholder used when the input ran out.
pub const EOF_CONTEXT: &str = "<eof>";

/// Takes up to [`CONTEXT_LENGTH`] characters of `text`, stopping at the end of
/// the line so a diagnostic always stays four lines long.
pub fn snippet(text: &str) -> String {
    text.chars()
        .take_while(|ch| *ch != '\n')
        .take(CONTEXT_LENGTH)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexer,
    Parser,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Lexer => write!(f, "Lexer"),
            Stage::Parser => write!(f, "Parser"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    location: Location,
    context: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: Location) -> Self {
        Error {
            internal_error: error_impl,
            location,
            context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn get_location(&self) -> &Location {
        &self.location
    }

    pub fn get_context(&self) -> &str {
        &self.context
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_stage(&self) -> Stage {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } | ErrorImpl::UnexpectedCharacter { .. } => {
                Stage::Lexer
            }
            _ => Stage::Parser,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnsupportedConstruct { .. } => "UnsupportedConstruct",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::MissingConstInitializer { .. } => "MissingConstInitializer",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { quote } => ErrorTip::Suggestion(format!(
                "Close the string with a matching {}",
                quote
            )),
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedTokenDetailed { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedEndOfInput { .. } => ErrorTip::Suggestion(String::from(
                "The input ended early, is a closing bracket missing?",
            )),
            ErrorImpl::UnsupportedConstruct { .. } => ErrorTip::Suggestion(String::from(
                "This construct is reserved by the grammar but has not been implemented yet",
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only identifiers and member expressions can be assigned to",
            )),
            ErrorImpl::MissingConstInitializer { name } => ErrorTip::Suggestion(format!(
                "Give `{}` a value, or declare it with `let`",
                name
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the deeply nested code into smaller pieces",
            )),
        }
    }
}

/// Renders the four-line diagnostic:
///
/// ```text
/// [Lexer] (repl:0:0)
/// >       "abc
///         ^
///         unterminated string literal
/// ```
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{}] ({})", self.get_stage(), self.location)?;
        writeln!(f, ">       {}", self.context)?;
        writeln!(f, "        ^")?;
        write!(f, "        {}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unterminated string literal, expected closing {quote}")]
    UnterminatedString { quote: char },
    #[error("unexpected character {character:?} whilst lexing")]
    UnexpectedCharacter { character: char },
    #[error("unexpected token `{token}`, {message}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("missing initializer in const declaration of `{name}`")]
    MissingConstInitializer { name: String },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}
