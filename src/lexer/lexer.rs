use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{snippet, Error, ErrorImpl},
    Location,
};

use super::tokens::{is_keyword, Token, TokenKind, CHAR_LOOKUP};

/// Receives the text matched by its pattern, which always starts at the cursor.
pub type RegexHandler = for<'src> fn(&mut Lexer<'src>, &'src str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("scanner patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Order matters: comments before punctuation, closed strings before the
    // unterminated fallback.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        // ASCII whitespace only; other Unicode spaces are unexpected characters
        pattern(r"^[ \t\n\r\x0B\x0C]+", skip_handler),
        pattern(r"^//[^\n]*", skip_handler),
        pattern(r#"^"(?:\\(?s:.)|[^"\\])*""#, string_handler),
        pattern(r"^'(?:\\(?s:.)|[^'\\])*'", string_handler),
        pattern(r"^`(?:\\(?s:.)|[^`\\])*`", string_handler),
        pattern(r#"^["'`]"#, unterminated_string_handler),
        pattern(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern(r"^[0-9]+", number_handler),
        pattern(r"^[-+/*|^&%!?=:;.,#(){}\[\]<>]", punctuation_handler),
    ];
}

pub struct Lexer<'src> {
    tokens: Vec<Token<'src>>,
    source: &'src str,
    pos: usize,
    row: usize,
    line_start: usize,
    file: Option<Rc<String>>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            row: 0,
            line_start: 0,
            file: file.map(Rc::new),
        }
    }

    /// Moves the cursor over `n` bytes, keeping row and line start in step
    /// with every newline crossed.
    pub fn advance_n(&mut self, n: usize) {
        let end = self.pos + n;
        for (index, ch) in self.source[self.pos..end].char_indices() {
            if ch == '\n' {
                self.row += 1;
                self.line_start = self.pos + index + 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token<'src>) {
        trace!(kind = %token.kind, value = token.value, "token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn location(&self) -> Location {
        Location::new(self.file.clone(), self.pos, self.row, self.line_start)
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.location()).with_context(snippet(self.remainder()))
    }
}

fn skip_handler<'src>(lexer: &mut Lexer<'src>, matched: &'src str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler<'src>(lexer: &mut Lexer<'src>, matched: &'src str) -> Result<(), Error> {
    let location = lexer.location();
    lexer.advance_n(matched.len());
    lexer.push(Token::new(TokenKind::String, matched, location));
    Ok(())
}

fn unterminated_string_handler<'src>(
    lexer: &mut Lexer<'src>,
    matched: &'src str,
) -> Result<(), Error> {
    let quote = matched.chars().next().unwrap_or('"');
    Err(lexer.error(ErrorImpl::UnterminatedString { quote }))
}

fn symbol_handler<'src>(lexer: &mut Lexer<'src>, matched: &'src str) -> Result<(), Error> {
    let kind = if is_keyword(matched) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    let location = lexer.location();
    lexer.advance_n(matched.len());
    lexer.push(Token::new(kind, matched, location));
    Ok(())
}

fn number_handler<'src>(lexer: &mut Lexer<'src>, matched: &'src str) -> Result<(), Error> {
    let location = lexer.location();
    lexer.advance_n(matched.len());
    lexer.push(Token::new(TokenKind::Number, matched, location));
    Ok(())
}

fn punctuation_handler<'src>(lexer: &mut Lexer<'src>, matched: &'src str) -> Result<(), Error> {
    let character = matched.chars().next().unwrap_or_default();
    let Some(kind) = CHAR_LOOKUP.get(&character).copied() else {
        return Err(lexer.error(ErrorImpl::UnexpectedCharacter { character }));
    };

    let location = lexer.location();
    lexer.advance_n(matched.len());
    lexer.push(Token::new(kind, matched, location));
    Ok(())
}

/// Scans `source` into tokens.
///
/// `file` labels locations for diagnostics; `None` reports as `repl`. The
/// first lexical error aborts the scan and no tokens are returned.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token<'_>>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .map(|found| (pattern.handler, found.as_str()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, text)?,
            None => {
                let character = lex.at().unwrap_or_default();
                return Err(lex.error(ErrorImpl::UnexpectedCharacter { character }));
            }
        }
    }

    debug!(tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
