use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for keyword in [
            "this", "new",
            "async", "function",
            "return", "yield", "continue", "break",
            "let", "const", "var",
            "private", "public", "protected", "override",
            "interface", "class", "enum",
            "true", "false",
            "if", "while", "do", "else", "catch",
            "null", "debugger",
        ] {
            set.insert(keyword);
        }
        set
    };

    pub static ref CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Dash);
        map.insert('/', TokenKind::Slash);
        map.insert('*', TokenKind::Star);
        map.insert('|', TokenKind::Pipe);
        map.insert('^', TokenKind::Caret);
        map.insert('&', TokenKind::Ampersand);
        map.insert('%', TokenKind::Percent);
        map.insert('!', TokenKind::Not);
        map.insert('?', TokenKind::Question);
        map.insert('=', TokenKind::Assignment);
        map.insert(':', TokenKind::Colon);
        map.insert(';', TokenKind::Semicolon);
        map.insert('.', TokenKind::Dot);
        map.insert(',', TokenKind::Comma);
        map.insert('#', TokenKind::Hash);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map.insert('<', TokenKind::Less);
        map.insert('>', TokenKind::Greater);
        map
    };
}

pub fn is_keyword(word: &str) -> bool {
    RESERVED_LOOKUP.contains(word)
}

/// Token classification.
///
/// Every punctuation kind is exactly one source character; `==`, `&&` and
/// friends are two tokens each.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    String,
    Number,

    Plus,       // +
    Dash,       // -
    Slash,      // /
    Star,       // *
    Pipe,       // |
    Caret,      // ^
    Ampersand,  // &
    Percent,    // %
    Not,        // !
    Question,   // ?
    Assignment, // =

    Colon,
    Semicolon,
    Dot,
    Comma,
    Hash,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Less,
    Greater,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified slice of the source buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: &'src str,
    pub location: Location,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) > {}", self.location, self.value)
    }
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, value: &'src str, location: Location) -> Self {
        Token {
            kind,
            value,
            location,
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == keyword
    }
}
