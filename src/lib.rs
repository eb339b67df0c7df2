#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod printer;

extern crate regex;

/// Path reported for source that did not come from a file.
pub const REPL_PATH: &str = "repl";

/// A point in the source buffer.
///
/// `offset` and `line_start` are byte offsets into the buffer; the column is
/// derived from them so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    file: Option<Rc<String>>,
    offset: usize,
    row: usize,
    line_start: usize,
}

impl Location {
    pub fn new(file: Option<Rc<String>>, offset: usize, row: usize, line_start: usize) -> Self {
        debug_assert!(line_start <= offset, "line start past offset");
        Location {
            file,
            offset,
            row,
            line_start,
        }
    }

    pub fn null() -> Self {
        Location::new(None, 0, 0, 0)
    }

    pub fn path(&self) -> &str {
        match &self.file {
            Some(file) => file.as_str(),
            None => REPL_PATH,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.offset - self.line_start
    }

    pub fn line_start(&self) -> usize {
        self.line_start
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.path(), self.row, self.col())
    }
}
