//! Printer module for rendering a `Program` as an indented tree.

pub mod printer;
