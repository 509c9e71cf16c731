//! Tokenizer, command grammar, and parser for the Tatico lineup language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of one command line
//! - [`Parser`] - Matching tokens against the command productions
//! - [`Command`] - The parsed form of a line

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::Command;
pub use lexer::{Lexer, TokenStream};
pub use parser::{ParsedLine, Parser, parse, parse_line, parse_numbered_line};
pub use span::Span;
pub use token::{LexError, Token, TokenKind};
