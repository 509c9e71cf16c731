//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use tatico_language::{Lexer, TokenKind};

/// Highlighter for the lineup language.
///
/// Colors come from the real lexer, so highlighting always agrees with what
/// the compiler will see.
#[derive(Debug, Default)]
pub struct TaticoHighlighter;

impl TaticoHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut last = 0;

        for token in Lexer::tokenize_all(line) {
            if token.kind == TokenKind::Eof {
                break;
            }
            // Whitespace between tokens
            result.push_str(&line[last..token.span.start]);

            let text = token.text(line);
            match color(&token.kind) {
                Some(color) => {
                    result.push_str(color);
                    result.push_str(text);
                    result.push_str("\x1b[0m");
                }
                None => result.push_str(text),
            }
            last = token.span.end;
        }
        result.push_str(&line[last..]);

        Cow::Owned(result)
    }
}

fn color(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        // Commands - bold green
        TokenKind::Time | TokenKind::Formacao | TokenKind::Validar | TokenKind::Stop => {
            Some("\x1b[1;32m")
        }
        // Position buckets - cyan
        TokenKind::Position(_) => Some("\x1b[36m"),
        // Numbers and formation codes - magenta
        TokenKind::Int(_) | TokenKind::Formation(_) => Some("\x1b[35m"),
        // Delimiters - bold
        TokenKind::Colon
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::LParen
        | TokenKind::RParen => Some("\x1b[1m"),
        // Illegal input - red underline
        TokenKind::Error(_) => Some("\x1b[4;31m"),
        TokenKind::Name(_) | TokenKind::Eof => None,
    }
}
