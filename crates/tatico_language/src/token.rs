//! Token types for the lineup language.
//!
//! Tokens are the output of the lexer and input to the parser.

use tatico_foundation::Position;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Token types for the lineup language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    /// `TIME`
    Time,
    /// `FORMACAO`
    Formacao,
    /// `VALIDAR`
    Validar,
    /// `STOP`
    Stop,
    /// `GOL`, `DEF`, `MEI` or `ATA`
    Position(Position),

    // Literals
    /// Formation code like `4-4-2`, as its raw lines
    Formation(Vec<u32>),
    /// Integer literal like `10`
    Int(u32),
    /// Name fragment like `Gabigol` or `São-Paulo`
    Name(String),

    // Punctuation
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,

    // Meta
    /// End of the line
    Eof,
    /// Lexer error
    Error(LexError),
}

/// What went wrong while scanning a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    IllegalCharacter(char),
    /// A digit run that does not fit a `u32`.
    IntegerOutOfRange,
}

impl TokenKind {
    /// Classifies a scanned word against the reserved-word table.
    ///
    /// Matching is exact and case-sensitive.
    #[must_use]
    pub fn reserved(word: &str) -> Option<Self> {
        match word {
            "TIME" => Some(Self::Time),
            "FORMACAO" => Some(Self::Formacao),
            "VALIDAR" => Some(Self::Validar),
            "STOP" => Some(Self::Stop),
            _ => Position::from_code(word).map(Self::Position),
        }
    }

    /// Returns true for the error kind.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
