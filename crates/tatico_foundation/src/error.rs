//! Error types for the Tatico compiler.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::position::Position;

/// Convenience alias used across all Tatico crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tatico operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an illegal character error.
    #[must_use]
    pub fn illegal_character(character: char, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::IllegalCharacter {
            character,
            line,
            column,
        })
    }

    /// Creates a syntax error pointing at a token, or at the end of input when
    /// `found` is `None`.
    #[must_use]
    pub fn syntax(found: Option<String>, expected: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::Syntax {
            found,
            expected: expected.into(),
            line,
            column,
        })
    }

    /// Creates a count mismatch error.
    #[must_use]
    pub fn count_mismatch(target: CountTarget, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::CountMismatch {
            target,
            expected,
            actual,
        })
    }

    /// Returns true if this error came out of the tokenizer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::IllegalCharacter { .. } | ErrorKind::IntegerOutOfRange { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A character that starts no token.
    #[error("illegal character '{character}' at {line}:{column}")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A digit run too large for a jersey number or formation line.
    #[error("integer '{literal}' out of range at {line}:{column}")]
    IntegerOutOfRange {
        /// The digit run as written.
        literal: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// The token sequence matches no command.
    #[error("syntax error at {line}:{column}: {}", describe_syntax(.found, .expected))]
    Syntax {
        /// Text of the offending token; `None` at end of input.
        found: Option<String>,
        /// What the grammar expected instead.
        expected: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A per-team list whose length differs from the number of declared teams.
    #[error("{target}: {expected} team(s) declared, but {actual} given")]
    CountMismatch {
        /// Which command supplied the list.
        target: CountTarget,
        /// Number of teams in the session.
        expected: usize,
        /// Number of items supplied.
        actual: usize,
    },

    /// Formation code violating its shape invariant.
    #[error("invalid formation: {0}")]
    InvalidFormation(String),

    /// Jersey numbers start at 1.
    #[error("invalid jersey number: {0}")]
    InvalidJerseyNumber(u32),

    /// Player or team name with no text.
    #[error("name must not be empty")]
    EmptyName,

    /// Position code other than GOL, DEF, MEI or ATA.
    #[error("unknown position: {0}")]
    UnknownPosition(String),

    /// Document rendering failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

#[allow(clippy::ref_option)]
fn describe_syntax(found: &Option<String>, expected: &str) -> String {
    match found {
        Some(token) => format!("unexpected token '{token}', expected {expected}"),
        None => format!("unexpected end of input, expected {expected}"),
    }
}

/// The command whose per-team list had the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountTarget {
    /// `FORMACAO a ; b ; ...`
    Formations,
    /// `GOL: ... ; ...` and the other position buckets.
    Roster(Position),
}

impl fmt::Display for CountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formations => write!(f, "formations"),
            Self::Roster(position) => write!(f, "roster ({position})"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Script file name or other input label.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(line)) => write!(f, "at line {line}"),
            (None, None) => Ok(()),
        }
    }
}
