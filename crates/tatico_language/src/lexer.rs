//! Lexer for the lineup language.
//!
//! The lexer converts one command line into a stream of tokens. It never
//! stops on bad input: an illegal character becomes an error token covering
//! exactly that character, and scanning resumes right after it.

use tatico_foundation::{Error, ErrorKind};

use crate::span::Span;
use crate::token::{LexError, Token, TokenKind};

/// Lexer for a single command line.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Line number reported in spans (1-based).
    line: u32,
    /// Current column number (1-based, in characters).
    column: u32,
}

/// Tokens of one line with the lexical diagnostics split out.
///
/// `tokens` holds only well-formed tokens and always ends with
/// [`TokenKind::Eof`], so the parser sees whatever survived the bad
/// characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenStream {
    /// Valid tokens, terminated by `Eof`.
    pub tokens: Vec<Token>,
    /// One diagnostic per error token, in scan order.
    pub errors: Vec<Error>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given line.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Sets the line number reported in spans.
    #[must_use]
    pub const fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Returns the next token from the line.
    ///
    /// Returns [`TokenKind::Eof`] at the end of the text or at the first line
    /// break, and keeps returning it afterwards.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, self.span_from(start, start_column));
        };

        let kind = match c {
            '\n' | '\r' => {
                return Token::new(TokenKind::Eof, self.span_from(start, start_column));
            }
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_name_start(c) => self.scan_name(),
            c => self.single(TokenKind::Error(LexError::IllegalCharacter(c))),
        };

        Token::new(kind, self.span_from(start, start_column))
    }

    /// Tokenizes the whole line, error tokens included.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect_tokens()
    }

    /// Tokenizes the whole line and splits out lexical diagnostics.
    #[must_use]
    pub fn tokenize(source: &str) -> TokenStream {
        Lexer::new(source).into_stream()
    }

    /// Consumes the lexer, producing the valid tokens and the diagnostics.
    #[must_use]
    pub fn into_stream(mut self) -> TokenStream {
        let source = self.source;
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        for token in self.collect_tokens() {
            match token.kind {
                TokenKind::Error(LexError::IllegalCharacter(character)) => {
                    errors.push(Error::illegal_character(
                        character,
                        token.span.line,
                        token.span.column,
                    ));
                }
                TokenKind::Error(LexError::IntegerOutOfRange) => {
                    errors.push(Error::new(ErrorKind::IntegerOutOfRange {
                        literal: token.text(source).to_string(),
                        line: token.span.line,
                        column: token.span.column,
                    }));
                }
                _ => tokens.push(token),
            }
        }

        TokenStream { tokens, errors }
    }

    fn collect_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn span_from(&self, start: usize, start_column: u32) -> Span {
        Span::new(start, self.position, self.line, start_column)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            self.column += 1;
        }
    }

    /// Advances past `len` bytes of ASCII text.
    fn advance_ascii(&mut self, len: usize) {
        self.rest = &self.rest[len..];
        self.position += len;
        self.column += u32::try_from(len).unwrap_or(u32::MAX);
    }

    /// Consumes one character and yields `kind`.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Skips spaces and tabs. Line breaks end the scan instead.
    fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\t')) {
            self.advance();
        }
    }

    /// Scans a formation code or, failing that, an integer.
    ///
    /// The formation pattern wins when 3 or 4 dash-separated digit runs are
    /// present; otherwise only the first digit run is consumed.
    fn scan_number(&mut self) -> TokenKind {
        let rest = self.rest;
        let bytes = rest.as_bytes();
        let first = digit_run(bytes, 0);
        let mut end = first;
        let mut runs = vec![(0, first)];

        while runs.len() < 4 && bytes.get(end) == Some(&b'-') {
            let len = digit_run(bytes, end + 1);
            if len == 0 {
                break;
            }
            runs.push((end + 1, end + 1 + len));
            end += 1 + len;
        }

        if runs.len() < 3 {
            end = first;
            runs.truncate(1);
        }

        let text = &rest[..end];
        let parsed: Option<Vec<u32>> = runs
            .iter()
            .map(|&(from, to)| text[from..to].parse::<u32>().ok())
            .collect();
        self.advance_ascii(end);

        match parsed {
            None => TokenKind::Error(LexError::IntegerOutOfRange),
            Some(lines) if lines.len() == 1 => TokenKind::Int(lines[0]),
            Some(lines) => TokenKind::Formation(lines),
        }
    }

    /// Scans a name fragment and resolves reserved words.
    fn scan_name(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(is_name_char) {
            self.advance();
        }
        let word = &self.source[start..self.position];
        TokenKind::reserved(word).unwrap_or_else(|| TokenKind::Name(word.to_string()))
    }
}

/// Length of the ASCII digit run starting at `from`.
fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Latin-1 letters (`À`..`ÿ`), minus the two arithmetic signs in that block.
///
/// `×` and `÷` are not letters, so they lex as illegal characters rather than
/// as part of a name.
fn is_latin1_letter(c: char) -> bool {
    ('\u{C0}'..='\u{FF}').contains(&c) && c != '×' && c != '÷'
}

/// Returns true if `c` can start a name fragment.
fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || is_latin1_letter(c)
}

/// Returns true if `c` can appear in a name fragment (not at start).
fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}
