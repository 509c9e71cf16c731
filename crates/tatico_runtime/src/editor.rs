//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while tests feed scripted input.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use tatico_foundation::{Error, ErrorKind, Result};

use crate::highlight::TaticoHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Reserved words offered by tab completion.
pub const KEYWORDS: [&str; 8] = [
    "TIME", "FORMACAO", "GOL", "DEF", "MEI", "ATA", "VALIDAR", "STOP",
];

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct TaticoHelper {
    #[rustyline(Completer)]
    completer: KeywordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: TaticoHighlighter,
}

impl Highlighter for TaticoHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for the reserved words.
#[derive(Debug, Default)]
pub struct KeywordCompleter;

impl KeywordCompleter {
    /// Keywords starting with `word`, case-sensitive.
    #[must_use]
    pub fn candidates(word: &str) -> Vec<&'static str> {
        KEYWORDS
            .iter()
            .copied()
            .filter(|kw| kw.starts_with(word))
            .collect()
    }

    /// Byte offset where the word under the cursor starts.
    #[must_use]
    pub fn word_start(line: &str, pos: usize) -> usize {
        line[..pos]
            .rfind(|c: char| c.is_whitespace() || ";:,()".contains(c))
            .map_or(0, |i| i + 1)
    }
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = Self::word_start(line, pos);
        let candidates = Self::candidates(&line[start..pos])
            .into_iter()
            .map(|kw| Pair {
                display: kw.to_string(),
                replacement: kw.to_string(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<TaticoHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor keeping `history_size` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the history size is invalid or rustyline
    /// initialization fails.
    pub fn new(history_size: usize) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(history_size)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = TaticoHelper {
            completer: KeywordCompleter,
            hinter: HistoryHinter::new(),
            highlighter: TaticoHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Io(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
