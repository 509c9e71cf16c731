//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tatico_engine::{LineResult, LineupCompiler, Outcome, TournamentDocument};
use tatico_foundation::{Error, ErrorContext, ErrorKind, Result};
use tracing::debug;

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::export::Exporter;

/// Whether to keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// `STOP` was seen.
    Stop,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session owner.
    compiler: LineupCompiler,

    /// Writes emitted documents, when an export directory is configured.
    exporter: Option<Exporter>,

    /// The most recent document emitted by `VALIDAR`.
    last_document: Option<TournamentDocument>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, config: RuntimeConfig) -> Self {
        let exporter = config
            .export_dir
            .map(|dir| Exporter::new(dir, config.export_format));
        Self {
            editor,
            compiler: LineupCompiler::new(),
            exporter,
            last_document: None,
            show_banner: config.show_banner,
            prompt: config.prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the compiler and its session.
    #[must_use]
    pub const fn compiler(&self) -> &LineupCompiler {
        &self.compiler
    }

    /// The most recent document emitted by `VALIDAR`, if any.
    #[must_use]
    pub const fn last_document(&self) -> Option<&TournamentDocument> {
        self.last_document.as_ref()
    }

    /// Runs the REPL loop until `STOP` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    if self.eval_line(&line) == Flow::Stop {
                        break;
                    }
                }
                ReadResult::Interrupted => println!(),
                ReadResult::Eof => break,
            }
        }

        println!("\nShutting down the compiler. Goodbye!");
        Ok(())
    }

    /// Evaluates one line and prints what happened.
    pub fn eval_line(&mut self, line: &str) -> Flow {
        let result = self.compiler.process_line(line);
        self.report(result, None)
    }

    /// Evaluates a script, one command per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Diagnostics are
    /// tagged with `label` and the line number. Evaluation ends at `STOP`.
    pub fn eval_source(&mut self, source: &str, label: &str) -> Flow {
        for (index, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let number = index + 1;
            debug!(source = label, line = number, "script line");
            let result = self
                .compiler
                .process_line_at(line, u32::try_from(number).unwrap_or(u32::MAX));
            let context = ErrorContext::new().with_source(label).with_line(number);
            if self.report(result, Some(&context)) == Flow::Stop {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    /// Evaluates a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> Result<Flow> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;
        Ok(self.eval_source(&source, &path.display().to_string()))
    }

    /// Prints diagnostics and the outcome of one line.
    fn report(&mut self, result: LineResult, context: Option<&ErrorContext>) -> Flow {
        let LineResult {
            diagnostics,
            outcome,
        } = result;
        for diagnostic in diagnostics {
            Self::print_error(&with_context(diagnostic, context));
        }
        match outcome {
            Ok(outcome) => self.print_outcome(outcome),
            Err(e) => {
                Self::print_error(&with_context(e, context));
                Flow::Continue
            }
        }
    }

    fn print_outcome(&mut self, outcome: Outcome) -> Flow {
        match outcome {
            Outcome::TeamsDeclared { names } => {
                println!("-> {} team(s) declared: {}", names.len(), names.join(", "));
            }
            Outcome::FormationsAssigned { count } => {
                println!("-> formations assigned to {count} team(s)");
            }
            Outcome::RosterAssigned { position, players } => {
                println!("-> {position}: {players} player(s) listed");
            }
            Outcome::Validated(document) => {
                println!("\x1b[1;32mValidation OK.\x1b[0m Translated output:\n");
                match document.to_json() {
                    Ok(json) => println!("{json}"),
                    Err(e) => Self::print_error(&e),
                }
                self.export(&document);
                self.last_document = Some(document);
            }
            Outcome::Rejected(report) => {
                println!("\x1b[1;31mValidation failed:\x1b[0m");
                for message in report.messages() {
                    println!("  [X] {message}");
                }
                println!("No output generated. Fix the errors above.");
            }
            Outcome::NothingToValidate => {
                println!("\x1b[33mWarning: no teams to validate.\x1b[0m");
            }
            Outcome::Stop => {
                return Flow::Stop;
            }
        }
        let _ = io::stdout().flush();
        Flow::Continue
    }

    fn export(&mut self, document: &TournamentDocument) {
        if let Some(exporter) = &mut self.exporter {
            match exporter.export(document) {
                Ok(path) => println!("-> written to {}", path.display()),
                Err(e) => Self::print_error(&e),
            }
        }
    }

    /// Prints an error to stderr.
    fn print_error(error: &Error) {
        let (color, label) = error_style(error);
        match &error.context {
            Some(context) => eprintln!("\x1b[{color}m{label} {context}: {error}\x1b[0m"),
            None => eprintln!("\x1b[{color}m{label}: {error}\x1b[0m"),
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mTatico v{}\x1b[0m - lineup compiler", env!("CARGO_PKG_VERSION"));
        println!("Syntax: TEAM_1_DATA ; TEAM_2_DATA ; ...");
        println!("Commands: TIME, FORMACAO, GOL:, DEF:, MEI:, ATA:, VALIDAR, STOP\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}

/// ANSI color and label for a diagnostic.
///
/// Lexical diagnostics are warnings: the rest of the line still runs.
fn error_style(error: &Error) -> (&'static str, &'static str) {
    if error.is_lexical() {
        ("33", "Lexical error")
    } else {
        ("31", "Error")
    }
}

fn with_context(error: Error, context: Option<&ErrorContext>) -> Error {
    match context {
        Some(context) => error.with_context(context.clone()),
        None => error,
    }
}
