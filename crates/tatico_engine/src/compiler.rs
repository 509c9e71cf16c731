//! Line-at-a-time compilation.
//!
//! [`LineupCompiler`] owns the session and runs each line through the lexer,
//! the parser, and the command's action. One call to
//! [`process_line`](LineupCompiler::process_line) is the unit of mutation.

use tatico_foundation::{Error, Position, Result};
use tatico_language::{Command, ParsedLine, parse_numbered_line};
use tracing::{debug, info, warn};

use crate::document::TournamentDocument;
use crate::session::Session;
use crate::validate::{ValidationReport, validate};

/// What a successfully executed command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `TIME` replaced the session with these teams.
    TeamsDeclared {
        /// Team names in declaration order.
        names: Vec<String>,
    },
    /// `FORMACAO` set one formation per team.
    FormationsAssigned {
        /// Number of teams updated.
        count: usize,
    },
    /// A bucket command appended players to every team.
    RosterAssigned {
        /// The bucket filled.
        position: Position,
        /// Players added across all teams.
        players: usize,
    },
    /// Every team passed; the session was emitted and cleared.
    Validated(TournamentDocument),
    /// At least one team failed; nothing was emitted and the session was cleared.
    Rejected(ValidationReport),
    /// `VALIDAR` with no declared teams.
    NothingToValidate,
    /// `STOP`.
    Stop,
}

/// Diagnostics and outcome of one line.
#[derive(Debug)]
pub struct LineResult {
    /// Lexical diagnostics, in scan order. These never stop the line.
    pub diagnostics: Vec<Error>,
    /// The command's outcome, or the syntax or semantic error that discarded it.
    pub outcome: Result<Outcome>,
}

impl LineResult {
    /// Returns true if the line was `STOP`.
    #[must_use]
    pub fn is_stop(&self) -> bool {
        matches!(self.outcome, Ok(Outcome::Stop))
    }
}

/// Compiles lineup commands against an owned session.
#[derive(Debug, Default)]
pub struct LineupCompiler {
    session: Session,
}

impl LineupCompiler {
    /// Creates a compiler with an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Processes one line.
    pub fn process_line(&mut self, line: &str) -> LineResult {
        self.process_line_at(line, 1)
    }

    /// Processes one line, reporting diagnostic positions on `line_number`.
    pub fn process_line_at(&mut self, line: &str, line_number: u32) -> LineResult {
        let ParsedLine {
            diagnostics,
            command,
        } = parse_numbered_line(line, line_number);
        for diagnostic in &diagnostics {
            warn!(line = line_number, %diagnostic, "lexical error");
        }
        let outcome = command.and_then(|command| self.execute(command));
        LineResult {
            diagnostics,
            outcome,
        }
    }

    /// Applies a parsed command to the session.
    ///
    /// # Errors
    /// Returns a count mismatch if a per-team list does not match the number
    /// of declared teams, or an internal error if document rendering fails.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(command = command.keyword(), teams = self.session.team_count(), "execute");
        match command {
            Command::DeclareTeams(names) => {
                info!(count = names.len(), "declaring teams");
                self.session.replace_with(names.iter().cloned());
                Ok(Outcome::TeamsDeclared { names })
            }
            Command::AssignFormations(formations) => {
                let count = formations.len();
                self.session
                    .assign_formations(formations)
                    .inspect_err(|e| warn!(error = %e, "formations rejected"))?;
                Ok(Outcome::FormationsAssigned { count })
            }
            Command::AssignRoster { position, groups } => {
                let players = groups.iter().map(Vec::len).sum();
                self.session
                    .assign_roster(position, groups)
                    .inspect_err(|e| warn!(error = %e, "roster rejected"))?;
                Ok(Outcome::RosterAssigned { position, players })
            }
            Command::Validate => self.validate_session(),
            Command::Stop => Ok(Outcome::Stop),
        }
    }

    /// Validates and clears the session.
    fn validate_session(&mut self) -> Result<Outcome> {
        let teams = self.session.take();
        if teams.is_empty() {
            warn!("nothing to validate");
            return Ok(Outcome::NothingToValidate);
        }

        let report = validate(&teams);
        if report.is_success() {
            info!(teams = teams.len(), "validation passed");
            Ok(Outcome::Validated(TournamentDocument::from_teams(&teams)?))
        } else {
            info!(
                teams = teams.len(),
                violations = report.violation_count(),
                "validation failed"
            );
            Ok(Outcome::Rejected(report))
        }
    }
}
