//! Session state, validation, and document output for Tatico.
//!
//! This crate provides:
//! - [`Session`] - Teams under construction between `TIME` and `VALIDAR`
//! - [`validate`] - Squad composition checks against each team's formation
//! - [`TournamentDocument`] - The structured translation of a valid session
//! - [`LineupCompiler`] - Line in, diagnostics and outcome out

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compiler;
pub mod document;
pub mod session;
pub mod team;
pub mod validate;

pub use compiler::{LineResult, LineupCompiler, Outcome};
pub use document::{PlayerEntry, RosterRecord, TeamRecord, TournamentData, TournamentDocument};
pub use session::Session;
pub use team::{Roster, Team};
pub use validate::{TeamReport, ValidationReport, Violation, validate, validate_team};
