//! Core types and errors for the Tatico lineup compiler.
//!
//! This crate provides:
//! - [`Position`] - The four fixed position buckets (GOL, DEF, MEI, ATA)
//! - [`FormationCode`] - Tactical shapes like `4-4-2` or `4-2-3-1`
//! - [`Player`] - A jersey number and display name
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod formation;
pub mod player;
pub mod position;

pub use error::{CountTarget, Error, ErrorContext, ErrorKind, Result};
pub use formation::FormationCode;
pub use player::{JerseyNumber, Player};
pub use position::Position;

/// Number of players a validated team must field.
pub const SQUAD_SIZE: usize = 11;

/// Number of goalkeepers a validated team must field.
pub const GOALKEEPERS: u32 = 1;
