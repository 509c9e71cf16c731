//! Formation codes.
//!
//! A formation code such as `4-4-2` or `4-2-3-1` fixes how many outfield
//! players each bucket needs: the first line is the defence, the last line is
//! the attack, and every line in between is a midfield layer.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};
use crate::position::Position;
use crate::GOALKEEPERS;

/// A validated formation code of 3 or 4 positive lines.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormationCode {
    lines: Vec<u32>,
}

impl FormationCode {
    /// Fewest lines a formation may have.
    pub const MIN_LINES: usize = 3;
    /// Most lines a formation may have.
    pub const MAX_LINES: usize = 4;

    /// Creates a formation from its lines, back to front.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFormation`] if there are not 3 or 4 lines,
    /// or if any line is zero.
    pub fn new(lines: Vec<u32>) -> Result<Self> {
        if !(Self::MIN_LINES..=Self::MAX_LINES).contains(&lines.len()) {
            return Err(Error::new(ErrorKind::InvalidFormation(format!(
                "expected {} or {} lines, got {}",
                Self::MIN_LINES,
                Self::MAX_LINES,
                lines.len()
            ))));
        }
        if lines.contains(&0) {
            return Err(Error::new(ErrorKind::InvalidFormation(format!(
                "{} has an empty line",
                join(&lines)
            ))));
        }
        Ok(Self { lines })
    }

    /// Returns the lines exactly as written.
    #[must_use]
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Required defenders (first line).
    #[must_use]
    pub fn defenders(&self) -> u32 {
        self.lines[0]
    }

    /// Required attackers (last line).
    #[must_use]
    pub fn attackers(&self) -> u32 {
        self.lines[self.lines.len() - 1]
    }

    /// The midfield layers between defence and attack.
    #[must_use]
    pub fn midfield_layers(&self) -> &[u32] {
        &self.lines[1..self.lines.len() - 1]
    }

    /// Required midfielders: all midfield layers summed into one bucket.
    ///
    /// Summed in `u64` so that any pair of `u32` layers fits.
    #[must_use]
    pub fn midfielders(&self) -> u64 {
        self.midfield_layers().iter().map(|&n| u64::from(n)).sum()
    }

    /// Required players for a bucket.
    #[must_use]
    pub fn required(&self, position: Position) -> u64 {
        match position {
            Position::Goalkeeper => u64::from(GOALKEEPERS),
            Position::Defender => u64::from(self.defenders()),
            Position::Midfielder => self.midfielders(),
            Position::Attacker => u64::from(self.attackers()),
        }
    }
}

fn join(lines: &[u32]) -> String {
    lines
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for FormationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.lines))
    }
}

impl FromStr for FormationCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lines = s
            .split('-')
            .map(|part| {
                part.parse::<u32>().map_err(|e| {
                    Error::new(ErrorKind::InvalidFormation(format!("'{s}': {e}")))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(lines)
    }
}
