//! Players.

use std::fmt;

use crate::error::{Error, ErrorKind, Result};

/// A shirt number. Must be unique within a team's combined roster.
pub type JerseyNumber = u32;

/// A player listed on a roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    number: JerseyNumber,
    name: String,
}

impl Player {
    /// Creates a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is zero or the name is blank.
    pub fn new(number: JerseyNumber, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if number == 0 {
            return Err(Error::new(ErrorKind::InvalidJerseyNumber(number)));
        }
        if name.trim().is_empty() {
            return Err(Error::new(ErrorKind::EmptyName));
        }
        Ok(Self { number, name })
    }

    /// The jersey number.
    #[must_use]
    pub const fn number(&self) -> JerseyNumber {
        self.number
    }

    /// The display name, possibly several words.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.number, self.name)
    }
}
