//! Position buckets.
//!
//! Every player is listed under exactly one of four fixed buckets. The bucket
//! codes are the reserved words of the lineup language.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// A position bucket on the pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    /// `GOL`
    Goalkeeper,
    /// `DEF`
    Defender,
    /// `MEI`
    Midfielder,
    /// `ATA`
    Attacker,
}

impl Position {
    /// All buckets, in roster order.
    pub const ALL: [Self; 4] = [
        Self::Goalkeeper,
        Self::Defender,
        Self::Midfielder,
        Self::Attacker,
    ];

    /// Returns the bucket code as written in source.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Goalkeeper => "GOL",
            Self::Defender => "DEF",
            Self::Midfielder => "MEI",
            Self::Attacker => "ATA",
        }
    }

    /// Looks up a bucket by its exact code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GOL" => Some(Self::Goalkeeper),
            "DEF" => Some(Self::Defender),
            "MEI" => Some(Self::Midfielder),
            "ATA" => Some(Self::Attacker),
            _ => None,
        }
    }

    /// Returns the slot of this bucket in [`Position::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::new(ErrorKind::UnknownPosition(s.to_string())))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
