//! Parsed commands.
//!
//! Each command line parses into exactly one [`Command`]. Per-team lists keep
//! the order they were written in; entry *i* belongs to the *i*-th declared
//! team.

use std::fmt;

use tatico_foundation::{FormationCode, Player, Position};

/// One command of the lineup language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `TIME Fla ; Flu`
    DeclareTeams(Vec<String>),
    /// `FORMACAO 4-4-2 ; 4-3-3`
    AssignFormations(Vec<FormationCode>),
    /// `DEF: 2(Varela), 3(Leo) ; 2(Samuel)`
    AssignRoster {
        /// The bucket being filled.
        position: Position,
        /// One player list per team.
        groups: Vec<Vec<Player>>,
    },
    /// `VALIDAR`
    Validate,
    /// `STOP`
    Stop,
}

impl Command {
    /// The keyword (or bucket code) that introduces this command.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::DeclareTeams(_) => "TIME",
            Self::AssignFormations(_) => "FORMACAO",
            Self::AssignRoster { position, .. } => position.code(),
            Self::Validate => "VALIDAR",
            Self::Stop => "STOP",
        }
    }
}

fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Renders the command back into source form.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeclareTeams(names) => {
                f.write_str("TIME ")?;
                write_separated(f, names, " ; ")
            }
            Self::AssignFormations(codes) => {
                f.write_str("FORMACAO ")?;
                write_separated(f, codes, " ; ")
            }
            Self::AssignRoster { position, groups } => {
                write!(f, "{position}: ")?;
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ; ")?;
                    }
                    write_separated(f, group, ", ")?;
                }
                Ok(())
            }
            Self::Validate => f.write_str("VALIDAR"),
            Self::Stop => f.write_str("STOP"),
        }
    }
}
