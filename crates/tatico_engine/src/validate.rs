//! Squad validation.
//!
//! Each team is checked on its own against the requirements its formation
//! implies. Every failed check is collected; nothing short-circuits except a
//! missing formation, which makes the other checks meaningless.

use std::fmt;

use tatico_foundation::{FormationCode, JerseyNumber, Position, SQUAD_SIZE};

use crate::team::Team;

// =============================================================================
// Violations
// =============================================================================

/// One failed squad check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// No `FORMACAO` reached this team.
    FormationUndefined,
    /// A bucket holds the wrong number of players.
    PositionCount {
        /// The bucket checked.
        position: Position,
        /// Players the formation calls for.
        required: u64,
        /// Players listed.
        actual: usize,
        /// Midfield layers behind `required`, when there is more than one.
        layers: Vec<u32>,
    },
    /// The roster does not add up to a full squad.
    TotalCount {
        /// Players listed across all buckets.
        actual: usize,
    },
    /// Jersey numbers used more than once, ascending.
    DuplicateNumbers {
        /// The repeated numbers.
        numbers: Vec<JerseyNumber>,
    },
}

impl Violation {
    /// The bucket or rule tag shown next to the team name, if any.
    #[must_use]
    pub const fn tag(&self) -> Option<&'static str> {
        match self {
            Self::FormationUndefined | Self::DuplicateNumbers { .. } => None,
            Self::PositionCount { position, .. } => Some(position.code()),
            Self::TotalCount { .. } => Some("TOTAL"),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormationUndefined => f.write_str("formation undefined"),
            Self::PositionCount {
                required,
                actual,
                layers,
                ..
            } => {
                write!(f, "has {actual}, needs {required}")?;
                if layers.len() > 1 {
                    let parts: Vec<String> = layers.iter().map(u32::to_string).collect();
                    write!(f, " ({})", parts.join("+"))?;
                }
                Ok(())
            }
            Self::TotalCount { actual } => {
                write!(f, "has {actual} players, needs {SQUAD_SIZE}")
            }
            Self::DuplicateNumbers { numbers } => {
                let parts: Vec<String> = numbers.iter().map(u32::to_string).collect();
                write!(f, "duplicate jersey numbers {}", parts.join(", "))
            }
        }
    }
}

// =============================================================================
// Reports
// =============================================================================

/// The outcome of checking one team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamReport {
    /// The team name.
    pub team: String,
    /// Failed checks, in check order. Empty when the team is valid.
    pub violations: Vec<Violation>,
}

impl TeamReport {
    /// Returns true if the team passed every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations tagged with the team name, e.g. `Flu (TOTAL): has 12 players, needs 11`.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.violations.iter().map(|v| match v.tag() {
            Some(tag) => format!("{} ({tag}): {v}", self.team),
            None => format!("{}: {v}", self.team),
        })
    }
}

/// The outcome of checking a whole session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// One report per team, in declaration order, clean teams included.
    pub teams: Vec<TeamReport>,
}

impl ValidationReport {
    /// Returns true if every team passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.teams.iter().all(TeamReport::is_valid)
    }

    /// Total number of violations across teams.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.teams.iter().map(|t| t.violations.len()).sum()
    }

    /// All violations, team-tagged, in team order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.teams.iter().flat_map(|t| t.messages()).collect()
    }
}

// =============================================================================
// Checks
// =============================================================================

/// Checks one team against its formation.
#[must_use]
pub fn validate_team(team: &Team) -> TeamReport {
    let violations = match team.formation() {
        None => vec![Violation::FormationUndefined],
        Some(formation) => squad_violations(team, formation),
    };
    TeamReport {
        team: team.name().to_string(),
        violations,
    }
}

/// Checks every team. Success requires all teams to pass.
#[must_use]
pub fn validate(teams: &[Team]) -> ValidationReport {
    ValidationReport {
        teams: teams.iter().map(validate_team).collect(),
    }
}

fn squad_violations(team: &Team, formation: &FormationCode) -> Vec<Violation> {
    let roster = team.roster();
    let mut violations = Vec::new();

    for position in Position::ALL {
        let required = formation.required(position);
        let actual = roster.count(position);
        if u64::try_from(actual).ok() != Some(required) {
            let layers = if position == Position::Midfielder {
                formation.midfield_layers().to_vec()
            } else {
                Vec::new()
            };
            violations.push(Violation::PositionCount {
                position,
                required,
                actual,
                layers,
            });
        }
    }

    let total = roster.len();
    if total != SQUAD_SIZE {
        violations.push(Violation::TotalCount { actual: total });
    }

    let duplicates = team.duplicate_numbers();
    if !duplicates.is_empty() {
        violations.push(Violation::DuplicateNumbers {
            numbers: duplicates,
        });
    }

    violations
}
