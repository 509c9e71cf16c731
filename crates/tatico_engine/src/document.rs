//! The structured translation of a validated session.
//!
//! Field order in these structs is the key order of the rendered document.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tatico_foundation::{Error, ErrorKind, JerseyNumber, Player, Position, Result};

use crate::team::{Roster, Team};

/// Top-level document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentDocument {
    /// Every team of the session.
    pub tournament_data: TournamentData,
}

/// Team count plus the teams themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentData {
    /// Number of entries in `teams`.
    pub total_teams: usize,
    /// Teams in declaration order.
    pub teams: Vec<TeamRecord>,
}

/// One validated team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Team name as declared.
    pub name: String,
    /// Formation code as written, e.g. `4-2-3-1`.
    pub strategy: String,
    /// Players by bucket.
    pub roster: RosterRecord,
}

/// Players by bucket, in GOL, DEF, MEI, ATA order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// `GOL`
    #[serde(rename = "GOL")]
    pub goalkeepers: Vec<PlayerEntry>,
    /// `DEF`
    #[serde(rename = "DEF")]
    pub defenders: Vec<PlayerEntry>,
    /// `MEI`
    #[serde(rename = "MEI")]
    pub midfielders: Vec<PlayerEntry>,
    /// `ATA`
    #[serde(rename = "ATA")]
    pub attackers: Vec<PlayerEntry>,
}

/// A `[number, name]` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry(pub JerseyNumber, pub String);

impl From<&Player> for PlayerEntry {
    fn from(player: &Player) -> Self {
        Self(player.number(), player.name().to_string())
    }
}

impl RosterRecord {
    fn bucket_mut(&mut self, position: Position) -> &mut Vec<PlayerEntry> {
        match position {
            Position::Goalkeeper => &mut self.goalkeepers,
            Position::Defender => &mut self.defenders,
            Position::Midfielder => &mut self.midfielders,
            Position::Attacker => &mut self.attackers,
        }
    }
}

impl From<&Roster> for RosterRecord {
    fn from(roster: &Roster) -> Self {
        let mut record = Self::default();
        for (position, players) in roster.iter() {
            record
                .bucket_mut(position)
                .extend(players.iter().map(PlayerEntry::from));
        }
        record
    }
}

impl TeamRecord {
    /// Builds the record for one team.
    ///
    /// # Errors
    /// Returns an internal error if the team has no formation; only
    /// validated teams are rendered.
    pub fn from_team(team: &Team) -> Result<Self> {
        let formation = team.formation().ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "team '{}' rendered without a formation",
                team.name()
            )))
        })?;
        Ok(Self {
            name: team.name().to_string(),
            strategy: formation.to_string(),
            roster: RosterRecord::from(team.roster()),
        })
    }
}

impl TournamentDocument {
    /// Builds the document for a validated session.
    ///
    /// # Errors
    /// Returns an internal error if any team has no formation.
    pub fn from_teams(teams: &[Team]) -> Result<Self> {
        let teams = teams
            .iter()
            .map(TeamRecord::from_team)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            tournament_data: TournamentData {
                total_teams: teams.len(),
                teams,
            },
        })
    }

    /// Renders pretty JSON with a four-space indent.
    ///
    /// # Errors
    /// Returns a serialization error if rendering fails.
    pub fn to_json(&self) -> Result<String> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer).map_err(serialization_error)?;
        String::from_utf8(out).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }

    /// Parses a document previously rendered as JSON.
    ///
    /// # Errors
    /// Returns a serialization error if the text is not a valid document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(serialization_error)
    }
}

#[allow(clippy::needless_pass_by_value)]
fn serialization_error(e: serde_json::Error) -> Error {
    Error::new(ErrorKind::Serialization(e.to_string()))
}
