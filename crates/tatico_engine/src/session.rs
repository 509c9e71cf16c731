//! Session state.
//!
//! A session holds the teams declared by the last `TIME` command. Per-team
//! commands supply one entry per team, matched by position in the list; a
//! list of the wrong length is rejected before anything is touched.

use std::mem;

use tatico_foundation::{CountTarget, Error, FormationCode, Player, Position, Result};

use crate::team::Team;

/// Ordered teams under construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    teams: Vec<Team>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every team and declares fresh ones, in order.
    pub fn replace_with<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.teams = names.into_iter().map(Team::new).collect();
    }

    /// Discards every team.
    pub fn reset(&mut self) {
        self.teams.clear();
    }

    /// Moves the teams out, leaving the session empty.
    pub fn take(&mut self) -> Vec<Team> {
        mem::take(&mut self.teams)
    }

    /// Number of declared teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Returns true if no team is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// The declared teams, in declaration order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Assigns formation *i* to team *i*.
    ///
    /// # Errors
    /// Returns [`CountMismatch`](tatico_foundation::ErrorKind::CountMismatch)
    /// if the number of codes differs from the number of teams. The session
    /// is left unchanged.
    pub fn assign_formations(&mut self, formations: Vec<FormationCode>) -> Result<()> {
        self.check_count(CountTarget::Formations, formations.len())?;
        for (team, formation) in self.teams.iter_mut().zip(formations) {
            team.assign_formation(formation);
        }
        Ok(())
    }

    /// Appends group *i* to the `position` bucket of team *i*.
    ///
    /// # Errors
    /// Returns [`CountMismatch`](tatico_foundation::ErrorKind::CountMismatch)
    /// if the number of groups differs from the number of teams. The session
    /// is left unchanged.
    pub fn assign_roster(&mut self, position: Position, groups: Vec<Vec<Player>>) -> Result<()> {
        self.check_count(CountTarget::Roster(position), groups.len())?;
        for (team, group) in self.teams.iter_mut().zip(groups) {
            for player in group {
                team.add_player(position, player);
            }
        }
        Ok(())
    }

    fn check_count(&self, target: CountTarget, actual: usize) -> Result<()> {
        if actual == self.teams.len() {
            Ok(())
        } else {
            Err(Error::count_mismatch(target, self.teams.len(), actual))
        }
    }
}
