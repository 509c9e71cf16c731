//! Teams and their rosters.

use std::collections::BTreeSet;

use tatico_foundation::{FormationCode, JerseyNumber, Player, Position};

/// Players grouped by position bucket, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    buckets: [Vec<Player>; 4],
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the players listed in a bucket.
    #[must_use]
    pub fn get(&self, position: Position) -> &[Player] {
        &self.buckets[position.index()]
    }

    /// Appends a player to a bucket.
    pub fn push(&mut self, position: Position, player: Player) {
        self.buckets[position.index()].push(player);
    }

    /// Number of players in a bucket.
    #[must_use]
    pub fn count(&self, position: Position) -> usize {
        self.get(position).len()
    }

    /// Total players across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns true if no bucket has players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Iterates buckets in GOL, DEF, MEI, ATA order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Player])> {
        Position::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}

/// A team under construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    name: String,
    formation: Option<FormationCode>,
    roster: Roster,
    /// Every jersey number assigned, across buckets, repeats included.
    used_numbers: Vec<JerseyNumber>,
}

impl Team {
    /// Creates a team with no formation and an empty roster.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formation: None,
            roster: Roster::new(),
            used_numbers: Vec::new(),
        }
    }

    /// The team name as declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assigned formation, if any.
    #[must_use]
    pub fn formation(&self) -> Option<&FormationCode> {
        self.formation.as_ref()
    }

    /// The roster built so far.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Jersey numbers in assignment order.
    #[must_use]
    pub fn used_numbers(&self) -> &[JerseyNumber] {
        &self.used_numbers
    }

    /// Sets the formation, replacing any earlier one.
    pub fn assign_formation(&mut self, formation: FormationCode) {
        self.formation = Some(formation);
    }

    /// Appends a player to a bucket and records the number.
    pub fn add_player(&mut self, position: Position, player: Player) {
        self.used_numbers.push(player.number());
        self.roster.push(position, player);
    }

    /// Numbers assigned more than once, ascending.
    #[must_use]
    pub fn duplicate_numbers(&self) -> Vec<JerseyNumber> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for &number in &self.used_numbers {
            if !seen.insert(number) {
                duplicates.insert(number);
            }
        }
        duplicates.into_iter().collect()
    }
}
