//! Session state integration tests
//!
//! Tests positional assignment and the all-or-nothing count check.

use tatico_engine::Session;
use tatico_foundation::{CountTarget, ErrorKind, FormationCode, Player, Position};

fn formations(codes: &[&str]) -> Vec<FormationCode> {
    codes.iter().map(|c| c.parse().unwrap()).collect()
}

fn group(players: &[(u32, &str)]) -> Vec<Player> {
    players
        .iter()
        .map(|&(n, name)| Player::new(n, name).unwrap())
        .collect()
}

#[test]
fn declare_creates_empty_teams_in_order() {
    let mut session = Session::new();
    session.replace_with(["Fla", "Flu", "Vasco"]);

    let names: Vec<_> = session.teams().iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Fla", "Flu", "Vasco"]);
    assert!(
        session
            .teams()
            .iter()
            .all(|t| t.formation().is_none() && t.roster().is_empty())
    );
}

#[test]
fn groups_go_to_matching_team() {
    let mut session = Session::new();
    session.replace_with(["Fla", "Flu"]);
    session
        .assign_roster(
            Position::Midfielder,
            vec![
                group(&[(8, "Gerson")]),
                group(&[(10, "Ganso"), (11, "Arias")]),
            ],
        )
        .unwrap();

    assert_eq!(session.teams()[0].roster().count(Position::Midfielder), 1);
    assert_eq!(session.teams()[1].roster().count(Position::Midfielder), 2);
    assert_eq!(
        session.teams()[1].roster().get(Position::Midfielder)[1].name(),
        "Arias"
    );
}

#[test]
fn too_many_groups_rejected() {
    let mut session = Session::new();
    session.replace_with(["Fla"]);
    let err = session
        .assign_roster(
            Position::Goalkeeper,
            vec![group(&[(1, "Rossi")]), group(&[(1, "Fabio")])],
        )
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::CountMismatch {
            target: CountTarget::Roster(Position::Goalkeeper),
            expected: 1,
            actual: 2,
        }
    );
    assert!(session.teams()[0].roster().is_empty());
    assert!(session.teams()[0].used_numbers().is_empty());
}

#[test]
fn formation_mismatch_keeps_earlier_formations() {
    let mut session = Session::new();
    session.replace_with(["Fla", "Flu"]);
    session
        .assign_formations(formations(&["4-4-2", "4-3-3"]))
        .unwrap();
    assert!(
        session
            .assign_formations(formations(&["3-5-2", "3-5-2", "3-5-2"]))
            .is_err()
    );

    assert_eq!(session.teams()[0].formation().unwrap().to_string(), "4-4-2");
    assert_eq!(session.teams()[1].formation().unwrap().to_string(), "4-3-3");
}

#[test]
fn redeclaring_discards_everything() {
    let mut session = Session::new();
    session.replace_with(["Fla"]);
    session
        .assign_roster(Position::Goalkeeper, vec![group(&[(1, "Rossi")])])
        .unwrap();

    session.replace_with(["Fla"]);
    assert!(session.teams()[0].roster().is_empty());
}
