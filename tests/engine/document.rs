//! Document integration tests
//!
//! Tests the rendered JSON shape of validated sessions.

use serde_json::{Value, json};
use tatico_engine::{Team, TournamentDocument};
use tatico_foundation::{Player, Position};

fn team(name: &str, formation: &str, players: &[(Position, u32, &str)]) -> Team {
    let mut team = Team::new(name);
    team.assign_formation(formation.parse().unwrap());
    for &(position, number, player) in players {
        team.add_player(position, Player::new(number, player).unwrap());
    }
    team
}

#[test]
fn document_matches_expected_json() {
    let teams = vec![
        team(
            "Fla",
            "4-4-2",
            &[
                (Position::Goalkeeper, 1, "Rossi"),
                (Position::Defender, 2, "Varela"),
                (Position::Attacker, 9, "Pedro"),
            ],
        ),
        team("Flu", "3-4-2-1", &[(Position::Midfielder, 10, "Ganso")]),
    ];

    let doc = TournamentDocument::from_teams(&teams).unwrap();
    let value: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "tournament_data": {
                "total_teams": 2,
                "teams": [
                    {
                        "name": "Fla",
                        "strategy": "4-4-2",
                        "roster": {
                            "GOL": [[1, "Rossi"]],
                            "DEF": [[2, "Varela"]],
                            "MEI": [],
                            "ATA": [[9, "Pedro"]]
                        }
                    },
                    {
                        "name": "Flu",
                        "strategy": "3-4-2-1",
                        "roster": {
                            "GOL": [],
                            "DEF": [],
                            "MEI": [[10, "Ganso"]],
                            "ATA": []
                        }
                    }
                ]
            }
        })
    );
}

#[test]
fn players_keep_insertion_order() {
    let teams = vec![team(
        "Fla",
        "4-4-2",
        &[
            (Position::Defender, 6, "Ayrton Lucas"),
            (Position::Defender, 2, "Varela"),
            (Position::Defender, 4, "Fabricio Bruno"),
        ],
    )];
    let doc = TournamentDocument::from_teams(&teams).unwrap();
    let numbers: Vec<_> = doc.tournament_data.teams[0]
        .roster
        .defenders
        .iter()
        .map(|p| p.0)
        .collect();
    assert_eq!(numbers, vec![6, 2, 4]);
}

#[test]
fn rendering_keeps_accents() {
    let teams = vec![team(
        "Grêmio",
        "4-4-2",
        &[(Position::Goalkeeper, 1, "Marchesín")],
    )];
    let json = TournamentDocument::from_teams(&teams)
        .unwrap()
        .to_json()
        .unwrap();
    assert!(json.contains("\"Grêmio\""));
    assert!(json.contains("Marchesín"));
    assert!(!json.contains("\\u"));
}
