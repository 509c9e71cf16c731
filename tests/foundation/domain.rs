//! Integration tests for the domain types
//!
//! Tests positions, formation codes, and players.

use tatico_foundation::{ErrorKind, FormationCode, Player, Position, SQUAD_SIZE};

// =============================================================================
// Positions
// =============================================================================

#[test]
fn positions_in_roster_order() {
    let codes: Vec<_> = Position::ALL.iter().map(|p| p.code()).collect();
    assert_eq!(codes, vec!["GOL", "DEF", "MEI", "ATA"]);
}

#[test]
fn position_parse_rejects_lowercase() {
    assert_eq!("ATA".parse::<Position>().unwrap(), Position::Attacker);
    let err = "ata".parse::<Position>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownPosition("ata".into()));
}

// =============================================================================
// Formation Codes
// =============================================================================

#[test]
fn formation_requirements_fill_a_squad() {
    for code in ["4-4-2", "4-3-3", "3-5-2", "5-3-2", "4-2-3-1", "4-1-2-3", "3-4-2-1"] {
        let formation: FormationCode = code.parse().unwrap();
        let outfield: u64 = Position::ALL.iter().map(|&p| formation.required(p)).sum();
        assert_eq!(usize::try_from(outfield).unwrap(), SQUAD_SIZE, "{code}");
        assert_eq!(formation.to_string(), code);
    }
}

#[test]
fn formation_collapses_midfield_layers() {
    let formation: FormationCode = "4-2-3-1".parse().unwrap();
    assert_eq!(formation.defenders(), 4);
    assert_eq!(formation.midfield_layers(), &[2, 3]);
    assert_eq!(formation.midfielders(), 5);
    assert_eq!(formation.attackers(), 1);
}

#[test]
fn formation_shape_enforced() {
    assert!(FormationCode::new(vec![4, 4]).is_err());
    assert!(FormationCode::new(vec![4, 1, 2, 2, 1]).is_err());
    assert!(FormationCode::new(vec![4, 0, 6]).is_err());
    assert!(matches!(
        FormationCode::new(vec![]).unwrap_err().kind,
        ErrorKind::InvalidFormation(_)
    ));
}

// =============================================================================
// Players
// =============================================================================

#[test]
fn player_keeps_compound_name() {
    let p = Player::new(11, "Bruno Henrique").unwrap();
    assert_eq!(p.name(), "Bruno Henrique");
    assert_eq!(p.to_string(), "11(Bruno Henrique)");
}

#[test]
fn player_rejects_zero_and_blank() {
    assert_eq!(
        Player::new(0, "Rossi").unwrap_err().kind,
        ErrorKind::InvalidJerseyNumber(0)
    );
    assert_eq!(Player::new(1, "  ").unwrap_err().kind, ErrorKind::EmptyName);
}
