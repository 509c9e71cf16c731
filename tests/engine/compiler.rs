//! Line compiler integration tests
//!
//! Tests the full line path: lex, parse, execute.

use tatico_engine::{LineupCompiler, Outcome, Violation};
use tatico_foundation::{ErrorKind, Position};

fn feed(compiler: &mut LineupCompiler, lines: &[&str]) {
    for line in lines {
        let result = compiler.process_line(line);
        assert!(result.outcome.is_ok(), "{line}: {:?}", result.outcome);
    }
}

#[test]
fn formation_count_mismatch_then_validate() {
    let mut compiler = LineupCompiler::new();
    feed(&mut compiler, &["TIME Fla ; Flu ; Vasco"]);

    let err = compiler
        .process_line("FORMACAO 4-4-2 ; 4-3-3")
        .outcome
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::CountMismatch {
            expected: 3,
            actual: 2,
            ..
        }
    ));

    let Ok(Outcome::Rejected(report)) = compiler.process_line("VALIDAR").outcome else {
        panic!("expected rejection");
    };
    assert_eq!(report.teams.len(), 3);
    assert!(
        report
            .teams
            .iter()
            .all(|t| t.violations == vec![Violation::FormationUndefined])
    );
}

#[test]
fn huge_midfield_layers_are_reported_not_overflowed() {
    let mut compiler = LineupCompiler::new();
    feed(
        &mut compiler,
        &["TIME Fla", "FORMACAO 1-4294967295-4294967295-1"],
    );

    let Ok(Outcome::Rejected(report)) = compiler.process_line("VALIDAR").outcome else {
        panic!("expected rejection");
    };
    let midfield = report.teams[0]
        .violations
        .iter()
        .find_map(|v| match v {
            Violation::PositionCount {
                position: Position::Midfielder,
                required,
                ..
            } => Some(*required),
            _ => None,
        });
    assert_eq!(midfield, Some(8_589_934_590));
    assert!(
        report
            .messages()
            .iter()
            .any(|m| m.contains("needs 8589934590 (4294967295+4294967295)"))
    );
}

#[test]
fn session_empty_after_any_validate() {
    let mut compiler = LineupCompiler::new();
    feed(&mut compiler, &["TIME Fla", "VALIDAR"]);
    assert_eq!(compiler.session().team_count(), 0);

    feed(&mut compiler, &["TIME Flu"]);
    assert_eq!(compiler.session().team_count(), 1);
    assert!(compiler.session().teams()[0].formation().is_none());
}

#[test]
fn second_validate_has_nothing() {
    let mut compiler = LineupCompiler::new();
    feed(&mut compiler, &["TIME Fla", "VALIDAR"]);
    assert_eq!(
        compiler.process_line("VALIDAR").outcome.unwrap(),
        Outcome::NothingToValidate
    );
}

#[test]
fn repeated_bucket_commands_accumulate() {
    let mut compiler = LineupCompiler::new();
    feed(
        &mut compiler,
        &[
            "TIME Fla",
            "FORMACAO 4-4-2",
            "GOL: 1(Rossi)",
            "DEF: 2(Varela), 3(Leo Pereira)",
            "DEF: 4(Fabricio Bruno), 6(Ayrton Lucas)",
            "MEI: 5(Pulgar), 8(Gerson)",
            "MEI: 10(Arrascaeta), 7(Everton)",
            "ATA: 9(Pedro)",
            "ATA: 11(Bruno Henrique)",
        ],
    );
    assert!(matches!(
        compiler.process_line("VALIDAR").outcome,
        Ok(Outcome::Validated(_))
    ));
}

#[test]
fn bad_line_does_not_touch_session() {
    let mut compiler = LineupCompiler::new();
    feed(&mut compiler, &["TIME Fla", "FORMACAO 4-4-2"]);
    let before = compiler.session().clone();

    for line in ["GOL: 1(Rossi", "FORMACAO 4-4", "DEF 2(Varela)", "TIME"] {
        assert!(compiler.process_line(line).outcome.is_err(), "{line}");
    }
    assert_eq!(compiler.session(), &before);
}

#[test]
fn stop_reported() {
    let mut compiler = LineupCompiler::new();
    let result = compiler.process_line("STOP");
    assert!(result.is_stop());
    assert!(result.diagnostics.is_empty());
}
