//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tatico_foundation::{CountTarget, Error, ErrorContext, ErrorKind, Position};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_illegal_character() {
    let err = Error::illegal_character('@', 1, 9);
    assert!(err.is_lexical());
    let msg = format!("{err}");
    assert!(msg.contains('@'));
    assert!(msg.contains("1:9"));
}

#[test]
fn error_syntax_with_token() {
    let err = Error::syntax(Some("VALIDAR".into()), "a name", 1, 6);
    assert!(!err.is_lexical());
    assert_eq!(
        format!("{err}"),
        "syntax error at 1:6: unexpected token 'VALIDAR', expected a name"
    );
}

#[test]
fn error_syntax_at_end() {
    let err = Error::syntax(None, "')'", 3, 14);
    assert!(format!("{err}").contains("unexpected end of input"));
}

#[test]
fn error_count_mismatch() {
    let err = Error::count_mismatch(CountTarget::Roster(Position::Midfielder), 3, 2);
    assert!(matches!(
        err.kind,
        ErrorKind::CountMismatch {
            expected: 3,
            actual: 2,
            ..
        }
    ));
    assert_eq!(
        format!("{err}"),
        "roster (MEI): 3 team(s) declared, but 2 given"
    );
}

#[test]
fn error_integer_out_of_range_is_lexical() {
    let err = Error::new(ErrorKind::IntegerOutOfRange {
        literal: "99999999999".into(),
        line: 1,
        column: 6,
    });
    assert!(err.is_lexical());
    assert!(format!("{err}").contains("99999999999"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_attached() {
    let context = ErrorContext::new().with_source("squad.tat").with_line(4);
    let err = Error::syntax(None, "a command", 4, 1).with_context(context.clone());
    assert_eq!(err.context, Some(context));
    assert_eq!(err.context.unwrap().to_string(), "at squad.tat:4");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::new(ErrorKind::EmptyName));
}
