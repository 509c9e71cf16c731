//! Integration tests for the lexer
//!
//! Tests tokenization of lineup command lines.

use tatico_foundation::{ErrorKind, Position};
use tatico_language::{LexError, Lexer, TokenKind};

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_team_declaration() {
    let tokens = Lexer::tokenize_all("TIME Sao Paulo ; Fla");
    assert_eq!(tokens.len(), 6); // TIME Sao Paulo ; Fla eof
    assert!(matches!(tokens[0].kind, TokenKind::Time));
    assert!(matches!(&tokens[1].kind, TokenKind::Name(n) if n == "Sao"));
    assert!(matches!(&tokens[2].kind, TokenKind::Name(n) if n == "Paulo"));
    assert!(matches!(tokens[3].kind, TokenKind::Semicolon));
    assert!(matches!(tokens[5].kind, TokenKind::Eof));
}

#[test]
fn tokenize_roster_line() {
    let tokens = Lexer::tokenize_all("MEI: 8(Gerson),10(Arrascaeta)");
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Position(Position::Midfielder),
            TokenKind::Colon,
            TokenKind::Int(8),
            TokenKind::LParen,
            TokenKind::Name("Gerson".into()),
            TokenKind::RParen,
            TokenKind::Comma,
            TokenKind::Int(10),
            TokenKind::LParen,
            TokenKind::Name("Arrascaeta".into()),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_formations() {
    let tokens = Lexer::tokenize_all("FORMACAO 4-4-2 ; 3-4-2-1");
    assert!(matches!(&tokens[1].kind, TokenKind::Formation(l) if l == &[4, 4, 2]));
    assert!(matches!(&tokens[3].kind, TokenKind::Formation(l) if l == &[3, 4, 2, 1]));
}

#[test]
fn tokenize_keyword_prefix_is_a_name() {
    let tokens = Lexer::tokenize_all("TIMES GOLEIRO");
    assert!(matches!(&tokens[0].kind, TokenKind::Name(n) if n == "TIMES"));
    assert!(matches!(&tokens[1].kind, TokenKind::Name(n) if n == "GOLEIRO"));
}

#[test]
fn tokenize_latin1_names() {
    let tokens = Lexer::tokenize_all("Grêmio Atlético-MG Ñublense");
    assert!(matches!(&tokens[0].kind, TokenKind::Name(n) if n == "Grêmio"));
    assert!(matches!(&tokens[1].kind, TokenKind::Name(n) if n == "Atlético-MG"));
    assert!(matches!(&tokens[2].kind, TokenKind::Name(n) if n == "Ñublense"));
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_track_columns_in_characters() {
    let source = "TIME Grêmio ; Inter";
    let tokens = Lexer::tokenize_all(source);
    assert_eq!(tokens[1].span.column, 6);
    assert_eq!(tokens[1].text(source), "Grêmio");
    // 'ê' is two bytes but one column
    assert_eq!(tokens[2].span.column, 13);
    assert_eq!(tokens[3].span.column, 15);
}

#[test]
fn line_number_applied_to_spans() {
    let tokens = Lexer::new("VALIDAR").with_line(42).into_stream().tokens;
    assert!(tokens.iter().all(|t| t.span.line == 42));
}

#[test]
fn newline_ends_the_line() {
    let tokens = Lexer::tokenize_all("TIME Fla\nTIME Flu");
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[2].kind, TokenKind::Eof));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn illegal_character_skipped() {
    let stream = Lexer::tokenize("TIME Fla@ ; Flu");
    assert_eq!(stream.errors.len(), 1);
    assert_eq!(
        stream.errors[0].kind,
        ErrorKind::IllegalCharacter {
            character: '@',
            line: 1,
            column: 9,
        }
    );
    // TIME Fla ; Flu eof
    assert_eq!(stream.tokens.len(), 5);
}

#[test]
fn multiplication_sign_is_not_a_letter() {
    let tokens = Lexer::tokenize_all("A×B");
    assert!(matches!(
        tokens[1].kind,
        TokenKind::Error(LexError::IllegalCharacter('×'))
    ));
}

#[test]
fn integer_overflow_reported_with_literal() {
    let stream = Lexer::tokenize("GOL: 4294967296(Rossi)");
    assert_eq!(stream.errors.len(), 1);
    assert!(matches!(
        &stream.errors[0].kind,
        ErrorKind::IntegerOutOfRange { literal, column: 6, .. } if literal == "4294967296"
    ));
}

#[test]
fn largest_jersey_number_fits() {
    let tokens = Lexer::tokenize_all("4294967295");
    assert!(matches!(tokens[0].kind, TokenKind::Int(u32::MAX)));
}
