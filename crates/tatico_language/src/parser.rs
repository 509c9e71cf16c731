//! Parser for the lineup language.
//!
//! The parser matches the tokens of one line against the five command
//! productions and builds a [`Command`]. It stops at the first mismatch and
//! reports it; nothing is executed here.
//!
//! ```text
//! command        := TIME names | FORMACAO formations | POSITION ':' groups
//!                 | VALIDAR | STOP
//! names          := compound-name (';' compound-name)*
//! formations     := FORMATION (';' FORMATION)*
//! groups         := players (';' players)*
//! players        := player (',' player)*
//! player         := INT '(' compound-name ')'
//! compound-name  := NAME+
//! ```

use tatico_foundation::{Error, FormationCode, Player, Result};

use crate::ast::Command;
use crate::lexer::{Lexer, TokenStream};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser over the tokens of one command line.
pub struct Parser<'src> {
    /// Valid tokens, terminated by `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token (lookahead).
    index: usize,
    /// Source text (for error messages).
    source: &'src str,
}

/// The result of reading one line: lexical diagnostics plus the parsed
/// command or the syntax error that stopped it.
#[derive(Debug)]
pub struct ParsedLine {
    /// Illegal characters and out-of-range integers, in scan order.
    pub diagnostics: Vec<Error>,
    /// The command, or the first syntax error.
    pub command: Result<Command>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over already-lexed tokens.
    ///
    /// Error tokens are dropped and a trailing `Eof` is added if missing.
    #[must_use]
    pub fn new(source: &'src str, mut tokens: Vec<Token>) -> Self {
        tokens.retain(|t| !t.kind.is_error());
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let end = source.len();
            let column = u32::try_from(source.chars().count() + 1).unwrap_or(u32::MAX);
            let line = tokens.last().map_or(1, |t| t.span.line);
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end, line, column)));
        }
        Self {
            tokens,
            index: 0,
            source,
        }
    }

    /// Parses exactly one command spanning the whole line.
    ///
    /// # Errors
    /// Returns a syntax error if the tokens match no command, or if tokens
    /// remain after a complete command.
    pub fn parse_command(&mut self) -> Result<Command> {
        let command = match self.current().kind {
            TokenKind::Time => {
                self.advance();
                Command::DeclareTeams(self.parse_separated(Self::parse_compound_name)?)
            }
            TokenKind::Formacao => {
                self.advance();
                Command::AssignFormations(self.parse_separated(Self::parse_formation)?)
            }
            TokenKind::Position(position) => {
                self.advance();
                self.expect(&TokenKind::Colon, "':'")?;
                let groups = self.parse_separated(Self::parse_player_list)?;
                Command::AssignRoster { position, groups }
            }
            TokenKind::Validar => {
                self.advance();
                Command::Validate
            }
            TokenKind::Stop => {
                self.advance();
                Command::Stop
            }
            _ => {
                return Err(
                    self.error("a command (TIME, FORMACAO, GOL/DEF/MEI/ATA, VALIDAR, STOP)")
                );
            }
        };

        if self.current().kind != TokenKind::Eof {
            return Err(self.error("end of line"));
        }
        Ok(command)
    }

    /// Parses `item (';' item)*`, one item per team.
    fn parse_separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut items = vec![item(self)?];
        while self.current().kind == TokenKind::Semicolon {
            self.advance();
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Parses one or more name fragments joined by single spaces.
    fn parse_compound_name(&mut self) -> Result<String> {
        let mut parts: Vec<String> = Vec::new();
        while let TokenKind::Name(fragment) = &self.current().kind {
            parts.push(fragment.clone());
            self.advance();
        }
        if parts.is_empty() {
            return Err(self.error("a name"));
        }
        Ok(parts.join(" "))
    }

    /// Parses a formation code literal.
    fn parse_formation(&mut self) -> Result<FormationCode> {
        let TokenKind::Formation(lines) = &self.current().kind else {
            return Err(self.error("a formation code like 4-4-2"));
        };
        let formation = FormationCode::new(lines.clone())
            .map_err(|_| self.error("a formation code with non-zero lines"))?;
        self.advance();
        Ok(formation)
    }

    /// Parses `player (',' player)*`.
    fn parse_player_list(&mut self) -> Result<Vec<Player>> {
        let mut players = vec![self.parse_player()?];
        while self.current().kind == TokenKind::Comma {
            self.advance();
            players.push(self.parse_player()?);
        }
        Ok(players)
    }

    /// Parses `number '(' compound-name ')'`.
    fn parse_player(&mut self) -> Result<Player> {
        let number = match self.current().kind {
            TokenKind::Int(0) => return Err(self.error("a jersey number of 1 or more")),
            TokenKind::Int(n) => n,
            _ => return Err(self.error("a jersey number")),
        };
        self.advance();
        self.expect(&TokenKind::LParen, "'('")?;
        let name = self.parse_compound_name()?;
        self.expect(&TokenKind::RParen, "')'")?;
        Player::new(number, name)
    }

    fn current(&self) -> &Token {
        // `new` guarantees a trailing Eof and `advance` never moves past it.
        &self.tokens[self.index]
    }

    fn advance(&mut self) {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Consumes the current token if it has the given kind.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<()> {
        if &self.current().kind == kind {
            self.advance();
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    /// Creates a syntax error at the current token.
    fn error(&self, expected: &str) -> Error {
        let token = self.current();
        let found = match token.kind {
            TokenKind::Eof => None,
            _ => Some(token.text(self.source).to_string()),
        };
        Error::syntax(found, expected, token.span.line, token.span.column)
    }
}

/// Tokenizes and parses one command line.
#[must_use]
pub fn parse_line(source: &str) -> ParsedLine {
    parse_numbered_line(source, 1)
}

/// Tokenizes and parses one command line, reporting positions on `line`.
#[must_use]
pub fn parse_numbered_line(source: &str, line: u32) -> ParsedLine {
    let TokenStream { tokens, errors } = Lexer::new(source).with_line(line).into_stream();
    let command = Parser::new(source, tokens).parse_command();
    ParsedLine {
        diagnostics: errors,
        command,
    }
}

/// Parses one command line, failing on the first lexical or syntax error.
///
/// # Errors
/// Returns the first lexical diagnostic if any, otherwise the syntax error.
pub fn parse(source: &str) -> Result<Command> {
    let ParsedLine {
        diagnostics,
        command,
    } = parse_line(source);
    match diagnostics.into_iter().next() {
        Some(error) => Err(error),
        None => command,
    }
}
