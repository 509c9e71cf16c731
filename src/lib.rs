//! Tatico - Line-oriented compiler for a football lineup language
//!
//! This crate re-exports all layers of the Tatico system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tatico_runtime     REPL, CLI, export, logging setup
//! Layer 2: tatico_engine      Session, validation, document, compiler
//! Layer 1: tatico_language    Lexer, command grammar, parser
//! Layer 0: tatico_foundation  Core types (Position, FormationCode, Player, Error)
//! ```

pub use tatico_engine as engine;
pub use tatico_foundation as foundation;
pub use tatico_language as language;
pub use tatico_runtime as runtime;
