//! REPL, CLI, and document export for Tatico.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over the lineup language
//! - Batch execution of script files
//! - Document export as JSON or `MessagePack`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod export;
pub mod highlight;
pub mod logging;
pub mod repl;

pub use config::{ExportFormat, RuntimeConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use export::Exporter;
pub use logging::init_tracing;
pub use repl::{Flow, Repl};
