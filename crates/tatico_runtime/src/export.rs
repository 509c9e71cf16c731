//! Document export to JSON or `MessagePack` files.
//!
//! Every document the REPL emits can be written to a directory as
//! `tournament-001.json`, `tournament-002.json`, and so on.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tatico_engine::TournamentDocument;
use tatico_foundation::{Error, ErrorKind, Result};
use tracing::info;

use crate::config::ExportFormat;

/// Serializes a document to bytes.
///
/// `MessagePack` uses named serialization to preserve field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(document: &TournamentDocument, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => {
            let mut text = document.to_json()?;
            text.push('\n');
            Ok(text.into_bytes())
        }
        ExportFormat::MessagePack => rmp_serde::to_vec_named(document)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string()))),
    }
}

/// Deserializes a document from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a document in `format`.
pub fn from_bytes(bytes: &[u8], format: ExportFormat) -> Result<TournamentDocument> {
    match format {
        ExportFormat::Json => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))?;
            TournamentDocument::from_json(text)
        }
        ExportFormat::MessagePack => rmp_serde::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string()))),
    }
}

/// Saves a document to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(
    document: &TournamentDocument,
    path: P,
    format: ExportFormat,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(document, format)?;

    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;

    Ok(())
}

/// Loads a document from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P, format: ExportFormat) -> Result<TournamentDocument> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    from_bytes(&bytes, format)
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::Io(format!(
        "failed to {action} file '{}': {e}",
        path.display()
    )))
}

/// Writes numbered documents into a directory.
#[derive(Clone, Debug)]
pub struct Exporter {
    dir: PathBuf,
    format: ExportFormat,
    next: usize,
}

impl Exporter {
    /// Creates an exporter. The directory is created on first export.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
            next: 1,
        }
    }

    /// The path the next document will be written to.
    #[must_use]
    pub fn next_path(&self) -> PathBuf {
        self.dir
            .join(format!("tournament-{:03}.{}", self.next, self.format.extension()))
    }

    /// Writes a document and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn export(&mut self, document: &TournamentDocument) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to create directory '{}': {e}",
                self.dir.display()
            )))
        })?;
        let path = self.next_path();
        save_to_file(document, &path, self.format)?;
        self.next += 1;
        info!(path = %path.display(), teams = document.tournament_data.total_teams, "exported");
        Ok(path)
    }
}
