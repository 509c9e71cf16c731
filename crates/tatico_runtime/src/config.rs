//! Configuration for the runtime.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Encoding used for exported documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty JSON, four-space indent.
    #[default]
    Json,
    /// `MessagePack` with named fields.
    MessagePack,
}

impl ExportFormat {
    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::MessagePack => "msgpack",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "msgpack" | "messagepack" => Ok(Self::MessagePack),
            other => Err(format!("unknown export format: {other} (expected json or msgpack)")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Configuration for the REPL and batch runner.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Whether to show the welcome banner.
    pub show_banner: bool,

    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,

    /// Directory receiving every emitted document, if set.
    pub export_dir: Option<PathBuf>,

    /// Encoding for exported documents.
    pub export_format: ExportFormat,

    /// Default tracing filter when `TATICO_LOG` is unset.
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            show_banner: true,
            history_size: 1000,
            export_dir: None,
            export_format: ExportFormat::Json,
            log_filter: "warn".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to export documents into `dir`.
    #[must_use]
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    /// Builder method to set the export format.
    #[must_use]
    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = format;
        self
    }

    /// Builder method to set the default log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
