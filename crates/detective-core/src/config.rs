//! Configuration loading and typed config structures for Detective Quest.
//!
//! Configuration is optional. When present it lives in
//! `detective-config.yaml` in the working directory; every section and
//! every field falls back to the built-in game when omitted.
//!
//! ```yaml
//! ledger:
//!   bucket_count: 7
//! logging:
//!   level: warn
//! mansion:
//!   root: Porch
//!   rooms:
//!     - { name: Porch, left: Attic }
//!     - { name: Attic }
//! case_file:
//!   - { room: Attic, clue: "Dusty box.", suspect: Butler }
//! ```

use std::num::NonZeroUsize;
use std::path::Path;

use detective_ledger::DEFAULT_BUCKET_COUNT;
use detective_world::{
    CaseFile, EvidenceEntry, MansionLayout, MansionMap, WorldError, create_starting_mansion,
    starting_case_file,
};
use serde::Deserialize;
use tracing::debug;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `detective-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestConfig {
    /// Suspect ledger parameters.
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Custom mansion layout. The built-in mansion when absent.
    #[serde(default)]
    pub mansion: Option<MansionLayout>,

    /// Custom case file rows. The built-in case file when absent.
    #[serde(default)]
    pub case_file: Option<Vec<EvidenceEntry>>,
}

impl QuestConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!(path = %path.display(), "configuration file read");
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML or a
    /// field has the wrong shape (for example a zero bucket count).
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Build the mansion this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if a custom layout is not a valid tree.
    pub fn build_mansion(&self) -> Result<MansionMap, WorldError> {
        match &self.mansion {
            Some(layout) => layout.build(),
            None => create_starting_mansion().map(|(map, _)| map),
        }
    }

    /// Build the case file this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEvidence`] if two rows share a room.
    pub fn build_case_file(&self) -> Result<CaseFile, WorldError> {
        match &self.case_file {
            Some(rows) => CaseFile::from_entries(rows.iter().cloned()),
            None => starting_case_file(),
        }
    }
}

/// Suspect ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerConfig {
    /// Number of hash buckets in the suspect ledger.
    #[serde(default = "default_bucket_count")]
    pub bucket_count: NonZeroUsize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            bucket_count: default_bucket_count(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_bucket_count() -> NonZeroUsize {
    DEFAULT_BUCKET_COUNT
}

fn default_log_level() -> String {
    "warn".to_owned()
}
