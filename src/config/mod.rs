//! Run configuration.
//!
//! Configuration comes from a TOML file, CLI flags, or both; flags win.
//! When no targets are configured anywhere, sibling locale files are
//! discovered next to the source file.

mod discover;

pub use discover::discover_targets;

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file probed in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "locale-sync.toml";

/// Default orphan report path.
pub const DEFAULT_REPORT_FILE: &str = "orphan_report.md";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no source file configured; pass --source or set `source` in the config file")]
    MissingSource,
}

/// On-disk TOML shape. All fields optional so a config file can carry any
/// subset and leave the rest to flags or defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source: Option<PathBuf>,

    #[serde(default)]
    targets: Vec<PathBuf>,

    report: Option<PathBuf>,
}

impl ConfigFile {
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Resolved run configuration: one source file, ordered target files, and
/// the orphan report destination.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub source: PathBuf,
    pub targets: Vec<PathBuf>,
    pub report: PathBuf,
}

impl SyncConfig {
    /// Resolve configuration from an optional config file plus CLI
    /// overrides.
    ///
    /// An explicit `config_path` must exist; without one,
    /// `locale-sync.toml` is used when present and silently skipped
    /// otherwise. Flag values take precedence over file values. An empty
    /// target list falls back to discovering locale files next to the
    /// source.
    pub fn resolve(
        config_path: Option<&Path>,
        source: Option<PathBuf>,
        targets: Vec<PathBuf>,
        report: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => ConfigFile::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    ConfigFile::from_file(default)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        let source = source.or(file.source).ok_or(ConfigError::MissingSource)?;

        let mut targets = if targets.is_empty() {
            file.targets
        } else {
            targets
        };
        if targets.is_empty() {
            targets = discover_targets(&source);
        }

        let report = report
            .or(file.report)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE));

        Ok(Self {
            source,
            targets,
            report,
        })
    }
}
