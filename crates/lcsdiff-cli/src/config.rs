use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use lcsdiff_core::{DiffLimits, Granularity};

/// Settings read from the `--config` TOML file. Missing keys take defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Element granularity for `diff` when `--lines` is not given.
    pub granularity: Granularity,
    /// Grid ceiling; `max_cells` sits at the top level of the file.
    #[serde(flatten)]
    pub limits: DiffLimits,
    /// Colorize text output.
    pub color: bool,
    /// Log level used unless `--verbose` is set.
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Chars,
            limits: DiffLimits::default(),
            color: true,
            log_level: LogLevel::Warn,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn limits(&self) -> DiffLimits {
        self.limits
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
