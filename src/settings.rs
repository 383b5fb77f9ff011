//! Client settings
//!
//! Settings live in a JSON file under the platform config directory and can
//! be overridden from the environment. They are plain values: whoever builds
//! a client or an endpoint passes them in explicitly.
//!
//! ## Environment
//!
//! - `NUMWIRE_BASE_URL`: service base address
//! - `NUMWIRE_ARCHIVE`: archive identifier
//! - `NUMWIRE_TIMEOUT_MS`: request deadline in milliseconds

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_DISPLAY_POINTS, DEFAULT_TIMEOUT_MS, SETTINGS_DIR_NAME,
    SETTINGS_FILE_NAME,
};
use crate::downsample::downsample;
use crate::transport::{Endpoint, FunctionClient, Transport};
use crate::types::OutputFormat;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

pub const ENV_BASE_URL: &str = "NUMWIRE_BASE_URL";
pub const ENV_ARCHIVE: &str = "NUMWIRE_ARCHIVE";
pub const ENV_TIMEOUT_MS: &str = "NUMWIRE_TIMEOUT_MS";

/// Default location of the settings file
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub base_url: String,
    pub archive: Option<String>,
    pub timeout_ms: u64,
    /// Upper bound on points handed to a display, see [`Self::downsample_for_display`]
    pub max_display_points: usize,
    pub output_format: OutputFormat,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            archive: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_display_points: DEFAULT_MAX_DISPLAY_POINTS,
            output_format: OutputFormat::default(),
        }
    }
}

impl ClientSettings {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the default path, or defaults when no file exists
    pub fn load() -> Result<Self> {
        match default_settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    /// Apply `NUMWIRE_*` environment variables
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(archive) = lookup(ENV_ARCHIVE) {
            self.archive = Some(archive);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            match raw.trim().parse() {
                Ok(ms) => self.timeout_ms = ms,
                Err(_) => warn!("Ignoring {}={:?}: not a number of milliseconds", ENV_TIMEOUT_MS, raw),
            }
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Endpoint of `function` in the configured archive
    pub fn endpoint(&self, function: &str) -> Result<Endpoint> {
        let Some(archive) = self.archive.as_deref() else {
            bail!("No archive configured (set `archive` or {})", ENV_ARCHIVE);
        };
        Ok(Endpoint::new(&self.base_url, archive, function))
    }

    /// Thin `seq` to at most `max_display_points` points
    pub fn downsample_for_display<T: Clone>(&self, seq: &[T]) -> Vec<T> {
        downsample(seq, self.max_display_points)
    }

    /// A client over `transport` using these settings
    pub fn client<T: Transport>(&self, transport: T) -> FunctionClient<T> {
        FunctionClient::new(transport)
            .with_timeout(self.timeout())
            .with_output_format(self.output_format)
    }
}
