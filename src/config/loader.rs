//! Configuration file loading
//!
//! Resolution order when no explicit path is given:
//! 1. ./weft.toml (project-specific)
//! 2. $WEFT_CONFIG (environment variable)
//! 3. ~/.config/weft/weft.toml (user-global)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::config::BuildConfig;
use crate::types::{ConfigError, Result};

/// Project-local configuration file name.
pub const PROJECT_FILE: &str = "weft.toml";

/// Environment variable naming an explicit configuration path.
pub const CONFIG_ENV_VAR: &str = "WEFT_CONFIG";

/// On-disk encoding of a configuration file, keyed off the file extension.
///
/// TOML is the native format; `.json` files are accepted for tooling that
/// generates its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => SourceFormat::Json,
            _ => SourceFormat::Toml,
        }
    }
}

/// Load and shape-check the configuration file at `path`.
///
/// Fail-fast: no retries, no partially constructed record.
pub fn load(path: impl AsRef<Path>) -> Result<BuildConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => ConfigError::PermissionDenied(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;

    let config = parse(&content, SourceFormat::from_path(path), path)?;

    if config.content_globs().is_empty() {
        warn!(
            "{}: 'content' is empty, the scanner will match no files",
            path.display()
        );
    }

    debug!(
        "Loaded {} content glob(s), {} theme token(s), {} plugin(s)",
        config.content_globs().len(),
        config.theme().len(),
        config.plugins().len()
    );

    Ok(config)
}

fn parse(content: &str, format: SourceFormat, path: &Path) -> Result<BuildConfig> {
    let malformed = |message: String| ConfigError::Malformed {
        path: path.to_path_buf(),
        message,
    };

    match format {
        SourceFormat::Toml => toml::from_str(content).map_err(|e| malformed(e.to_string())),
        SourceFormat::Json => serde_json::from_str(content).map_err(|e| malformed(e.to_string())),
    }
}

/// Find a configuration file when the caller did not name one.
///
/// The first existing candidate wins; candidates that do not exist are
/// skipped silently.
pub fn discover() -> Result<PathBuf> {
    let mut candidates = Vec::new();

    // Project-specific config
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(PROJECT_FILE));
    }

    // Environment variable
    if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(config_path));
    }

    // User-global config
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("weft").join(PROJECT_FILE));
    }

    for path in &candidates {
        if path.exists() {
            debug!("Found configuration at: {}", path.display());
            return Ok(path.clone());
        }
    }

    debug!("No configuration file found in any candidate location");
    Err(ConfigError::NotFound(PathBuf::from(PROJECT_FILE)))
}

/// Size and mtime snapshot of a configuration file.
///
/// Enough for a watch session to notice edits without re-reading content;
/// a stale fingerprint means the host should reload into a fresh record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    len: u64,
    modified: Option<SystemTime>,
}

impl Fingerprint {
    pub fn of(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => ConfigError::PermissionDenied(path.to_path_buf()),
            _ => ConfigError::Io(e),
        })?;

        Ok(Self {
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }

    /// True when the file changed, vanished, or became unreadable since this
    /// snapshot was taken.
    pub fn is_stale(&self, path: &Path) -> bool {
        match Self::of(path) {
            Ok(current) => current != *self,
            Err(_) => true,
        }
    }
}
