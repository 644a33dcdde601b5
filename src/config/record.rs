//! The build configuration record

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::theme::Theme;
use crate::config::{loader, Fingerprint};
use crate::types::Result;

/// Top-level build configuration for one generator invocation.
///
/// Fields are private so the record stays read-only after load; build workers
/// that need their own handle clone it instead of sharing a lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Glob patterns for the template files the scanner inspects.
    content: Vec<String>,
    /// Design-token additions layered over the generator's default theme.
    #[serde(default)]
    theme: Theme,
    /// Plugin references, passed through to the generator uninterpreted.
    #[serde(default)]
    plugins: Vec<String>,
}

impl BuildConfig {
    /// Load a configuration file from `path`.
    ///
    /// One-shot and fail-fast: the record either comes back fully parsed or
    /// the error propagates to the caller's startup sequence.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        loader::load(path)
    }

    /// Content glob patterns, in declaration order.
    pub fn content_globs(&self) -> &[String] {
        &self.content
    }

    /// Design-token extensions.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Plugin references, in declaration order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Snapshot of the backing file, for watch sessions.
    pub fn fingerprint(path: impl AsRef<Path>) -> Result<Fingerprint> {
        Fingerprint::of(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_preserve_declaration_order() {
        let config: BuildConfig = toml::from_str(
            r#"
            content = ["./b/**/*.html", "./a/**/*.html"]
            plugins = ["typography", "forms"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.content_globs(),
            ["./b/**/*.html", "./a/**/*.html"]
        );
        assert_eq!(config.plugins(), ["typography", "forms"]);
    }

    #[test]
    fn test_theme_and_plugins_default_to_empty() {
        let config: BuildConfig = toml::from_str(r#"content = ["./src/**/*.html"]"#).unwrap();

        assert!(config.theme().is_empty());
        assert!(config.plugins().is_empty());
    }

    #[test]
    fn test_content_is_required() {
        let result = toml::from_str::<BuildConfig>("plugins = []");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config: BuildConfig = toml::from_str(
            r#"
            content = ["./src/**/*.html"]
            prefix = "wf-"
            "#,
        )
        .unwrap();

        assert_eq!(config.content_globs().len(), 1);
    }
}
