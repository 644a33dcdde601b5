//! Configuration loading for the Weft generator
//!
//! A configuration file is parsed once at generator startup into a
//! [`BuildConfig`] and never mutated afterwards. Watch sessions detect edits
//! through [`Fingerprint`] and construct a fresh record instead of patching
//! the old one.

mod defaults;
mod loader;
mod record;
mod theme;

pub use defaults::STARTER_CONFIG;
pub use loader::{discover, load, Fingerprint, SourceFormat, CONFIG_ENV_VAR, PROJECT_FILE};
pub use record::BuildConfig;
pub use theme::{Theme, TokenTable};
