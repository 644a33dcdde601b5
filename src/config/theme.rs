//! Design-token theme extensions
//!
//! The generator owns a full default theme; a configuration file only carries
//! additions under `theme.extend`. Merging into the default set happens in
//! the generator, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Token category name -> token name -> token value.
pub type TokenTable = BTreeMap<String, BTreeMap<String, String>>;

/// The `theme` section of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    extend: TokenTable,
}

impl Theme {
    /// Extended category names, in stable order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.extend.keys().map(String::as_str)
    }

    /// All tokens declared under one category.
    pub fn category(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.extend.get(name)
    }

    /// Look up one token value, e.g. `token("colors", "gold")`.
    pub fn token(&self, category: &str, name: &str) -> Option<&str> {
        self.extend
            .get(category)
            .and_then(|tokens| tokens.get(name))
            .map(String::as_str)
    }

    /// The full extension table.
    pub fn extensions(&self) -> &TokenTable {
        &self.extend
    }

    /// Total number of extension tokens across all categories.
    pub fn len(&self) -> usize {
        self.extend.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.extend.is_empty()
    }
}
