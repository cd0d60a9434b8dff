use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::{
    FileRegistry, SymbolLoader, UnavailableRegistry, DEFAULT_PAGE_SIZE, PREFERRED_SYMBOLS,
};
use crate::picker::{SymbolsPickerViewModel, DEFAULT_SEARCH_LABEL};

/// Picker configuration file structure (config.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Path to the glyph registry document (JSON or YAML)
    pub registry: Option<PathBuf>,

    /// Glyph names issued per page
    pub page_size: usize,

    /// Replaces the built-in preferred list when set
    pub preferred: Option<Vec<String>>,

    /// Picker title
    pub title: String,

    /// Placeholder label for the search field
    pub search_label: String,

    /// Dismiss the picker after a selection
    pub auto_dismiss: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            registry: None,
            page_size: DEFAULT_PAGE_SIZE,
            preferred: None,
            title: "Pick a symbol".to_string(),
            search_label: DEFAULT_SEARCH_LABEL.to_string(),
            auto_dismiss: true,
        }
    }
}

impl PickerConfig {
    /// Preferred list in effect
    pub fn preferred_symbols(&self) -> Vec<String> {
        match &self.preferred {
            Some(list) => list.clone(),
            None => PREFERRED_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a loader from the configured registry
    ///
    /// Without a registry path the catalog is empty.
    pub fn build_loader(&self) -> SymbolLoader {
        let preferred = self.preferred_symbols();
        match &self.registry {
            Some(path) => SymbolLoader::with_options(
                &FileRegistry::new(path),
                preferred.as_slice(),
                self.page_size,
            ),
            None => SymbolLoader::with_options(
                &UnavailableRegistry,
                preferred.as_slice(),
                self.page_size,
            ),
        }
    }

    pub fn build_view_model(&self) -> SymbolsPickerViewModel {
        SymbolsPickerViewModel::with_loader(
            self.title.clone(),
            self.search_label.clone(),
            self.build_loader(),
        )
    }
}
