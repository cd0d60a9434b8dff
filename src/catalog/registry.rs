//! Glyph registry sources
//!
//! A registry is a key-value document keyed by glyph name. Only the key set
//! is consumed; the values (availability metadata) are ignored.

use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{GlyphPickError, Result};

/// Source of glyph names for a catalog
pub trait GlyphRegistry {
    /// Enumerate every glyph name the registry knows about.
    ///
    /// Either the full set is returned or an error; never a partial list.
    fn glyph_names(&self) -> Result<Vec<String>>;
}

/// On-disk registry document
///
/// ```yaml
/// symbols:
///   globe: "2019"
///   wifi: "2019"
/// year_to_release:
///   "2019": { iOS: "13.0" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryDocument {
    /// Glyph names keyed to arbitrary availability data
    pub symbols: BTreeMap<String, IgnoredAny>,
}

impl RegistryDocument {
    /// Parse a registry document from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a registry document from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Glyph names in document order
    pub fn into_names(self) -> Result<Vec<String>> {
        if self.symbols.contains_key("") {
            return Err(GlyphPickError::Registry(
                "registry contains an empty glyph name".to_string(),
            ));
        }
        Ok(self.symbols.into_keys().collect())
    }
}

/// Registry read from a JSON or YAML file
#[derive(Debug, Clone)]
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl GlyphRegistry for FileRegistry {
    fn glyph_names(&self) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            GlyphPickError::Registry(format!(
                "Failed to read registry {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let parsed = if self.is_json() {
            RegistryDocument::from_json(&content)
        } else {
            RegistryDocument::from_yaml(&content)
        };
        let document = parsed.map_err(|e| {
            GlyphPickError::Registry(format!(
                "Failed to parse registry {}: {}",
                self.path.display(),
                e
            ))
        })?;

        document.into_names()
    }
}

/// Registry backed by an in-memory list, enumerated in the given order
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    names: Vec<String>,
}

impl StaticRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl GlyphRegistry for StaticRegistry {
    fn glyph_names(&self) -> Result<Vec<String>> {
        if self.names.iter().any(|name| name.is_empty()) {
            return Err(GlyphPickError::Registry(
                "registry contains an empty glyph name".to_string(),
            ));
        }
        Ok(self.names.clone())
    }
}

/// Registry that is never available
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableRegistry;

impl GlyphRegistry for UnavailableRegistry {
    fn glyph_names(&self) -> Result<Vec<String>> {
        Err(GlyphPickError::Registry(
            "glyph registry is not available".to_string(),
        ))
    }
}
