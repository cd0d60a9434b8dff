use super::types::PickerConfig;
use crate::io::paths::GlyphPaths;
use crate::{GlyphPickError, Result};
use std::path::Path;
use tracing::debug;

/// Configuration loader for picker settings
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit path, or the default location
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<PickerConfig> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let path = GlyphPaths::default().config_file();
                if path.exists() {
                    Self::load_file(&path)
                } else {
                    debug!("No config at {}, using defaults", path.display());
                    Ok(PickerConfig::default())
                }
            }
        }
    }

    /// Load configuration from a YAML file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<PickerConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            GlyphPickError::Config(format!("Failed to read config file {}: {}", path_str, e))
        })?;

        let config = Self::from_yaml(&contents).map_err(|e| {
            GlyphPickError::Config(format!("Failed to parse config file {}: {}", path_str, e))
        })?;

        debug!("Loaded config from {}", path_str);
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(contents: &str) -> Result<PickerConfig> {
        let config: PickerConfig = serde_yaml_ng::from_str(contents)?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &PickerConfig) -> Result<()> {
        if config.page_size == 0 {
            return Err(GlyphPickError::Config(
                "page_size must be greater than zero".to_string(),
            ));
        }

        if let Some(preferred) = &config.preferred {
            if preferred.iter().any(|name| name.is_empty()) {
                return Err(GlyphPickError::Config(
                    "preferred list contains an empty glyph name".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_PAGE_SIZE;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            r#"
registry: /tmp/glyphs.yaml
page_size: 25
preferred:
  - house
  - globe
title: Choose
auto_dismiss: false
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(path.as_path())).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.title, "Choose");
        assert_eq!(config.search_label, "Search for symbol...");
        assert!(!config.auto_dismiss);
        assert_eq!(config.preferred_symbols(), vec!["house", "globe"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConfigLoader::from_yaml("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.preferred_symbols().first().map(String::as_str), Some("globe"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = ConfigLoader::from_yaml("page_size: 0").unwrap_err();
        assert!(matches!(err, GlyphPickError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = ConfigLoader::load(Some(dir.path().join("missing.yaml").as_path()));
        assert!(matches!(result, Err(GlyphPickError::Config(_))));
    }

    #[test]
    fn test_build_view_model_from_registry() {
        let dir = tempdir().unwrap();
        let registry = dir.path().join("glyphs.json");
        fs::write(&registry, r#"{"symbols": {"car": "1", "house": "1", "wifi": "1"}}"#).unwrap();

        let config = PickerConfig {
            registry: Some(registry),
            page_size: 2,
            ..PickerConfig::default()
        };
        let vm = config.build_view_model();

        // built-in preferred order: wifi, house, ..., car
        assert_eq!(vm.symbols(), ["wifi", "house"]);
        assert!(vm.has_more_symbols());
    }

    #[test]
    fn test_no_registry_gives_empty_catalog() {
        let vm = PickerConfig::default().build_view_model();
        assert!(vm.symbols().is_empty());
        assert!(!vm.has_more_symbols());
    }
}
