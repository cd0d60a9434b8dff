use crate::{GlyphPickError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Path management for glyphpick configuration files
#[derive(Debug, Clone)]
pub struct GlyphPaths {
    /// Configuration directory
    pub config_dir: PathBuf,
}

impl GlyphPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "glyphpick").ok_or_else(|| {
            GlyphPickError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create paths rooted at a specific directory
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            config_dir: project_root.join(".glyphpick"),
        }
    }

    /// Picker configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.yaml")
    }

    /// Conventional location of a user-supplied glyph registry
    pub fn registry_file(&self) -> PathBuf {
        self.config_dir.join("symbols.yaml")
    }
}

impl Default for GlyphPaths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if platform directories fail
            let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Self::for_project(&current_dir)
        })
    }
}
