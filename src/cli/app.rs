use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ConfigLoader, PickerConfig};
use crate::io::GlyphPaths;
use crate::Result;

/// glyphpick: browse and search a glyph name catalog
#[derive(Parser, Debug)]
#[command(name = "glyphpick")]
#[command(version)]
#[command(about = "Browse, search and pick glyph names from a symbol registry")]
#[command(
    long_about = "glyphpick loads a glyph registry, moves preferred glyphs to the front and serves the catalog page by page or filtered by name prefix."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Glyph registry document (JSON or YAML with a `symbols` map)
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full ordered catalog
    List,

    /// Print the first pages of the catalog
    Browse {
        /// Number of pages to load (at least 1)
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        pages: usize,

        /// Glyph names per page (overrides config)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Print every glyph whose name starts with QUERY (case-insensitive)
    Search {
        /// Name prefix
        query: String,
    },

    /// Interactive picker driven by lines on stdin (requires the `tui` feature)
    Pick {
        /// Glyph selected at start
        #[arg(long)]
        selection: Option<String>,
    },
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// Load configuration and apply command-line overrides
    ///
    /// Registry resolution order: `--registry`, the config file, then
    /// `symbols.yaml` in the config directory if it exists.
    pub fn resolve_config(&self) -> Result<PickerConfig> {
        let mut config = ConfigLoader::load(self.config.as_deref())?;

        if let Some(registry) = &self.registry {
            config.registry = Some(registry.clone());
        }
        if config.registry.is_none() {
            let fallback = GlyphPaths::default().registry_file();
            if fallback.exists() {
                config.registry = Some(fallback);
            }
        }

        if let Commands::Browse {
            page_size: Some(page_size),
            ..
        } = &self.command
        {
            config.page_size = (*page_size).max(1);
        }

        Ok(config)
    }
}
