//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// `count` distinct glyph names: glyph.000, glyph.001, ...
pub fn numbered_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("glyph.{:03}", i)).collect()
}

/// Write a YAML registry document listing `names` under `symbols`
pub fn write_registry(dir: &Path, names: &[&str]) -> PathBuf {
    let mut yaml = String::from("symbols:\n");
    for name in names {
        yaml.push_str(&format!("  \"{}\": \"2019\"\n", name));
    }
    yaml.push_str("year_to_release:\n  \"2019\":\n    iOS: \"13.0\"\n");

    let path = dir.join("symbols.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}
