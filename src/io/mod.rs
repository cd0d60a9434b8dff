pub mod paths;

pub use paths::GlyphPaths;
