//! Glyph catalog - loading, ordering and paging glyph names
//!
//! The catalog is built once from a glyph registry, reordered so that
//! curated "preferred" names come first, and then served page by page or
//! filtered by name prefix.
//!
//! # Architecture
//!
//! ```text
//! GlyphRegistry (file / static list)
//!     │
//!     ├── glyph_names()       ← key set of the `symbols` map
//!     │
//!     ▼
//! SymbolLoader
//!     ├── dedup + move_to_front(PREFERRED_SYMBOLS)
//!     ├── next_page() / has_more() / reset_pagination()
//!     └── search_by_prefix()
//! ```

mod loader;
mod preferred;
mod registry;

pub use loader::{SymbolLoader, DEFAULT_PAGE_SIZE};
pub use preferred::{move_to_front, PREFERRED_SYMBOLS};
pub use registry::{
    FileRegistry, GlyphRegistry, RegistryDocument, StaticRegistry, UnavailableRegistry,
};
