//! Paginated, searchable glyph catalog

use std::collections::HashSet;
use tracing::{debug, warn};

use super::preferred::{move_to_front, PREFERRED_SYMBOLS};
use super::registry::GlyphRegistry;

/// Number of glyph names issued per page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Loads glyph names from a registry and serves them page by page
#[derive(Debug, Clone)]
pub struct SymbolLoader {
    /// Ordered catalog, fixed after construction
    symbols: Vec<String>,
    page_size: usize,
    /// Pages already issued
    current_page: usize,
}

impl SymbolLoader {
    /// Build a catalog with the built-in preferred list and page size
    pub fn new<R: GlyphRegistry>(registry: &R) -> Self {
        Self::with_options(registry, PREFERRED_SYMBOLS, DEFAULT_PAGE_SIZE)
    }

    /// Build a catalog with a custom preferred list and page size
    ///
    /// A registry failure yields an empty catalog. A page size of zero is
    /// treated as one.
    pub fn with_options<R, P>(registry: &R, preferred: &[P], page_size: usize) -> Self
    where
        R: GlyphRegistry,
        String: PartialEq<P>,
    {
        let mut symbols = match registry.glyph_names() {
            Ok(names) => dedup_preserving_order(names),
            Err(e) => {
                warn!(error = %e, "Glyph registry unavailable, using empty catalog");
                Vec::new()
            }
        };

        let promoted = move_to_front(&mut symbols, preferred);
        debug!(total = symbols.len(), promoted, "Built glyph catalog");

        Self {
            symbols,
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    /// Issue the next page of glyph names
    ///
    /// Returns an empty page once the catalog is exhausted.
    pub fn next_page(&mut self) -> Vec<String> {
        self.current_page += 1;

        let start = (self.current_page - 1).saturating_mul(self.page_size);
        if start >= self.symbols.len() {
            return Vec::new();
        }
        let end = (start + self.page_size).min(self.symbols.len());

        debug!(page = self.current_page, start, end, "Issuing glyph page");
        self.symbols[start..end].to_vec()
    }

    /// Every glyph name starting with `query`, ignoring case
    pub fn search_by_prefix(&self, query: &str) -> Vec<String> {
        let query_lower = query.to_lowercase();

        self.symbols
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&query_lower))
            .cloned()
            .collect()
    }

    /// Whether another call to [`next_page`](Self::next_page) yields names
    pub fn has_more(&self) -> bool {
        self.current_page.saturating_mul(self.page_size) < self.symbols.len()
    }

    pub fn reset_pagination(&mut self) {
        self.current_page = 0;
    }

    /// The full ordered catalog
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }
}

fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
