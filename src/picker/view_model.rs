use tracing::debug;

use super::observable::{Observable, SubscriptionId};
use crate::catalog::{GlyphRegistry, SymbolLoader};

/// Default label for the search field
pub const DEFAULT_SEARCH_LABEL: &str = "Search for symbol...";

/// Observable picker state over a [`SymbolLoader`]
///
/// Holds the displayed glyph names: accumulated pages while browsing, or the
/// prefix-search result while searching.
#[derive(Debug)]
pub struct SymbolsPickerViewModel {
    title: String,
    search_label: String,
    loader: SymbolLoader,
    symbols: Observable<Vec<String>>,
}

impl SymbolsPickerViewModel {
    /// Create a view model with a fresh catalog from `registry` and load the first page
    pub fn new<R: GlyphRegistry>(
        title: impl Into<String>,
        search_label: impl Into<String>,
        registry: &R,
    ) -> Self {
        Self::with_loader(title, search_label, SymbolLoader::new(registry))
    }

    /// Create a view model around an existing loader and load the first page
    pub fn with_loader(
        title: impl Into<String>,
        search_label: impl Into<String>,
        loader: SymbolLoader,
    ) -> Self {
        let mut vm = Self {
            title: title.into(),
            search_label: search_label.into(),
            loader,
            symbols: Observable::new(Vec::new()),
        };
        vm.load_symbols();
        vm
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn search_label(&self) -> &str {
        &self.search_label
    }

    /// Currently displayed glyph names
    pub fn symbols(&self) -> &[String] {
        self.symbols.get()
    }

    pub fn has_more_symbols(&self) -> bool {
        self.loader.has_more()
    }

    /// Append the next page, if any, to the displayed names
    pub fn load_symbols(&mut self) {
        if self.loader.has_more() {
            let page = self.loader.next_page();
            debug!(count = page.len(), "Appending glyph page");
            self.symbols.update(|symbols| symbols.extend(page));
        }
    }

    /// Replace the displayed names with every catalog entry starting with `name`
    pub fn search_symbols(&mut self, name: &str) {
        let results = self.loader.search_by_prefix(name);
        debug!(query = name, matches = results.len(), "Glyph search");
        self.symbols.set(results);
    }

    /// Return to browse mode showing only the first page
    pub fn reset(&mut self) {
        self.loader.reset_pagination();
        self.symbols.update(Vec::clear);
        self.load_symbols();
    }

    /// Observe changes to the displayed names
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Vec<String>) + 'static,
    {
        self.symbols.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.symbols.unsubscribe(id)
    }

    /// The underlying catalog
    pub fn loader(&self) -> &SymbolLoader {
        &self.loader
    }
}
