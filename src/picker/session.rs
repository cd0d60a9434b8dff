use std::fmt;
use tracing::info;
use tui_input::InputRequest;

use super::search::SearchBinding;
use super::view_model::SymbolsPickerViewModel;

type SelectHandler = Box<dyn FnMut(&str)>;
type DismissHandler = Box<dyn FnMut()>;

/// A picker session: view model, search field and selection
pub struct SymbolsPicker {
    vm: SymbolsPickerViewModel,
    search: SearchBinding,
    selection: Option<String>,
    auto_dismiss: bool,
    on_select: Option<SelectHandler>,
    on_dismiss: Option<DismissHandler>,
}

impl SymbolsPicker {
    pub fn new(vm: SymbolsPickerViewModel) -> Self {
        Self {
            vm,
            search: SearchBinding::new(),
            selection: None,
            auto_dismiss: true,
            on_select: None,
            on_dismiss: None,
        }
    }

    /// Start with a glyph already selected
    pub fn with_selection(mut self, name: impl Into<String>) -> Self {
        self.selection = Some(name.into());
        self
    }

    /// Dismiss automatically after a selection (on by default)
    pub fn with_auto_dismiss(mut self, auto_dismiss: bool) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn on_dismiss<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_dismiss = Some(Box::new(handler));
        self
    }

    pub fn view_model(&self) -> &SymbolsPickerViewModel {
        &self.vm
    }

    pub fn view_model_mut(&mut self) -> &mut SymbolsPickerViewModel {
        &mut self.vm
    }

    pub fn symbols(&self) -> &[String] {
        self.vm.symbols()
    }

    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.as_deref() == Some(name)
    }

    /// "Load more" is offered only while browsing
    pub fn show_load_more(&self) -> bool {
        self.vm.has_more_symbols() && self.search.is_empty()
    }

    pub fn load_more(&mut self) {
        self.vm.load_symbols();
    }

    pub fn edit_search(&mut self, request: InputRequest) -> bool {
        self.search.handle(request, &mut self.vm)
    }

    pub fn set_search_text(&mut self, text: &str) -> bool {
        self.search.set_text(text, &mut self.vm)
    }

    pub fn clear_search(&mut self) -> bool {
        self.search.clear(&mut self.vm)
    }

    /// Select a glyph, notify the selection handler and dismiss if configured
    pub fn select(&mut self, name: &str) {
        info!(glyph = name, "Glyph selected");
        self.selection = Some(name.to_string());
        if let Some(handler) = self.on_select.as_mut() {
            handler(name);
        }
        if self.auto_dismiss {
            self.dismiss();
        }
    }

    /// Select the displayed glyph at `index`; returns the name if in range
    pub fn select_index(&mut self, index: usize) -> Option<String> {
        let name = self.vm.symbols().get(index).cloned()?;
        self.select(&name);
        Some(name)
    }

    pub fn dismiss(&mut self) {
        if let Some(handler) = self.on_dismiss.as_mut() {
            handler();
        }
    }
}

impl fmt::Debug for SymbolsPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolsPicker")
            .field("vm", &self.vm)
            .field("search", &self.search)
            .field("selection", &self.selection)
            .field("auto_dismiss", &self.auto_dismiss)
            .finish_non_exhaustive()
    }
}
