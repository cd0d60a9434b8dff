//! Search field wiring
//!
//! Every edit of the search text is forwarded to the view model: clearing
//! the text returns to paginated browsing, any other change re-runs a
//! full-catalog prefix search.

use tui_input::{Input, InputRequest};

use super::view_model::SymbolsPickerViewModel;

/// Search text bound to a [`SymbolsPickerViewModel`]
#[derive(Debug, Default)]
pub struct SearchBinding {
    input: Input,
}

impl SearchBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text
    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Apply an editing request; forwards to the view model if the text changed.
    ///
    /// Returns whether the text changed.
    pub fn handle(&mut self, request: InputRequest, vm: &mut SymbolsPickerViewModel) -> bool {
        let changed = self
            .input
            .handle(request)
            .is_some_and(|state| state.value);
        if changed {
            self.text_changed(vm);
        }
        changed
    }

    /// Replace the whole search text
    pub fn set_text(&mut self, text: &str, vm: &mut SymbolsPickerViewModel) -> bool {
        if self.input.value() == text {
            return false;
        }
        self.input = Input::new(text.to_string());
        self.text_changed(vm);
        true
    }

    pub fn clear(&mut self, vm: &mut SymbolsPickerViewModel) -> bool {
        self.set_text("", vm)
    }

    fn text_changed(&self, vm: &mut SymbolsPickerViewModel) {
        let text = self.input.value();
        if text.is_empty() {
            vm.reset();
        } else {
            vm.search_symbols(text);
        }
    }
}
