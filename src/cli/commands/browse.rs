use super::{CommandHandler, SymbolListing};
use crate::config::PickerConfig;
use crate::picker::SymbolsPickerViewModel;
use crate::Result;

/// Handler for the `browse` command
pub struct BrowseCommand {
    pub config: PickerConfig,
    pub pages: usize,
    pub json: bool,
}

impl CommandHandler for BrowseCommand {
    fn execute(&self) -> Result<()> {
        let vm = self.load();
        let listing = SymbolListing {
            symbols: vm.symbols(),
            has_more: Some(vm.has_more_symbols()),
        };
        listing.write_to(&mut std::io::stdout().lock(), self.json)
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}

impl BrowseCommand {
    pub fn new(config: PickerConfig, pages: usize, json: bool) -> Self {
        Self {
            config,
            pages,
            json,
        }
    }

    /// Build the view model and load `pages` pages in total
    pub fn load(&self) -> SymbolsPickerViewModel {
        let mut vm = self.config.build_view_model();
        for _ in 1..self.pages {
            vm.load_symbols();
        }
        vm
    }
}
