use super::{CommandHandler, SymbolListing};
use crate::config::PickerConfig;
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub config: PickerConfig,
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        let loader = self.config.build_loader();
        let listing = SymbolListing {
            symbols: loader.symbols(),
            has_more: None,
        };
        listing.write_to(&mut std::io::stdout().lock(), self.json)
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    pub fn new(config: PickerConfig, json: bool) -> Self {
        Self { config, json }
    }
}
