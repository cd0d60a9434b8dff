use super::{CommandHandler, SymbolListing};
use crate::config::PickerConfig;
use crate::Result;

/// Handler for the `search` command
pub struct SearchCommand {
    pub config: PickerConfig,
    pub query: String,
    pub json: bool,
}

impl CommandHandler for SearchCommand {
    fn execute(&self) -> Result<()> {
        let results = self.config.build_loader().search_by_prefix(&self.query);
        let listing = SymbolListing {
            symbols: &results,
            has_more: None,
        };
        listing.write_to(&mut std::io::stdout().lock(), self.json)
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    pub fn new(config: PickerConfig, query: String, json: bool) -> Self {
        Self {
            config,
            query,
            json,
        }
    }
}
