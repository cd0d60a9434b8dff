pub mod browse;
pub mod list;
pub mod pick;
pub mod search;

use serde::Serialize;
use std::io::Write;

use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Glyph names as printed by the commands
#[derive(Debug, Serialize)]
pub struct SymbolListing<'a> {
    pub symbols: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

impl SymbolListing<'_> {
    /// Write one name per line, or a JSON object when `json` is set
    pub fn write_to<W: Write>(&self, out: &mut W, json: bool) -> Result<()> {
        if json {
            serde_json::to_writer_pretty(&mut *out, self)?;
            writeln!(out)?;
        } else {
            for name in self.symbols {
                writeln!(out, "{}", name)?;
            }
        }
        Ok(())
    }
}
