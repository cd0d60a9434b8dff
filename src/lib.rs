pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod picker;

pub use catalog::{SymbolLoader, DEFAULT_PAGE_SIZE};
pub use error::{GlyphPickError, Result};
pub use picker::SymbolsPickerViewModel;
