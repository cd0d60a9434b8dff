//! Picker state for a presentation layer
//!
//! [`SymbolsPickerViewModel`] owns the displayed glyph names and exposes the
//! load/search/reset hooks a UI binds to. With the `tui` feature,
//! [`SearchBinding`] and [`SymbolsPicker`] wire a text field and a selection
//! on top of it.

mod observable;
mod view_model;

#[cfg(feature = "tui")]
mod search;
#[cfg(feature = "tui")]
mod session;

pub use observable::{Observable, SubscriptionId};
pub use view_model::{SymbolsPickerViewModel, DEFAULT_SEARCH_LABEL};

#[cfg(feature = "tui")]
pub use search::SearchBinding;
#[cfg(feature = "tui")]
pub use session::SymbolsPicker;
#[cfg(feature = "tui")]
pub use tui_input::InputRequest;
