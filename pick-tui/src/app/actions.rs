//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Actions wrapping an
//! [`InputEvent`] are also forwarded to the picker by the event loop; the
//! reducer only sees their effect on the UI.

use libemojipick::{InputEvent, Output, ViewKind};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Picker ===
    /// Input for the selection engine
    Picker(InputEvent),

    /// The picker's query after it processed an event
    QuerySynced(String),

    /// The picker rebuilt its view
    ViewChanged { view: ViewKind, len: usize },

    // === Picker outcomes ===
    /// An emoji was chosen
    Selected { glyph: String, close_after: bool },

    /// The user backed out with nothing to clear
    Canceled,

    /// The user asked for the other input method
    InputMethodToggled,

    /// Literal text changed while the text input method is active
    LiteralChanged(String),

    // === Application ===
    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,
}

impl From<Output> for Action {
    fn from(output: Output) -> Self {
        match output {
            Output::Selected { glyph, close_after } => Action::Selected { glyph, close_after },
            Output::Canceled => Action::Canceled,
            Output::InputMethodToggled => Action::InputMethodToggled,
        }
    }
}
