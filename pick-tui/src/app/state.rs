//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`). The selection engine keeps its own state;
//! this is only what the terminal front end needs on top of it.

use libemojipick::ViewKind;

/// Root application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Query text as shown in the input line
    pub query: String,

    /// Which list the picker shows
    pub view: ViewKind,

    /// Entries in that list
    pub view_len: usize,

    /// Glyphs picked during this session, in order
    pub selections: Vec<String>,

    /// Ended with Escape rather than a selection
    pub canceled: bool,

    /// Label of the active input method
    pub input_method: InputMethod,

    /// Text typed while the text input method is active
    pub literal: String,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// What typed text is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMethod {
    /// Typed text searches the catalog
    #[default]
    Search,
    /// Typed text is inserted literally
    Text,
}

impl InputMethod {
    pub fn toggled(self) -> Self {
        match self {
            InputMethod::Search => InputMethod::Text,
            InputMethod::Text => InputMethod::Search,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputMethod::Search => "emoji",
            InputMethod::Text => "text",
        }
    }
}

/// Status bar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            query: String::new(),
            view: ViewKind::Recents,
            view_len: 0,
            selections: Vec::new(),
            canceled: false,
            input_method: InputMethod::default(),
            literal: String::new(),
            status: StatusBarState::default(),
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("EMOJIPICK_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("EMOJIPICK_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(250);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit status for the process: success once anything was picked
    pub fn exit_code(&self) -> i32 {
        if self.selections.is_empty() && self.canceled {
            1
        } else {
            0
        }
    }
}
