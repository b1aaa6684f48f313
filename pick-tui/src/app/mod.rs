//! Application module
//!
//! Contains the front-end architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//! - Keymap: Pure function (Event, State) -> Action

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use keymap::{map_event, map_key};
pub use reducer::reduce;
pub use state::{AppState, InputMethod, StatusBarState, UiConfig};
