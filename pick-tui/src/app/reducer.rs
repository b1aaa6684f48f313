//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, with no side effects. Forwarding input to
//! the picker happens in the event loop (see `services.rs`); the reducer
//! only records what the UI needs to show.

use libemojipick::InputEvent;

use super::actions::Action;
use super::state::{AppState, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === Picker ===
        Action::Picker(InputEvent::TextChanged(query)) => AppState { query, ..state },
        Action::Picker(_) => state,

        Action::QuerySynced(query) => AppState { query, ..state },

        Action::ViewChanged { view, len } => AppState {
            view,
            view_len: len,
            ..state
        },

        // === Outcomes ===
        Action::Selected { glyph, close_after } => {
            let mut selections = state.selections;
            selections.push(glyph.clone());
            AppState {
                should_quit: close_after,
                selections,
                literal: String::new(),
                status: StatusBarState {
                    message: Some(format!("Picked {}", glyph)),
                },
                ..state
            }
        }

        Action::Canceled => AppState {
            should_quit: true,
            canceled: true,
            ..state
        },

        Action::InputMethodToggled => {
            let input_method = state.input_method.toggled();
            AppState {
                input_method,
                literal: String::new(),
                status: StatusBarState {
                    message: Some(format!("Input method: {}", input_method.label())),
                },
                ..state
            }
        }

        Action::LiteralChanged(literal) => AppState { literal, ..state },

        // === Application ===
        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },
    }
}
