//! Picker adapter for the TUI
//!
//! Bridges the selection engine and the synchronous event loop. The loop
//! hands every action to [`ServiceHandle::dispatch`], which runs the pure
//! reducer, forwards picker input to the engine, and folds the engine's
//! output and notifications back into UI state.
//!
//! # Example
//!
//! ```no_run
//! use libemojipick::{Config, Direction, InputEvent};
//! use pick_tui::app::{Action, AppState};
//! use pick_tui::services::ServiceHandle;
//!
//! # fn example() -> pick_tui::error::Result<()> {
//! let mut services = ServiceHandle::new(&Config::load()?)?;
//! let state = services.sync(AppState::new());
//!
//! let state = services.dispatch(state, Action::Picker(InputEvent::TextChanged("cat".into())));
//! let state = services.dispatch(state, Action::Picker(InputEvent::Arrow(Direction::Right)));
//! assert_eq!(state.query, "cat");
//! # Ok(())
//! # }
//! ```

use libemojipick::events::NotificationReceiver;
use libemojipick::{Config, Notification, Picker};

use crate::app::{reduce, Action, AppState};
use crate::error::Result;

/// Owns the picker and its notification stream
pub struct ServiceHandle {
    picker: Picker,
    notifications: NotificationReceiver,
}

impl ServiceHandle {
    /// Create a picker from configuration, with recents persisted to disk
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_picker(Picker::from_config(config)?))
    }

    /// Wrap an existing picker
    pub fn with_picker(mut picker: Picker) -> Self {
        let notifications = picker.subscribe();
        Self {
            picker,
            notifications,
        }
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Bring UI state in line with the picker, e.g. right after startup
    pub fn sync(&mut self, state: AppState) -> AppState {
        let state = reduce(
            state,
            Action::ViewChanged {
                view: self.picker.state().kind(),
                len: self.picker.view_len(),
            },
        );
        self.picker.set_input_method(state.input_method.label());
        self.drain(reduce(state, Action::QuerySynced(self.picker.query().to_string())))
    }

    /// Apply one action: reduce it, and forward picker input to the engine
    pub fn dispatch(&mut self, state: AppState, action: Action) -> AppState {
        let state = reduce(state, action.clone());
        let Action::Picker(event) = action else {
            return state;
        };

        let state = match self.picker.handle(event) {
            Some(output) => {
                tracing::debug!(?output, "Picker output");
                reduce(state, output.into())
            }
            None => state,
        };
        self.picker.set_input_method(state.input_method.label());

        let state = self.drain(state);
        reduce(state, Action::QuerySynced(self.picker.query().to_string()))
    }

    fn drain(&self, mut state: AppState) -> AppState {
        for notification in self.notifications.try_iter() {
            if let Notification::ViewChanged { view, len, .. } = notification {
                state = reduce(state, Action::ViewChanged { view, len });
            }
        }
        state
    }
}
