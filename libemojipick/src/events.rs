//! Input events, picker outputs and change notifications
//!
//! Front ends translate their native key, pointer and wheel events into
//! [`InputEvent`]s and feed them to the picker one at a time. The picker
//! answers each event with at most one [`Output`] and publishes
//! [`Notification`]s on its [`EventBus`] whenever the view, the cursor or
//! the recents list change.
//!
//! # Example
//!
//! ```
//! use libemojipick::events::{EventBus, Notification};
//!
//! let mut bus = EventBus::new();
//! let receiver = bus.subscribe();
//!
//! bus.emit(Notification::CursorMoved { cursor: Some(3) });
//!
//! assert_eq!(receiver.try_recv().unwrap(), Notification::CursorMoved { cursor: Some(3) });
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// Notification receiver type alias
pub type NotificationReceiver = Receiver<Notification>;

/// Discrete input delivered by a front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// The query text changed to this value
    TextChanged(String),
    /// Select the highlighted emoji
    Commit { keep_open: bool },
    /// Escape
    Cancel,
    Arrow(Direction),
    /// Enter or page through the unfiltered browse-all list
    BrowseAllToggle,
    /// Ask the host to switch to another input method
    InputMethodToggle,
    /// Wheel movement, one arrow step per unit. Positive scrolls down.
    ScrollDelta(i32),
}

/// Result of an interaction, handed back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Output {
    /// An emoji was chosen. `close_after` is false when the user asked to
    /// keep the picker open.
    Selected { glyph: String, close_after: bool },
    /// Escape with nothing left to clear
    Canceled,
    InputMethodToggled,
}

/// Which list the picker is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Recents,
    Search,
    HelpBrowse,
}

/// Change notifications for renderers and persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// The view was rebuilt
    ViewChanged {
        view: ViewKind,
        len: usize,
        cursor: Option<usize>,
    },
    /// Only the cursor moved
    CursorMoved { cursor: Option<usize> },
    /// An emoji was recorded in the recents list
    RecentsChanged { len: usize },
    /// New filter settings were applied
    SettingsChanged,
}

/// Fan-out of notifications to any number of subscribers.
///
/// Sending never blocks. Subscribers whose receiver was dropped are
/// removed on the next emit.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<Notification>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to notifications emitted after this call
    pub fn subscribe(&mut self) -> NotificationReceiver {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    /// Emit a notification to all live subscribers
    pub fn emit(&mut self, notification: Notification) {
        self.subscribers
            .retain(|sender| sender.send(notification.clone()).is_ok());
    }

    /// Get the number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
