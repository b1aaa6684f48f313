//! emojipick - emoji selection engine
//!
//! This library holds everything a front end needs to let a user find and
//! pick an emoji: the built-in catalog, ranked text search, variant
//! filtering, a bounded recents list and the keyboard navigation state
//! machine. Front ends translate their native input into
//! [`InputEvent`]s and hand them to a [`Picker`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod logging;
pub mod matcher;
pub mod navigation;
pub mod picker;
pub mod recents;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogView};
pub use config::Config;
pub use error::{PickError, Result};
pub use events::{InputEvent, Notification, Output, ViewKind};
pub use matcher::{search, MatchTier};
pub use navigation::NavigationState;
pub use picker::{Page, Picker, PickerOptions};
pub use recents::RecencyList;
pub use storage::{FileRecentsStore, MemoryRecentsStore, RecentsStore};
pub use types::{Direction, Emoji, FilterSettings, GridSize};
