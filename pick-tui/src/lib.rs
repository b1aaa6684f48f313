//! pick-tui library
//!
//! Terminal front end for the emojipick selection engine. Exports the
//! application modules for testing.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{map_key, reduce, Action, AppState};
pub use error::{Result, TuiError};
pub use services::ServiceHandle;
