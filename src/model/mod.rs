//! Domain model types (pure).
//!
//! Plain data shared by the client, the filter, the exporters and the view.

pub mod book;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use book::{format_date, next_entry_id, parse_date, BookRecord, DATE_FORMAT};
pub use error::{AppError, CatalogError, ExportError};
pub use key_action::KeyAction;
