//! Lookup source crate: tabular key→record reads for the handlers.
//!
//! ## Modules
//!
//! - [`error`] – LookupError (source-unavailable conditions)
//! - [`models`] – LookupRecord and row matching
//! - [`source`] – LookupSource trait
//! - [`sheets`] – GoogleSheetsSource (Sheets values API)

mod error;
mod models;
mod sheets;
mod source;

pub use error::LookupError;
pub use models::{find_by_code, LookupRecord, CODE_COLUMN, FILEPATH_COLUMN};
pub use sheets::GoogleSheetsSource;
pub use source::LookupSource;
