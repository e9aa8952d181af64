//! pocketwise-store: file-backed loading of the context a conversation needs.

pub mod bundle;
pub mod csv_import;
pub mod error;
pub mod select;

pub use bundle::{load_bundle, save_bundle};
pub use csv_import::{import_transactions_csv, read_transactions};
pub use error::{Result, StoreError};
pub use select::{select_context, DEFAULT_RECENT_LIMIT};
