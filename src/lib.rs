//! Pour-Over Menu - localized coffee menu from a published spreadsheet
//!
//! Loads the shop's menu sheet (CSV), resolves localized text with an
//! active-language → English → Chinese fallback, and derives the visible menu
//! from the chosen tab and search query.

pub mod config;
pub mod csv_parser;
pub mod error;
pub mod filter;
pub mod language;
pub mod loader;
pub mod localization;
pub mod models;
pub mod offline_cache;
pub mod preferences;
pub mod render;
pub mod session;
pub mod source;
pub mod state;

pub use config::MenuConfig;
pub use csv_parser::parse_csv;
pub use error::{MenuError, Result};
pub use filter::{visible, visible_with, SearchField, SearchFields};
pub use language::Language;
pub use loader::{records_from_text, RecordLoader};
pub use localization::{resolve, roast_label, ui_text};
pub use models::{Category, Record};
pub use offline_cache::{CachedSource, OfflineCache};
pub use preferences::PreferenceStore;
pub use session::{Command, MenuSession};
pub use source::{source_for, FileSource, HttpSource, MenuSource, SheetSource, StaticSource};
pub use state::UiState;
