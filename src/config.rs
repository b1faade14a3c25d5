//! Runtime configuration assembled from command-line arguments

use crate::filter::SearchFields;
use crate::language::Language;
use crate::models::Category;
use crate::offline_cache::OfflineCache;
use crate::preferences::PreferenceStore;
use crate::source::DEFAULT_SHEET_URL;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Sheet URL or local CSV path
    pub source: String,
    /// Offline cache directory, `None` disables the cache
    pub cache_dir: Option<PathBuf>,
    /// Serve the cached sheet without fetching
    pub offline: bool,
    pub preferences_path: PathBuf,
    /// Language forced for this run; overrides and replaces the stored one
    pub language: Option<Language>,
    pub category: Category,
    pub query: String,
    pub search_fields: SearchFields,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SHEET_URL.to_string(),
            cache_dir: Some(OfflineCache::default_dir()),
            offline: false,
            preferences_path: PreferenceStore::default_path(),
            language: None,
            category: Category::All,
            query: String::new(),
            search_fields: SearchFields::default(),
        }
    }
}

/// Parse a comma-separated column list, e.g. `name_en,origin,taste`
pub fn parse_search_fields(list: &str) -> SearchFields {
    SearchFields::new(
        list.split(',')
            .map(str::trim)
            .filter(|column| !column.is_empty()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SearchField;

    #[test]
    fn default_config_uses_published_sheet() {
        let config = MenuConfig::default();
        assert_eq!(config.source, DEFAULT_SHEET_URL);
        assert!(config.cache_dir.is_some());
        assert_eq!(config.category, Category::All);
        assert_eq!(config.search_fields, SearchFields::default());
    }

    #[test]
    fn search_field_list_parsing() {
        let fields = parse_search_fields(" name_en, price,,resolved:taste ");
        assert_eq!(
            fields.fields(),
            [
                SearchField::Column("name_en".to_string()),
                SearchField::Column("price".to_string()),
                SearchField::Localized("taste".to_string()),
            ]
        );
    }
}
