//! Derives the visible menu from loaded records and the UI state.

use crate::language::Language;
use crate::localization::{resolve, roast_label};
use crate::models::{Category, Record};
use crate::state::UiState;

/// Prefix marking a localized column base in a search field list
pub const RESOLVED_PREFIX: &str = "resolved:";

/// Fields searched by the free-text query, in haystack order.
/// `resolved:flavor_tags` is the tag list for the active language, with fallback.
pub const DEFAULT_SEARCH_FIELDS: &[&str] = &[
    "name_zh",
    "name_en",
    "origin",
    "region",
    "process",
    "roast",
    "flavor_tags_zh",
    "flavor_tags_en",
    "taste",
    "resolved:flavor_tags",
];

/// One entry of the search field list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchField {
    /// A sheet column read as-is
    Column(String),
    /// A localized column base resolved for the active language
    Localized(String),
}

impl SearchField {
    /// `resolved:<base>` gives a localized field, anything else a plain column
    pub fn parse(spec: &str) -> SearchField {
        match spec.strip_prefix(RESOLVED_PREFIX) {
            Some(base) => SearchField::Localized(base.to_string()),
            None => SearchField::Column(spec.to_string()),
        }
    }

    fn value(&self, record: &Record, language: Option<Language>) -> String {
        match self {
            SearchField::Column(column) => record.get(column).to_string(),
            SearchField::Localized(base) => resolve(record, base, language),
        }
    }
}

/// Explicit list of fields the search stage scans.
/// The roast label is always appended to the haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFields {
    fields: Vec<SearchField>,
}

impl Default for SearchFields {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_FIELDS.iter().copied())
    }
}

impl SearchFields {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|f| SearchField::parse(f.as_ref()))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// Lower-cased, space-joined text the query is matched against
    pub fn haystack(&self, record: &Record, language: Option<Language>) -> String {
        self.fields
            .iter()
            .map(|field| field.value(record, language))
            .chain(std::iter::once(roast_label(record.roast()).to_string()))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Records to display, with the default search fields
pub fn visible<'a>(records: &'a [Record], state: &UiState) -> Vec<&'a Record> {
    visible_with(records, state, &SearchFields::default())
}

/// Records to display for `state`, in input order.
///
/// Sold-out items are always hidden; then the category tab and the search
/// query narrow the list. The featured flag never affects visibility.
pub fn visible_with<'a>(
    records: &'a [Record],
    state: &UiState,
    fields: &SearchFields,
) -> Vec<&'a Record> {
    let query = state.query().trim().to_lowercase();

    records
        .iter()
        .filter(|r| is_available(r))
        .filter(|r| in_category(r, state.category()))
        .filter(|r| matches_query(r, &query, state.language(), fields))
        .collect()
}

pub fn is_available(record: &Record) -> bool {
    !record.is_sold_out()
}

pub fn in_category(record: &Record, category: Category) -> bool {
    category.matches(record.category())
}

/// `query` must already be trimmed and lower-cased; empty matches everything
pub fn matches_query(
    record: &Record,
    query: &str,
    language: Option<Language>,
    fields: &SearchFields,
) -> bool {
    query.is_empty() || fields.haystack(record, language).contains(query)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
