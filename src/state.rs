//! Immutable UI state and its transitions

use crate::language::Language;
use crate::models::Category;

/// Everything the filter pipeline needs besides the records themselves.
///
/// Transitions consume nothing and return a new value; the previous state stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    language: Option<Language>,
    category: Category,
    query: String,
}

impl UiState {
    /// Startup state: category reset to `All`, empty query
    pub fn new(language: Option<Language>) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True until a language has been chosen
    pub fn needs_language_gate(&self) -> bool {
        self.language.is_none()
    }

    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language: Some(language),
            ..self.clone()
        }
    }

    /// Switch language by code. Unsupported codes leave the state unchanged.
    pub fn with_language_code(&self, code: &str) -> Self {
        match Language::from_code(code) {
            Some(language) => self.with_language(language),
            None => {
                log::debug!("Ignoring unsupported language code: {:?}", code);
                self.clone()
            }
        }
    }

    pub fn with_category(&self, category: Category) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }
}
