use crate::error::Result;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Key under which the chosen language is stored
pub const LANG_KEY: &str = "menu_lang";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    menu_lang: Option<String>,
}

/// Persists the menu language between sessions in a small JSON file
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: ~/.config/pour_over_menu/preferences.json
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pour_over_menu")
            .join("preferences.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored language, or `None` on first run.
    /// Unreadable files and unsupported codes count as unset.
    pub fn load_language(&self) -> Option<Language> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Failed to read preferences, starting fresh: {}", e);
                return None;
            }
        };

        let prefs: StoredPreferences = match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Failed to parse preferences, starting fresh: {}", e);
                return None;
            }
        };

        let code = prefs.menu_lang?;
        let language = Language::from_code(&code);
        if language.is_none() {
            log::warn!("Ignoring unsupported stored language: {}", code);
        }
        language
    }

    /// Remember the chosen language
    pub fn save_language(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let prefs = StoredPreferences {
            menu_lang: Some(language.code().to_string()),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&prefs)?)?;
        log::debug!("Saved {}={} to {}", LANG_KEY, language, self.path.display());
        Ok(())
    }
}
