/// Languages the menu can be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Chinese,
    English,
    Cantonese,
    Korean,
    Japanese,
}

impl Language {
    /// All supported languages, in the order the language gate offers them
    pub const ALL: [Language; 5] = [
        Language::Chinese,
        Language::English,
        Language::Cantonese,
        Language::Korean,
        Language::Japanese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Chinese => "中文",
            Language::English => "English",
            Language::Cantonese => "廣東話",
            Language::Korean => "한국어",
            Language::Japanese => "日本語",
        }
    }

    /// Column suffix used by the sheet (`name_en`, `flavor_tags_ja`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
            Language::Cantonese => "yue",
            Language::Korean => "ko",
            Language::Japanese => "ja",
        }
    }

    /// Look up a supported language by its code. Unknown codes give `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Language tag for the rendered document
    pub fn document_lang(&self) -> &'static str {
        match self {
            Language::Chinese => "zh-Hant",
            other => other.code(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
