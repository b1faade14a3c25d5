//! Plain-text rendering of the visible menu

use crate::language::Language;
use crate::localization::{resolve, roast_label, ui_text};
use crate::models::{Category, Record};
use crate::state::UiState;

const NOT_AVAILABLE: &str = "N/A";

/// Display-ready view of one menu record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCard {
    pub title: String,
    pub subtitle: String,
    pub featured: bool,
    pub roast_badge: String,
    pub flavor_tags: Vec<String>,
    pub taste: String,
    pub origin: String,
    pub process: String,
    pub variety: String,
    pub altitude: String,
    pub price: String,
}

impl MenuCard {
    pub fn from_record(record: &Record, language: Option<Language>) -> Self {
        let roast = record.roast();
        let roast_badge = if roast.is_empty() {
            String::new()
        } else {
            format!("{}焙 {}", roast_label(roast), roast)
        };

        Self {
            title: record.get("name_zh").to_string(),
            subtitle: record.get("name_en").to_string(),
            featured: record.is_featured(),
            roast_badge,
            flavor_tags: split_tags(&resolve(record, "flavor_tags", language)),
            // The sheet stores line breaks in tasting notes as a literal "\n"
            taste: record.get("taste").replace("\\n", "\n"),
            origin: or_not_available(record.get("origin")),
            process: or_not_available(record.get("process")),
            variety: or_not_available(record.get("variety")),
            altitude: or_not_available(record.get("altitude")),
            price: record.get("price").to_string(),
        }
    }
}

/// Split a pipe-delimited tag list, dropping empty entries
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split('|')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// Header block: title, subtitle and the tab bar with the active tab marked
pub fn render_header(state: &UiState) -> String {
    let text = ui_text(state.language());
    let mut output = String::new();

    let lang_tag = state
        .language()
        .unwrap_or(Language::Chinese)
        .document_lang();
    output.push_str(&format!("{}  [{}]\n", text.title, lang_tag));
    output.push_str(&format!("{}\n\n", text.subtitle));

    let tabs: Vec<String> = Category::ALL
        .iter()
        .map(|&category| {
            let label = text.tab_label(category);
            if category == state.category() {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();
    output.push_str(&tabs.join(" | "));
    output.push('\n');

    if !state.query().trim().is_empty() {
        output.push_str(&format!("{} {}\n", text.search_placeholder, state.query().trim()));
    }

    output
}

pub fn render_card(card: &MenuCard, language: Option<Language>) -> String {
    let text = ui_text(language);
    let mut output = String::new();

    let star = if card.featured { "⭐ " } else { "" };
    output.push_str(&format!("{}{}", star, card.title));
    if !card.roast_badge.is_empty() {
        output.push_str(&format!("  ({})", card.roast_badge));
    }
    if card.featured {
        output.push_str(&format!("  [{}]", text.featured_badge));
    }
    output.push('\n');

    if !card.subtitle.is_empty() {
        output.push_str(&format!("  {}\n", card.subtitle));
    }
    if !card.flavor_tags.is_empty() {
        output.push_str(&format!("  #{}\n", card.flavor_tags.join(" #")));
    }
    if !card.taste.is_empty() {
        output.push_str("  風味 / Taste:\n");
        for line in card.taste.lines() {
            output.push_str(&format!("    {}\n", line.trim()));
        }
    }

    output.push_str(&format!(
        "  產區 / Origin: {}  處理法 / Process: {}\n",
        card.origin, card.process
    ));
    output.push_str(&format!(
        "  品種 / Variety: {}  海拔 / Altitude: {}\n",
        card.variety, card.altitude
    ));
    if !card.price.is_empty() {
        output.push_str(&format!("  $ {}\n", card.price));
    }

    output
}

/// Full menu for the visible records, or the localized empty message
pub fn render_menu(records: &[&Record], state: &UiState) -> String {
    let language = state.language();
    let mut output = render_header(state);
    output.push('\n');

    if records.is_empty() {
        output.push_str(ui_text(language).empty);
        output.push('\n');
        return output;
    }

    let cards: Vec<String> = records
        .iter()
        .map(|record| render_card(&MenuCard::from_record(record, language), language))
        .collect();
    output.push_str(&cards.join("\n"));

    output
}

/// Language gate prompt shown on first run
pub fn render_language_gate(language: Option<Language>) -> String {
    let text = ui_text(language);
    let mut output = format!("{}\n{}\n", text.gate_title, text.gate_note);
    for lang in Language::ALL {
        output.push_str(&format!("  {:<4} {}\n", lang.code(), lang.as_str()));
    }
    output
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
