//! Interactive menu session: user commands in, full re-render out.

use crate::filter::{visible_with, SearchFields};
use crate::models::{Category, Record};
use crate::render::render_menu;
use crate::state::UiState;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:lang <code>`
    Language(String),
    /// `:cat <category>`
    Category(String),
    /// `:clear` resets the search box
    ClearSearch,
    /// `:gate` shows the language chooser again
    ShowGate,
    /// `:help`
    Help,
    /// `:quit` / `:q`
    Quit,
    /// Anything else is typed into the search box
    Search(String),
}

pub const HELP: &str = "\
Commands:
  :lang <zh|en|yue|ko|ja>                          change language
  :cat <all|estate|competition|geisha|limited>     switch tab
  :clear                                           clear the search
  :gate                                            choose language again
  :quit                                            exit
Any other input searches the menu.";

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Search(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "lang" | "language" => Command::Language(arg.to_string()),
            "cat" | "tab" | "category" => Command::Category(arg.to_string()),
            "clear" => Command::ClearSearch,
            "gate" => Command::ShowGate,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Search(line.to_string()),
        }
    }
}

/// Next UI state after a command. Unknown languages and tabs leave it unchanged.
pub fn apply(state: &UiState, command: &Command) -> UiState {
    match command {
        Command::Language(code) => state.with_language_code(code),
        Command::Category(key) => match Category::from_key(key) {
            Some(category) => state.with_category(category),
            None => {
                log::debug!("Ignoring unknown category: {:?}", key);
                state.clone()
            }
        },
        Command::ClearSearch => state.with_query(""),
        Command::Search(query) => state.with_query(query.as_str()),
        Command::ShowGate | Command::Help | Command::Quit => state.clone(),
    }
}

/// Loaded records plus the current UI state
pub struct MenuSession {
    records: Vec<Record>,
    state: UiState,
    fields: SearchFields,
}

impl MenuSession {
    pub fn new(records: Vec<Record>, state: UiState, fields: SearchFields) -> Self {
        Self {
            records,
            state,
            fields,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn visible(&self) -> Vec<&Record> {
        visible_with(&self.records, &self.state, &self.fields)
    }

    /// Rebuild the whole menu for the current state
    pub fn render(&self) -> String {
        render_menu(&self.visible(), &self.state)
    }

    /// Apply a command. Returns true when the active language changed.
    pub fn handle(&mut self, command: &Command) -> bool {
        let next = apply(&self.state, command);
        let language_changed = next.language() != self.state.language();
        self.state = next;
        language_changed
    }
}
