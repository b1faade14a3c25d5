//! Pour-Over Menu
//!
//! Fetches the shop's menu sheet once at startup, then renders the menu and
//! re-renders it after every command typed on stdin.

use clap::Parser;
use pour_over_menu::config::parse_search_fields;
use pour_over_menu::offline_cache::cached_only;
use pour_over_menu::render::render_language_gate;
use pour_over_menu::session::HELP;
use pour_over_menu::{
    source_for, ui_text, CachedSource, Category, Command, Language, MenuConfig, MenuSession,
    MenuSource, OfflineCache, PreferenceStore, Record, RecordLoader, StaticSource, UiState,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Pour-over coffee menu from the shop's published sheet
#[derive(Parser, Debug)]
#[command(name = "pour_over_menu")]
#[command(version, about, long_about = None)]
struct Args {
    /// Sheet URL or path to a local CSV file
    #[arg(short, long)]
    source: Option<String>,

    /// Language for this session (zh, en, yue, ko, ja); remembered for next time
    #[arg(short, long)]
    lang: Option<String>,

    /// Initial tab (all, estate, competition, geisha, limited)
    #[arg(short, long, default_value = "all")]
    category: String,

    /// Initial search query
    #[arg(short, long, default_value = "")]
    query: String,

    /// Comma-separated columns the search scans; `resolved:<base>` uses the active language
    #[arg(long)]
    search_fields: Option<String>,

    /// Directory for the offline copy of the sheet
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Disable the offline copy
    #[arg(long, default_value_t = false)]
    no_cache: bool,

    /// Use the offline copy without fetching
    #[arg(long, default_value_t = false)]
    offline: bool,

    /// Path of the preferences file
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Render once and exit instead of reading commands from stdin
    #[arg(long, default_value_t = false)]
    once: bool,
}

impl Args {
    fn into_config(self) -> MenuConfig {
        let mut config = MenuConfig::default();

        if let Some(source) = self.source {
            config.source = source;
        }
        if self.no_cache {
            config.cache_dir = None;
        } else if let Some(dir) = self.cache_dir {
            config.cache_dir = Some(dir);
        }
        config.offline = self.offline;
        if let Some(path) = self.prefs {
            config.preferences_path = path;
        }
        if let Some(code) = self.lang {
            config.language = Language::from_code(&code);
            if config.language.is_none() {
                log::warn!("Unsupported language '{}', ignoring", code);
            }
        }
        config.category = Category::from_key(&self.category).unwrap_or_else(|| {
            log::warn!("Unknown category '{}', showing all", self.category);
            Category::All
        });
        config.query = self.query;
        if let Some(list) = self.search_fields {
            config.search_fields = parse_search_fields(&list);
        }

        config
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let once = args.once;
    let config = args.into_config();

    log::info!("Starting pour_over_menu...");
    log::info!("Menu source: {}", config.source);

    let prefs = PreferenceStore::new(&config.preferences_path);
    let language = match config.language {
        Some(language) => {
            remember_language(&prefs, language);
            Some(language)
        }
        None => prefs.load_language(),
    };

    let records = load_records(&config).await;

    let mut state = UiState::new(language)
        .with_category(config.category)
        .with_query(config.query.as_str());

    if state.needs_language_gate() && !once {
        if let Some(language) = choose_language(None) {
            remember_language(&prefs, language);
            state = state.with_language(language);
        }
    }

    let mut session = MenuSession::new(records, state, config.search_fields.clone());
    println!("{}", session.render());

    if once {
        return;
    }

    if let Err(e) = run_interactive(&mut session, &prefs) {
        log::error!("Failed to read input: {}", e);
        std::process::exit(1);
    }
}

/// Load the sheet from the configured source, through the offline cache when enabled
async fn load_records(config: &MenuConfig) -> Vec<Record> {
    let source = source_for(&config.source);

    match &config.cache_dir {
        Some(dir) if config.offline => {
            let cache = OfflineCache::new(dir);
            match cached_only(&cache, &source.describe()) {
                Ok(text) => load_from(StaticSource::new(text)).await,
                Err(e) => {
                    log::error!("Offline mode: {}", e);
                    Vec::new()
                }
            }
        }
        Some(dir) => load_from(CachedSource::new(source, OfflineCache::new(dir))).await,
        None => {
            if config.offline {
                log::warn!("--offline has no effect with --no-cache, fetching live");
            }
            load_from(source).await
        }
    }
}

async fn load_from<S: MenuSource>(source: S) -> Vec<Record> {
    RecordLoader::new(source).load().await
}

fn remember_language(prefs: &PreferenceStore, language: Language) {
    if let Err(e) = prefs.save_language(language) {
        log::warn!("Failed to save language preference: {}", e);
    }
}

/// Language gate. Returns `None` when the prompt is dismissed or unavailable.
fn choose_language(current: Option<Language>) -> Option<Language> {
    let text = ui_text(current);
    let items: Vec<String> = Language::ALL
        .iter()
        .map(|lang| format!("{} ({})", lang.as_str(), lang.code()))
        .collect();
    let default = current
        .and_then(|lang| Language::ALL.iter().position(|l| *l == lang))
        .unwrap_or(0);

    println!("{}", text.gate_note);
    match dialoguer::Select::new()
        .with_prompt(text.gate_title)
        .items(&items)
        .default(default)
        .interact_opt()
    {
        Ok(choice) => choice.map(|i| Language::ALL[i]),
        Err(e) => {
            log::warn!("Language prompt unavailable ({}), pick with :lang", e);
            println!("{}", render_language_gate(current));
            None
        }
    }
}

fn run_interactive(session: &mut MenuSession, prefs: &PreferenceStore) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", ui_text(session.state().language()).gate_change);
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let command = Command::parse(&line?);

        match &command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::ShowGate => {
                if let Some(language) = choose_language(session.state().language()) {
                    session.handle(&Command::Language(language.code().to_string()));
                    remember_language(prefs, language);
                }
                println!("{}", session.render());
            }
            _ => {
                if session.handle(&command) {
                    if let Some(language) = session.state().language() {
                        remember_language(prefs, language);
                    }
                }
                println!("{}", session.render());
            }
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
