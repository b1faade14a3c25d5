//! Where the menu sheet comes from.
//!
//! The loader only needs "give me the sheet text"; the sources here provide it
//! from the published sheet URL, a local file or memory.

use crate::error::{MenuError, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA, USER_AGENT};
use std::future::Future;
use std::path::PathBuf;

/// Published CSV export of the shop's menu sheet
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR6Zx5IKqnxZH3cyWCusoxwvAejqgVPZqnUVyo-4Xhs-kdOkFKoh0V9W5qi-12hB9BRMvOHzVlLzDNC/pub?gid=1947339755&single=true&output=csv";

const CLIENT_NAME: &str = "pour_over_menu/0.1";

/// Anything that can produce the raw sheet text
pub trait MenuSource {
    /// Short description for log messages
    fn describe(&self) -> String;

    fn fetch_text(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches the sheet over HTTP, bypassing intermediate caches
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl MenuSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_text(&self) -> Result<String> {
        log::info!("Fetching menu sheet from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, CLIENT_NAME)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MenuError::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }
}

/// Reads the sheet from a local CSV file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MenuSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_text(&self) -> Result<String> {
        log::info!("Reading menu sheet from {}", self.path.display());
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Serves fixed text, for tests and piped input
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl MenuSource for StaticSource {
    fn describe(&self) -> String {
        "in-memory sheet".to_string()
    }

    async fn fetch_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Either kind of configured source, picked from a location string
#[derive(Debug, Clone)]
pub enum SheetSource {
    Http(HttpSource),
    File(FileSource),
}

/// `http://` and `https://` locations are fetched, anything else is a file path
pub fn source_for(location: &str) -> SheetSource {
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        SheetSource::Http(HttpSource::new(location))
    } else {
        SheetSource::File(FileSource::new(location))
    }
}

impl MenuSource for SheetSource {
    fn describe(&self) -> String {
        match self {
            SheetSource::Http(source) => source.describe(),
            SheetSource::File(source) => source.describe(),
        }
    }

    async fn fetch_text(&self) -> Result<String> {
        match self {
            SheetSource::Http(source) => source.fetch_text().await,
            SheetSource::File(source) => source.fetch_text().await,
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
