// src/dom/source.rs
use std::{fs, path::PathBuf};

use reqwest::blocking::Client;
use tracing::info;

use super::page::StaticPage;
use super::port::{DomError, PageSource};
use crate::config::consts::NAVIGATION_TIMEOUT;
use crate::core::net;

/// Fetches the listing page over HTTP and parses the returned markup.
/// Script-rendered content is not executed.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str, proxy: Option<&str>) -> Result<Self, DomError> {
        let client = net::build_client(proxy, NAVIGATION_TIMEOUT)
            .map_err(|e| DomError::Load(e.to_string()))?;
        Ok(Self { client, url: s!(url) })
    }
}

impl PageSource for HttpSource {
    type Page = StaticPage;

    fn open(&self) -> Result<StaticPage, DomError> {
        info!(url = %self.url, "navigating");
        let body = net::http_get(&self.client, &self.url).map_err(|e| DomError::Load(e.to_string()))?;
        Ok(StaticPage::parse(&body))
    }
}

/// Reads a saved copy of the listing page.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FileSource {
    type Page = StaticPage;

    fn open(&self) -> Result<StaticPage, DomError> {
        let html = fs::read_to_string(&self.path)
            .map_err(|e| DomError::Load(format!("{}: {e}", self.path.display())))?;
        Ok(StaticPage::parse(&html))
    }
}
