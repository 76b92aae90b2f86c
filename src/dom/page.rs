// src/dom/page.rs
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};

use super::port::{DomError, DomPort, ElementHandle};
use crate::core::sanitize::normalize_ws;

fn parse_selector(selector: &str) -> Result<Selector, DomError> {
    Selector::parse(selector).map_err(|e| DomError::Selector {
        selector: s!(selector),
        reason: e.to_string(),
    })
}

/// A fully parsed HTML document.
pub struct StaticPage {
    doc: Html,
}

impl StaticPage {
    pub fn parse(html: &str) -> Self {
        Self { doc: Html::parse_document(html) }
    }
}

impl DomPort for StaticPage {
    type Element<'a> = StaticElement<'a> where Self: 'a;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<StaticElement<'_>>, DomError> {
        let sel = parse_selector(selector)?;
        Ok(self.doc.select(&sel).map(StaticElement).collect())
    }

    // A parsed document never changes, so the answer is known immediately.
    fn wait_for_selector(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<StaticElement<'_>, DomError> {
        let sel = parse_selector(selector)?;
        self.doc
            .select(&sel)
            .next()
            .map(StaticElement)
            .ok_or_else(|| DomError::Timeout { selector: s!(selector), timeout })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StaticElement<'a>(ElementRef<'a>);

impl<'a> ElementHandle for StaticElement<'a> {
    fn text(&self) -> Result<String, DomError> {
        // Inline markup can split a word; only real whitespace separates.
        let raw: String = self.0.text().collect();
        Ok(normalize_ws(&raw))
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.0.value().attr(name).map(str::to_string))
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self>, DomError> {
        let sel = parse_selector(selector)?;
        Ok(self.0.select(&sel).next().map(StaticElement))
    }
}
