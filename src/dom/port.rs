// src/dom/port.rs
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
    #[error("no match for `{selector}` within {timeout:?}")]
    Timeout { selector: String, timeout: Duration },
    #[error("element access failed: {0}")]
    Element(String),
    #[error("page load failed: {0}")]
    Load(String),
}

/// One element of a rendered page.
pub trait ElementHandle: Sized {
    /// Visible text of the element and its descendants.
    fn text(&self) -> Result<String, DomError>;

    fn attribute(&self, name: &str) -> Result<Option<String>, DomError>;

    /// First descendant matching `selector`.
    fn query_selector(&self, selector: &str) -> Result<Option<Self>, DomError>;
}

/// Query capability over the current page.
pub trait DomPort {
    type Element<'a>: ElementHandle
    where
        Self: 'a;

    /// All matches, in document order.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element<'_>>, DomError>;

    /// First match, or `DomError::Timeout` once `timeout` has elapsed.
    /// Implementations must never wait longer than `timeout`.
    fn wait_for_selector(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<Self::Element<'_>, DomError>;
}

/// Loads the page for one scrape attempt. A failure here is a total scrape failure.
pub trait PageSource {
    type Page: DomPort;

    fn open(&self) -> Result<Self::Page, DomError>;
}
