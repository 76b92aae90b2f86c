// src/engine/types.rs
use std::hash::{Hash, Hasher};

/// A discovered posting.
///
/// Identity is `(title, location)` only, trimmed and case-sensitive. The site's
/// ids and URLs are not stable, so two postings that differ only in `job_id`,
/// `url`, `pay` or `schedule` are the same posting.
#[derive(Clone, Debug, Default)]
pub struct Job {
    pub title: String,
    pub location: String,
    pub job_id: String,
    pub url: String,
    pub pay: String,
    pub schedule: String,
}

impl Job {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self { title: title.into(), location: location.into(), ..Default::default() }
    }

    pub fn key(&self) -> JobKey {
        JobKey {
            title: s!(self.title.trim()),
            location: s!(self.location.trim()),
        }
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.title.trim() == other.title.trim() && self.location.trim() == other.location.trim()
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.trim().hash(state);
        self.location.trim().hash(state);
    }
}

/// The durable part of a [`Job`]; what the seen-set remembers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JobKey {
    pub title: String,
    pub location: String,
}

/// Outcome of one scrape attempt.
/// When `error` is set the attempt failed outright and `jobs` must be ignored.
#[derive(Clone, Debug, Default)]
pub struct ScraperResult {
    pub jobs: Vec<Job>,
    pub error: Option<String>,
}

impl ScraperResult {
    pub fn ok(jobs: Vec<Job>) -> Self {
        Self { jobs, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { jobs: Vec::new(), error: Some(error.into()) }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/* Declarative page description */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field { Title, Location, Pay, Schedule }

/// Ordered selectors for one field, scoped to a card. First non-empty text wins.
#[derive(Clone, Copy, Debug)]
pub struct FieldChain {
    pub field: Field,
    pub selectors: &'static [&'static str],
}

#[derive(Debug)]
pub struct BoardSpec {
    pub name: &'static str,
    /// Job-card selectors, most specific first.
    pub card_selectors: &'static [&'static str],
    pub fields: &'static [FieldChain],
    /// Card attribute holding the posting link.
    pub link_attr: &'static str,
    /// Elements scanned by the generic fallback.
    pub anchor_selector: &'static str,
    /// Lower-case keywords; a generic candidate must mention one.
    pub keywords: &'static [&'static str],
    /// Origin that site-relative posting links resolve against.
    pub origin: &'static str,
}

impl BoardSpec {
    pub fn chain(&self, field: Field) -> &'static [&'static str] {
        self.fields
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.selectors)
            .unwrap_or(&[])
    }
}
