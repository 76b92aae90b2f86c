// tests/common/mod.rs
//
// Scripted DOM port: every selector answer is spelled out up front, elements
// can be made to fail, and every wait (selector and timeout) is recorded.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use job_scrape::dom::{DomError, DomPort, ElementHandle, PageSource, StaticPage};
use job_scrape::engine::Job;
use job_scrape::notify::{Alert, Notifier, NotifyError};

#[derive(Clone, Debug, Default)]
pub struct FakeEl {
    text: String,
    attrs: HashMap<String, String>,
    children: HashMap<String, FakeEl>,
    broken: bool,
}

impl FakeEl {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string(), ..Default::default() }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn child(mut self, selector: &str, el: FakeEl) -> Self {
        self.children.insert(selector.to_string(), el);
        self
    }

    /// Every access fails, like a node detached mid-read.
    pub fn broken() -> Self {
        Self { broken: true, ..Default::default() }
    }

    fn check(&self) -> Result<(), DomError> {
        if self.broken {
            return Err(DomError::Element("node is detached".to_string()));
        }
        Ok(())
    }
}

impl ElementHandle for FakeEl {
    fn text(&self) -> Result<String, DomError> {
        self.check()?;
        Ok(self.text.clone())
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, DomError> {
        self.check()?;
        Ok(self.attrs.get(name).cloned())
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self>, DomError> {
        self.check()?;
        Ok(self.children.get(selector).cloned())
    }
}

#[derive(Default)]
pub struct ScriptedPage {
    matches: HashMap<String, Vec<FakeEl>>,
    pub waits: RefCell<Vec<(String, Duration)>>,
}

impl ScriptedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, selector: &str, els: Vec<FakeEl>) -> Self {
        self.matches.insert(selector.to_string(), els);
        self
    }

    /// Selectors waited on, in order.
    pub fn waited(&self) -> Vec<String> {
        self.waits.borrow().iter().map(|(sel, _)| sel.clone()).collect()
    }
}

impl DomPort for ScriptedPage {
    type Element<'a> = FakeEl where Self: 'a;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<FakeEl>, DomError> {
        Ok(self.matches.get(selector).cloned().unwrap_or_default())
    }

    fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<FakeEl, DomError> {
        self.waits.borrow_mut().push((selector.to_string(), timeout));
        self.matches
            .get(selector)
            .and_then(|els| els.first().cloned())
            .ok_or_else(|| DomError::Timeout { selector: selector.to_string(), timeout })
    }
}

/// Serves a fresh parse of the current HTML on every open; HTML can be swapped between cycles.
pub struct FixtureSource {
    pub html: RefCell<Result<String, String>>,
}

impl FixtureSource {
    pub fn new(html: &str) -> Self {
        Self { html: RefCell::new(Ok(html.to_string())) }
    }

    pub fn set(&self, html: &str) {
        *self.html.borrow_mut() = Ok(html.to_string());
    }

    pub fn fail(&self, msg: &str) {
        *self.html.borrow_mut() = Err(msg.to_string());
    }
}

impl PageSource for FixtureSource {
    type Page = StaticPage;

    fn open(&self) -> Result<StaticPage, DomError> {
        match &*self.html.borrow() {
            Ok(html) => Ok(StaticPage::parse(html)),
            Err(msg) => Err(DomError::Load(msg.clone())),
        }
    }
}

/// Keeps every alert it is handed; can be told to fail.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: RefCell<Vec<Alert>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        self.sent.borrow_mut().push(alert.clone());
        if self.fail {
            return Err(NotifyError::Rejected("500 Internal Server Error".to_string()));
        }
        Ok(())
    }
}

impl Notifier for &RecordingNotifier {
    fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        (**self).send(alert)
    }
}

/// `<li class="job-card">` markup for one posting.
pub fn card(title: &str, location: &str) -> String {
    format!(
        r#"<li class="job-card"><h3>{title}</h3><span class="location">{location}</span></li>"#
    )
}

pub fn listing(cards: &[String]) -> String {
    format!("<html><body><ul>{}</ul></body></html>", cards.concat())
}

pub fn titles(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|j| j.title.as_str()).collect()
}

impl PageSource for &FixtureSource {
    type Page = StaticPage;

    fn open(&self) -> Result<StaticPage, DomError> {
        (**self).open()
    }
}
