// src/params.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{options::parse_areas, Config};

/// Command-line overrides. Anything left `None` keeps the environment's value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub once: bool,                  // run one cycle, then exit
    pub html: Option<PathBuf>,       // read the page from a saved file instead of fetching
    pub areas: Option<Vec<String>>,  // override SEARCH_AREAS
    pub interval: Option<u64>,       // override CHECK_INTERVAL (seconds)
}

impl Params {
    pub fn new() -> Self { Self::default() }

    pub fn set_areas(&mut self, raw: &str) {
        self.areas = Some(parse_areas(raw));
    }

    pub fn apply(&self, cfg: &mut Config) {
        if let Some(areas) = &self.areas {
            cfg.search_areas = areas.clone();
        }
        if let Some(secs) = self.interval {
            cfg.check_interval = Duration::from_secs(secs);
        }
    }
}
