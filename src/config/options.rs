// src/config/options.rs
use std::{env, path::PathBuf, time::Duration};

use thiserror::Error;

use super::consts::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    BadInterval { var: &'static str, value: String },
}

/// Runtime configuration, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Discord webhook; `None` means alerts are skipped.
    pub webhook_url: Option<String>,
    pub proxy_url: Option<String>,
    /// Empty = no area filtering.
    pub search_areas: Vec<String>,
    pub check_interval: Duration,
    /// Opaque browser setting; carried through, not interpreted here.
    pub headless: bool,
    pub base_url: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            proxy_url: None,
            search_areas: parse_areas(DEFAULT_SEARCH_AREAS),
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS),
            headless: true,
            base_url: s!(DEFAULT_BASE_URL),
            log_file: None,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        cfg.webhook_url = non_empty("DISCORD_WEBHOOK_URL");
        cfg.proxy_url = non_empty("PROXY_URL");
        if let Some(areas) = get("SEARCH_AREAS") {
            cfg.search_areas = parse_areas(&areas);
        }
        if let Some(raw) = non_empty("CHECK_INTERVAL") {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::BadInterval {
                var: "CHECK_INTERVAL",
                value: raw.clone(),
            })?;
            cfg.check_interval = Duration::from_secs(secs);
        }
        if let Some(h) = get("HEADLESS") {
            cfg.headless = h.trim().eq_ignore_ascii_case("true");
        }
        if let Some(url) = non_empty("BASE_URL") {
            cfg.base_url = url;
        }
        cfg.log_file = non_empty("LOG_FILE").map(PathBuf::from);
        Ok(cfg)
    }
}

/// "London, Leeds,," → ["London", "Leeds"]
pub fn parse_areas(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.search_areas, vec!["London"]);
        assert_eq!(cfg.check_interval, Duration::from_secs(300));
        assert!(cfg.webhook_url.is_none());
        assert!(cfg.headless);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = Config::from_lookup(lookup(&[
            ("DISCORD_WEBHOOK_URL", "https://discord.test/hook"),
            ("PROXY_URL", "http://u:p@proxy:8080"),
            ("SEARCH_AREAS", " Leeds , , Bristol "),
            ("CHECK_INTERVAL", "60"),
            ("HEADLESS", "FALSE"),
            ("BASE_URL", "https://jobs.test/"),
            ("LOG_FILE", "watch.log"),
        ]))
        .unwrap();
        assert_eq!(cfg.webhook_url.as_deref(), Some("https://discord.test/hook"));
        assert_eq!(cfg.proxy_url.as_deref(), Some("http://u:p@proxy:8080"));
        assert_eq!(cfg.search_areas, vec!["Leeds", "Bristol"]);
        assert_eq!(cfg.check_interval, Duration::from_secs(60));
        assert!(!cfg.headless);
        assert_eq!(cfg.base_url, "https://jobs.test/");
        assert_eq!(cfg.log_file, Some(PathBuf::from("watch.log")));
    }

    #[test]
    fn empty_webhook_means_no_destination() {
        let cfg = Config::from_lookup(lookup(&[("DISCORD_WEBHOOK_URL", "  ")])).unwrap();
        assert!(cfg.webhook_url.is_none());
    }

    #[test]
    fn empty_areas_disable_filtering() {
        let cfg = Config::from_lookup(lookup(&[("SEARCH_AREAS", "")])).unwrap();
        assert!(cfg.search_areas.is_empty());
    }

    #[test]
    fn bad_interval_is_reported() {
        let err = Config::from_lookup(lookup(&[("CHECK_INTERVAL", "5m")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::BadInterval { var: "CHECK_INTERVAL", value: s!("5m") }
        );
    }
}
