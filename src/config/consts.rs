// src/config/consts.rs
use std::time::Duration;

// Site
pub const DEFAULT_BASE_URL: &str = "https://www.jobsatamazon.co.uk/app#/jobSearch";
pub const SITE_ORIGIN: &str = "https://www.jobsatamazon.co.uk";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Waits (every wait is bounded)
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);
pub const ELEMENT_TIMEOUT: Duration = Duration::from_secs(30);
pub const SELECTOR_TIMEOUT: Duration = Duration::from_secs(5);

// Polling
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 300;
pub const SLEEP_SLICE: Duration = Duration::from_secs(5);
pub const DEFAULT_SEARCH_AREAS: &str = "London";

// Extraction
pub const CARD_TITLE_MAX: usize = 100;
pub const GENERIC_TEXT_MIN: usize = 5;
pub const GENERIC_TEXT_MAX: usize = 300;

// Alerts
pub const MAX_ALERT_CARDS: usize = 10;
pub const ALERT_TITLE_MAX: usize = 256;
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(15);
pub const EMBED_COLOR: u32 = 0xFF9900;
