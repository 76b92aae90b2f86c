// src/scrape/mod.rs
mod areas;
mod scrape;

pub use areas::{filter_by_areas, matches_area, AreaFilter, AreaOutcome};
pub use scrape::{scrape_jobs, scrape_page};
