// src/scrape/scrape.rs
use tracing::{error, info};

use super::areas::filter_by_areas;
use crate::dom::{DomPort, PageSource};
use crate::engine::{extract_jobs, BoardSpec, ScraperResult};

/// Extract from an already-loaded page and apply the area filter.
pub fn scrape_page<P: DomPort>(page: &P, spec: &BoardSpec, areas: &[String]) -> ScraperResult {
    match extract_jobs(page, spec) {
        Ok(raw) => {
            info!(count = raw.len(), "extracted raw jobs");
            ScraperResult::ok(filter_by_areas(raw, areas).jobs)
        }
        Err(e) => {
            error!(error = %e, "extraction failed");
            ScraperResult::failed(e.to_string())
        }
    }
}

/// One scrape attempt: load the page, extract, filter.
/// Page-load failures come back as a failed result, never as a panic or `Err`.
pub fn scrape_jobs<S: PageSource>(source: &S, spec: &BoardSpec, areas: &[String]) -> ScraperResult {
    match source.open() {
        Ok(page) => scrape_page(&page, spec, areas),
        Err(e) => {
            error!(error = %e, "scraper error");
            ScraperResult::failed(e.to_string())
        }
    }
}
