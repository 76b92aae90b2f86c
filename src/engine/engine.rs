// src/engine/engine.rs
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::consts::{CARD_TITLE_MAX, GENERIC_TEXT_MAX, GENERIC_TEXT_MIN, SELECTOR_TIMEOUT};
use crate::core::sanitize::{last_path_segment, truncate_chars};
use crate::dom::{DomError, DomPort, ElementHandle};
use crate::engine::types::*;

/// Try `candidates` in order; the first one `probe` accepts wins.
pub fn first_match<'c, T, F>(candidates: &[&'c str], mut probe: F) -> Option<(&'c str, T)>
where
    F: FnMut(&'c str) -> Option<T>,
{
    candidates.iter().find_map(|&c| probe(c).map(|hit| (c, hit)))
}

pub enum Resolution<E> {
    Resolved { selector: &'static str, cards: Vec<E> },
    Unresolved,
}

/// Find the first card selector that shows up within `timeout`.
/// Every candidate failing is not an error: the caller falls back to the generic scan.
pub fn resolve_cards<'p, P: DomPort>(
    page: &'p P,
    candidates: &[&'static str],
    timeout: Duration,
) -> Resolution<P::Element<'p>> {
    let hit = first_match(candidates, |sel| {
        if let Err(e) = page.wait_for_selector(sel, timeout) {
            debug!(selector = sel, error = %e, "card selector did not match");
            return None;
        }
        match page.query_selector_all(sel) {
            Ok(cards) if !cards.is_empty() => Some(cards),
            Ok(_) => None,
            Err(e) => {
                debug!(selector = sel, error = %e, "card query failed");
                None
            }
        }
    });

    match hit {
        Some((selector, cards)) => {
            info!(selector, "found job cards");
            Resolution::Resolved { selector, cards }
        }
        None => Resolution::Unresolved,
    }
}

/// Why a card produced no job.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardSkip {
    #[error("card has no usable title")]
    NoTitle,
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// First non-empty text among `selectors`, scoped to `card`.
/// A selector that errors is treated like one that matched nothing.
fn chain_text<E: ElementHandle>(card: &E, selectors: &[&str]) -> String {
    first_match(selectors, |sel| match card.query_selector(sel) {
        Ok(Some(el)) => el
            .text()
            .ok()
            .map(|t| s!(t.trim()))
            .filter(|t| !t.is_empty()),
        Ok(None) => None,
        Err(e) => {
            debug!(selector = sel, error = %e, "field selector failed");
            None
        }
    })
    .map(|(_, text)| text)
    .unwrap_or_default()
}

/// One card → one job. Title is the only mandatory field; when no title
/// selector hits, the card's own text (cut to 100 chars) stands in.
pub fn extract_card<E: ElementHandle>(card: &E, spec: &BoardSpec) -> Result<Job, CardSkip> {
    let mut title = chain_text(card, spec.chain(Field::Title));
    if title.is_empty() {
        title = truncate_chars(card.text()?.trim(), CARD_TITLE_MAX);
    }
    let title = s!(title.trim());
    if title.is_empty() {
        return Err(CardSkip::NoTitle);
    }

    let url = card.attribute(spec.link_attr)?.unwrap_or_default();
    let job_id = if url.is_empty() { s!() } else { last_path_segment(&url) };

    Ok(Job {
        title,
        location: chain_text(card, spec.chain(Field::Location)),
        job_id,
        url,
        pay: chain_text(card, spec.chain(Field::Pay)),
        schedule: chain_text(card, spec.chain(Field::Schedule)),
    })
}

/// Cards are independent: a bad card is logged and dropped, the rest carry on.
pub fn extract_cards<E: ElementHandle>(cards: &[E], spec: &BoardSpec) -> Vec<Job> {
    cards
        .iter()
        .enumerate()
        .filter_map(|(i, card)| match extract_card(card, spec) {
            Ok(job) => Some(job),
            Err(skip) => {
                debug!(card = i, reason = %skip, "skipping card");
                None
            }
        })
        .collect()
}

/// Keyword/length gate for the generic scan.
pub fn looks_like_job(href: &str, text: &str, keywords: &[&str]) -> bool {
    let len = text.chars().count();
    if text.is_empty() || len < GENERIC_TEXT_MIN || len > GENERIC_TEXT_MAX {
        return false;
    }
    let combined = join!(href, " ", text).to_lowercase();
    keywords.iter().any(|kw| combined.contains(kw))
}

fn generic_candidate<E: ElementHandle>(link: &E, spec: &BoardSpec) -> Result<Option<Job>, DomError> {
    let href = link.attribute("href")?.unwrap_or_default();
    let text = link.text()?;
    let text = text.trim();
    if !looks_like_job(&href, text, spec.keywords) {
        return Ok(None);
    }
    Ok(Some(Job { title: s!(text), url: href, ..Default::default() }))
}

/// Scan every anchor and keep the ones that read like postings.
/// Only title and url are filled; expect lower precision than card extraction.
pub fn extract_generic<P: DomPort>(page: &P, spec: &BoardSpec) -> Result<Vec<Job>, DomError> {
    let links = page.query_selector_all(spec.anchor_selector)?;
    let jobs: Vec<Job> = links
        .iter()
        .filter_map(|link| match generic_candidate(link, spec) {
            Ok(found) => found,
            Err(e) => {
                debug!(error = %e, "skipping unreadable link");
                None
            }
        })
        .collect();
    info!(links = links.len(), kept = jobs.len(), "generic extraction done");
    Ok(jobs)
}

/// Card extraction when a known card selector resolves, generic scan otherwise.
pub fn extract_jobs<P: DomPort>(page: &P, spec: &BoardSpec) -> Result<Vec<Job>, DomError> {
    match resolve_cards(page, spec.card_selectors, SELECTOR_TIMEOUT) {
        Resolution::Resolved { selector, cards } => {
            info!(selector, count = cards.len(), "extracting job cards");
            Ok(extract_cards(&cards, spec))
        }
        Resolution::Unresolved => {
            warn!(board = spec.name, "no known card selector matched, attempting generic extraction");
            extract_generic(page, spec)
        }
    }
}
