// src/engine/mod.rs
//! Extraction engine: locate job cards, pull fields out of them, or fall back
//! to a keyword scan of every link on the page.

pub mod engine;
pub mod types;

pub use engine::{
    extract_card, extract_cards, extract_generic, extract_jobs, first_match,
    looks_like_job, resolve_cards, CardSkip, Resolution,
};
pub use types::{BoardSpec, Field, FieldChain, Job, JobKey, ScraperResult};
