// src/specs/amazon.rs
//! Spec for the jobsatamazon.co.uk search page (single-page app; markup shifts
//! between releases, hence the long fallback lists).

use crate::config::consts::SITE_ORIGIN;
use crate::engine::types::{BoardSpec, FieldChain};

const FIELDS: &[FieldChain] = &[
    chain!(Title: "h2", "h3", ".job-title", ".title", "[data-test='job-title']"),
    chain!(Location: ".location", ".job-location", "[data-test='job-location']"),
    chain!(Pay: ".pay", ".salary", ".compensation", "[data-test='job-pay']"),
    chain!(Schedule: ".schedule", ".shift", "[data-test='job-schedule']"),
];

pub static JOBS_AT_AMAZON: BoardSpec = BoardSpec {
    name: "jobsatamazon.co.uk",
    card_selectors: &[
        "[data-test='job-card']",
        ".job-card",
        ".job-tile",
        ".jobCard",
        ".job-listing",
        ".job-result",
        ".job-item",
        "a[href*='job']",
    ],
    fields: FIELDS,
    link_attr: "href",
    anchor_selector: "a",
    keywords: &[
        "job", "position", "role", "shift", "warehouse", "driver",
        "sortation", "fulfilment", "fulfillment",
    ],
    origin: SITE_ORIGIN,
};
