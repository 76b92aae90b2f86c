// src/specs/mod.rs
//! # Board specs
//!
//! Each spec describes **one listing page** as data: which selectors locate a
//! job card, which selectors locate each field inside a card, and which
//! keywords the generic link scan accepts. The engine evaluates these lists
//! in order; nothing in here runs code.
//!
//! ## Conventions
//! - **Order is policy.** Card selectors go from markup-stable (`data-test`
//!   attributes) to generic (bare anchors). An earlier match always wins.
//! - Field chains are scoped to a single card and stop at the first non-empty text.
//! - Keywords are lower-case; matching lower-cases the link text and target.
//! - Keep both spellings when a term has them (`fulfilment` / `fulfillment`).
//!
//! ## Testing notes
//! - Specs are exercised offline against saved HTML through `dom::StaticPage`.

pub mod amazon;

pub use amazon::JOBS_AT_AMAZON;
