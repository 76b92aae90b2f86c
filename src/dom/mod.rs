// src/dom/mod.rs
//! DOM access for the extraction engine.
//!
//! The engine only ever talks to the traits in [`port`]; how the page got
//! rendered (browser, plain HTTP fetch, saved file) is the page source's business.
//! [`page::StaticPage`] is the parsed-document implementation used by the
//! shipped sources and by offline fixtures.

pub mod page;
pub mod port;
pub mod source;

pub use page::{StaticElement, StaticPage};
pub use port::{DomError, DomPort, ElementHandle, PageSource};
pub use source::{FileSource, HttpSource};
