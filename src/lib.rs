// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod dom;
pub mod engine;
pub mod log;
pub mod notify;
pub mod params;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod store;
