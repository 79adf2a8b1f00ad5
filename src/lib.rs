// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod browser;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod store;

pub use error::ScrapeError;
pub use scrape::Recipes;
