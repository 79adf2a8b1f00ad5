// src/specs/mod.rs
//! # Site page specs
//!
//! Where the data lives in the recipe site's markup and how to read it.
//! Each spec works on an open [`Session`](crate::browser::Session) and only
//! extracts; when to scrape, how to export and what to show are decided by
//! `scrape`, `file` and `gui`.
//!
//! The site renders repeated items with numbered ids (`…_1-0`, `…_2-0`, …),
//! so lists are read by probing ids in order rather than by selecting a
//! container.
//!
//! ## Call chain
//! ```text
//! GUI / CLI → scrape::get_* → specs::nav → specs::recipe_types / specs::recipes
//! ```
pub mod nav;
pub mod recipe_types;
pub mod recipes;
