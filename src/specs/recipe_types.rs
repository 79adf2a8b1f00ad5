// src/specs/recipe_types.rs
//! Recipe types: the numbered link list on the recipe type page.
//!
//! `#mntl-link-list__item_{i}-0 > a`, i = 1, 2, … until the first gap.

use crate::browser::{Element, Fetch, Session};
use crate::config::consts::RECIPE_TYPE_ID_PREFIX;
use crate::error::ScrapeError;

pub fn item_selector(i: usize) -> String {
    format!("#{RECIPE_TYPE_ID_PREFIX}{i}-0 > a")
}

/// All recipe type labels, in page order.
pub fn probe<F: Fetch>(session: &Session<F>) -> Result<Vec<String>, ScrapeError> {
    let mut out = Vec::new();
    for i in 1.. {
        match session.try_find(&item_selector(i))? {
            Some(el) if el.text.is_empty() => logd!("Types: item {i} has no label, skipped"),
            Some(el) => out.push(el.text),
            None => break,
        }
    }
    Ok(out)
}

/// The link whose label equals `label` exactly.
pub fn find_link<F: Fetch>(session: &Session<F>, label: &str) -> Result<Element, ScrapeError> {
    for i in 1.. {
        match session.try_find(&item_selector(i))? {
            Some(el) if el.text == label => return Ok(el),
            Some(_) => {}
            None => break,
        }
    }
    Err(ScrapeError::RecipeTypeNotFound(s!(label)))
}
