// src/specs/recipes.rs
//! Recipe cards on a recipe type page.
//!
//! Card `i` is the anchor `#mntl-card-list-items_{i}-0`; its `href` is the
//! recipe URL and `div:nth-of-type(2) > span > span` inside it holds the name.

use crate::browser::{Fetch, Session};
use crate::config::consts::{RECIPE_CARD_ID_PREFIX, RECIPE_CARD_NAME_PATH};
use crate::core::sanitize::strip_commas;
use crate::error::ScrapeError;
use crate::scrape::Recipes;

pub fn card_selector(i: usize) -> String {
    format!("#{RECIPE_CARD_ID_PREFIX}{i}-0")
}

pub fn card_name_selector(i: usize) -> String {
    format!("{} > {RECIPE_CARD_NAME_PATH}", card_selector(i))
}

/// `(name, url)` of card `i`, or `None` if the card (or either part) is missing.
pub fn read_card<F: Fetch>(
    session: &Session<F>,
    i: usize,
) -> Result<Option<(String, String)>, ScrapeError> {
    let Some(url) = session.try_find(&card_selector(i))?.and_then(|el| el.href) else {
        return Ok(None);
    };
    let Some(name) = session.try_find(&card_name_selector(i))? else {
        return Ok(None);
    };
    Ok(Some((strip_commas(&name.text), url)))
}

/// Read cards 1, 2, … into a name → URL map.
///
/// Gaps are skipped; probing ends after `miss_limit` consecutive missing cards.
/// A repeated name keeps the URL seen last.
pub fn probe<F: Fetch>(session: &Session<F>, miss_limit: usize) -> Result<Recipes, ScrapeError> {
    let limit = miss_limit.max(1);
    let mut recipes = Recipes::new();
    let mut misses = 0usize;
    let mut i = 1usize;

    while misses < limit {
        match read_card(session, i)? {
            Some((name, _)) if name.is_empty() => {
                logd!("Recipes: card {i} has no name, skipped");
                misses = 0;
            }
            Some((name, url)) => {
                recipes.insert(name, url);
                misses = 0;
            }
            None => misses += 1,
        }
        i += 1;
    }

    logd!("Recipes: probed {} card slot(s), {} recipe(s)", i - 1, recipes.len());
    Ok(recipes)
}
