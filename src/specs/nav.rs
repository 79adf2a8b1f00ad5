// src/specs/nav.rs
use crate::browser::{Fetch, Session};
use crate::config::consts::NAV_RECIPES_LINK;
use crate::error::ScrapeError;

/// Open the main page and follow the header menu to the page listing recipe types.
pub fn go_to_recipe_type_page<F: Fetch>(
    session: &mut Session<F>,
    site: &str,
) -> Result<(), ScrapeError> {
    session.open(site)?;
    let link = session.find(NAV_RECIPES_LINK)?;
    logd!("Nav: recipe type page via '{}' → {:?}", link.text, link.href);
    session.click(&link)
}
