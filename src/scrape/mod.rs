// src/scrape/mod.rs
//
// Orchestration: one session per request, navigate, read, close.

use std::{collections::BTreeMap, path::Path};

use crate::{
    browser::{Fetch, HttpFetch, Session},
    config::options::ScrapeOptions,
    error::ScrapeError,
    progress::Progress,
    specs::{nav, recipe_types, recipes},
    store,
};

/// Recipe name → recipe URL, ordered by name.
pub type Recipes = BTreeMap<String, String>;

/// Scrape the recipe type labels from the site.
pub fn get_recipe_types<F: Fetch>(
    fetch: F,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>, ScrapeError> {
    logf!("Types: Begin site={}", opts.site);
    if let Some(p) = progress.as_deref_mut() {
        p.log("Retrieving recipe types…");
    }

    let mut session = Session::new(fetch);
    let res = read_recipe_types(&mut session, opts);
    session.close();

    match &res {
        Ok(types) => {
            logf!("Types: OK count={}", types.len());
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{} recipe type(s) available", types.len()));
            }
        }
        Err(e) => loge!("get_recipe_types: {e}"),
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    res
}

fn read_recipe_types<F: Fetch>(
    session: &mut Session<F>,
    opts: &ScrapeOptions,
) -> Result<Vec<String>, ScrapeError> {
    nav::go_to_recipe_type_page(session, &opts.site)?;
    recipe_types::probe(session)
}

/// Scrape every recipe listed for `recipe_type`.
pub fn get_recipes<F: Fetch>(
    fetch: F,
    opts: &ScrapeOptions,
    recipe_type: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Recipes, ScrapeError> {
    logf!("Recipes: Begin type='{}' site={}", recipe_type, opts.site);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
    }

    let mut session = Session::new(fetch);
    let res = read_recipes(&mut session, opts, recipe_type, &mut progress);
    session.close();

    match &res {
        Ok(found) => logf!("Recipes: OK type='{}' count={}", recipe_type, found.len()),
        Err(e) => loge!("get_recipes: {e}"),
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    res
}

fn read_recipes<F: Fetch>(
    session: &mut Session<F>,
    opts: &ScrapeOptions,
    recipe_type: &str,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<Recipes, ScrapeError> {
    nav::go_to_recipe_type_page(session, &opts.site)?;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done("Opened recipe type page");
    }

    let link = recipe_types::find_link(session, recipe_type)?;
    session.click(&link)?;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&format!("Opened '{recipe_type}'"));
    }

    let found = recipes::probe(session, opts.miss_limit)?;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&format!("Found {} recipe(s)", found.len()));
    }
    Ok(found)
}

/* ---------- live-site convenience ---------- */

fn http_fetch(opts: &ScrapeOptions, activity: &str) -> Result<HttpFetch, ScrapeError> {
    HttpFetch::new(opts).inspect_err(|e| loge!("{activity}: client setup failed: {e}"))
}

pub fn recipe_types_from_site(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>, ScrapeError> {
    get_recipe_types(http_fetch(opts, "get_recipe_types")?, opts, progress)
}

pub fn recipes_from_site(
    opts: &ScrapeOptions,
    recipe_type: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<Recipes, ScrapeError> {
    get_recipes(http_fetch(opts, "get_recipes")?, opts, recipe_type, progress)
}

/// Cached recipe types unless empty or `refresh`; a fresh list is written back.
pub fn recipe_types_cached_or_live(
    opts: &ScrapeOptions,
    refresh: bool,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>, ScrapeError> {
    recipe_types_cached_or_live_at(
        &store::recipe_types_path(),
        || http_fetch(opts, "get_recipe_types"),
        opts,
        refresh,
        progress,
    )
}

/// Same as [`recipe_types_cached_or_live`] with the cache at `path`.
/// `connect` runs only when the cache can't answer.
pub fn recipe_types_cached_or_live_at<F, C>(
    path: &Path,
    connect: C,
    opts: &ScrapeOptions,
    refresh: bool,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>, ScrapeError>
where
    F: Fetch,
    C: FnOnce() -> Result<F, ScrapeError>,
{
    if !refresh {
        match store::load_recipe_types_from(path, &opts.site) {
            Ok(types) if !types.is_empty() => {
                logd!("Cache: {} recipe type(s) loaded", types.len());
                return Ok(types);
            }
            Ok(_) => logd!("Cache: no recipe types for {}", opts.site),
            Err(e) => logd!("Cache: recipe types missing ({e})"),
        }
    }

    let types = get_recipe_types(connect()?, opts, progress)?;
    if let Err(e) = store::save_recipe_types_to(path, &opts.site, &types) {
        loge!("Cache: save recipe types failed: {e}");
    }
    Ok(types)
}
