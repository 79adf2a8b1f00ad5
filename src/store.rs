// src/store.rs
//
// Local cache of the recipe type list: `.store/recipe_types.txt`.
// First line names the site the list came from, then one type per line.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{RECIPE_TYPES_FILE, STORE_DIR};

const SITE_TAG: &str = "# site ";

pub fn recipe_types_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(RECIPE_TYPES_FILE)
}

pub fn load_recipe_types(site: &str) -> io::Result<Vec<String>> {
    load_recipe_types_from(&recipe_types_path(), site)
}

pub fn save_recipe_types(site: &str, types: &[String]) -> io::Result<PathBuf> {
    let p = recipe_types_path();
    save_recipe_types_to(&p, site, types)?;
    Ok(p)
}

fn same_site(a: &str, b: &str) -> bool {
    a.trim().trim_end_matches('/').eq_ignore_ascii_case(b.trim().trim_end_matches('/'))
}

/// Types cached for `site`; a list saved for another site (or untagged) reads as empty.
pub fn load_recipe_types_from(path: &Path, site: &str) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines();

    let cached_site = lines.next().and_then(|l| l.strip_prefix(SITE_TAG));
    match cached_site {
        Some(s) if same_site(s, site) => {}
        other => {
            logd!("Cache: recipe types are for {:?}, not {}", other, site);
            return Ok(Vec::new());
        }
    }

    Ok(lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

pub fn save_recipe_types_to(path: &Path, site: &str, types: &[String]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut buf = join!(SITE_TAG, site.trim(), "\n");
    for t in types {
        buf.push_str(t.trim());
        buf.push('\n');
    }
    fs::write(path, buf)
}
