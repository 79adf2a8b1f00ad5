// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv;
use crate::scrape::Recipes;

/// Write `recipes` to the export path for `recipe_type`.
/// Returns `None` when the user cleared the output path (nothing written).
pub fn write_recipes(
    export: &ExportOptions,
    recipe_type: &str,
    recipes: &Recipes,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let Some(path) = export.out_path(recipe_type) else {
        logd!("Export: no output path, nothing written");
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    csv::write_recipes(out, recipes, export)?;

    logf!("Export: OK rows={} → {}", recipes.len(), path.display());
    Ok(Some(path))
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Folder to show for an export path: its nearest existing ancestor directory.
pub fn nearest_existing_dir(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}
