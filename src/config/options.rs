// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::core::sanitize::sanitize_filename;
use crate::file::{looks_like_dir_hint, normalize_separators};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Main page of the recipe site
    pub site: String,
    pub timeout_secs: u64,
    /// Consecutive missing recipe cards tolerated before the listing probe stops
    pub miss_limit: usize,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        let site = std::env::var(SITE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| s!(SITE_URL));

        Self {
            site,
            timeout_secs: TIMEOUT_SECS,
            miss_limit: MISS_LIMIT,
            user_agent: s!(USER_AGENT),
        }
    }
}

/// How the URL column is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LinkStyle {
    /// `=HYPERLINK("<url>")`, clickable when opened in a spreadsheet
    #[default]
    Hyperlink,
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub link_style: LinkStyle,
    pub include_headers: bool,
    pub out_dir: PathBuf,
    /// User-entered path; `None` means "use the default for the recipe type".
    out_path: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            link_style: LinkStyle::Hyperlink,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            out_path: None,
        }
    }
}

impl ExportOptions {
    /// "Recipes - Desserts.csv"
    pub fn default_file_name(recipe_type: &str) -> String {
        let stem = sanitize_filename(&join!(FILE_PREFIX, recipe_type));
        join!(&stem, ".", CSV_EXT)
    }

    pub fn default_path_for(&self, recipe_type: &str) -> PathBuf {
        self.out_dir.join(Self::default_file_name(recipe_type))
    }

    pub fn set_path(&mut self, text: &str) {
        self.out_path = Some(s!(text.trim()));
    }

    pub fn reset_path(&mut self) {
        self.out_path = None;
    }

    pub fn has_user_path(&self) -> bool {
        self.out_path.is_some()
    }

    /// Final file path for `recipe_type`, or `None` when the user cleared the path.
    ///
    /// A directory (existing, or hinted by a trailing separator) gets the default
    /// file name appended; a file name without extension gets `.csv`.
    pub fn out_path(&self, recipe_type: &str) -> Option<PathBuf> {
        let text = match &self.out_path {
            None => return Some(self.default_path_for(recipe_type)),
            Some(t) if t.is_empty() => return None,
            Some(t) => t,
        };

        let p = PathBuf::from(normalize_separators(text));
        if looks_like_dir_hint(&p) || p.is_dir() {
            return Some(p.join(Self::default_file_name(recipe_type)));
        }
        if p.extension().is_none() {
            return Some(p.with_extension(CSV_EXT));
        }
        Some(p)
    }
}
