// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Recipe names go into a comma-delimited file: drop every comma.
pub fn strip_commas(s: &str) -> String {
    normalize_ws(&s.replace(',', ""))
}

/// Remove characters that are not allowed in file names on common platforms.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'))
        .filter(|c| !c.is_control())
        .collect();
    let out = normalize_ws(&kept).trim_end_matches('.').to_string();
    if out.is_empty() { s!("recipes") } else { out }
}
