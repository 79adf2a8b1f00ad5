// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::HEADERS;
use crate::config::options::{ExportOptions, LinkStyle};
use crate::scrape::Recipes;

const SEP: char = ',';

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row; fields are quoted only when they need it.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// URL cell for export.
pub fn url_cell(url: &str, style: LinkStyle) -> String {
    match style {
        LinkStyle::Hyperlink => format!("=HYPERLINK(\"{url}\")"),
        LinkStyle::Plain => s!(url),
    }
}

/// Stream `Recipe,URL` rows (name order) to any writer.
pub fn write_recipes<W: Write>(mut w: W, recipes: &Recipes, export: &ExportOptions) -> io::Result<()> {
    if export.include_headers {
        write_row(&mut w, &HEADERS, SEP)?;
    }
    for (name, url) in recipes {
        let link = url_cell(url, export.link_style);
        write_row(&mut w, &[name.as_str(), link.as_str()], SEP)?;
    }
    w.flush()
}

/// Whole export as a string.
pub fn recipes_to_string(recipes: &Recipes, export: &ExportOptions) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_recipes(&mut buf, recipes, export)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a,b", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn hyperlink_cell() {
        assert_eq!(
            url_cell("https://x.test/r/1", LinkStyle::Hyperlink),
            "=HYPERLINK(\"https://x.test/r/1\")"
        );
        assert_eq!(url_cell("https://x.test/r/1", LinkStyle::Plain), "https://x.test/r/1");
    }

    #[test]
    fn empty_listing_is_just_the_header() {
        let txt = recipes_to_string(&Recipes::new(), &ExportOptions::default()).unwrap();
        assert_eq!(txt, "Recipe,URL\n");

        let mut export = ExportOptions::default();
        export.include_headers = false;
        assert_eq!(recipes_to_string(&Recipes::new(), &export).unwrap(), "");
    }
}
