// src/cli.rs
use std::{error::Error, io};

use crate::{
    config::options::{AppOptions, LinkStyle},
    csv, file,
    progress::StderrProgress,
    scrape,
};

#[derive(Clone, Debug, Default)]
pub struct CliArgs {
    pub help: bool,
    pub list_types: bool,
    pub refresh: bool,
    pub recipe_type: Option<String>,
    /// `-` means standard output
    pub to_stdout: bool,
    pub options: AppOptions,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        eprint!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    execute(&args)
}

fn execute(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let scrape_opts = &args.options.scrape;
    let export = &args.options.export;
    let mut progress = StderrProgress::new();

    if args.list_types {
        let types = scrape::recipe_types_cached_or_live(scrape_opts, args.refresh, Some(&mut progress))?;
        for t in types {
            println!("{t}");
        }
        return Ok(());
    }

    let recipe_type = args
        .recipe_type
        .as_deref()
        .ok_or("Specify --list-types or --type <name>")?;

    let recipes = scrape::recipes_from_site(scrape_opts, recipe_type, Some(&mut progress))?;
    if recipes.is_empty() {
        eprintln!("Warning: no recipes found for '{recipe_type}'");
    }

    if args.to_stdout {
        csv::write_recipes(io::stdout().lock(), &recipes, export)?;
        return Ok(());
    }

    match file::write_recipes(export, recipe_type, &recipes)? {
        Some(path) => println!("Wrote {} recipe(s) to {}", recipes.len(), path.display()),
        None => eprintln!("File has not been created."),
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--list-types" | "-l" => out.list_types = true,
            "--refresh" => out.refresh = true,
            "-t" | "--type" => {
                let v = args.next().ok_or("Missing value for --type")?;
                if v.trim().is_empty() { return Err("Empty recipe type".into()); }
                out.recipe_type = Some(s!(v.trim()));
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                if v == "-" { out.to_stdout = true; } else { out.options.export.set_path(&v); }
            }
            "--plain-urls" => out.options.export.link_style = LinkStyle::Plain,
            "--no-headers" => out.options.export.include_headers = false,
            "--site" => out.options.scrape.site = args.next().ok_or("Missing value for --site")?,
            "--miss-limit" => {
                out.options.scrape.miss_limit = args.next().ok_or("Missing value for --miss-limit")?.parse()?;
            }
            "--timeout" => {
                let secs: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if secs == 0 { return Err("Timeout must be at least 1 second".into()); }
                out.options.scrape.timeout_secs = secs;
            }
            "-h" | "--help" => out.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Result<CliArgs, Box<dyn Error>> {
        parse_args(v.iter().map(|s| s.to_string()))
    }

    #[test]
    fn type_and_output() {
        let a = args(&["--type", "Desserts", "-o", "out/d.csv", "--plain-urls"]).unwrap();
        assert_eq!(a.recipe_type.as_deref(), Some("Desserts"));
        assert!(!a.to_stdout);
        assert_eq!(a.options.export.link_style, LinkStyle::Plain);
        assert_eq!(
            a.options.export.out_path("Desserts").unwrap(),
            std::path::PathBuf::from(file::normalize_separators("out/d.csv"))
        );
    }

    #[test]
    fn dash_means_stdout() {
        let a = args(&["-t", "Soups", "-o", "-"]).unwrap();
        assert!(a.to_stdout);
        assert!(!a.options.export.has_user_path());
    }

    #[test]
    fn numeric_flags() {
        let a = args(&["--list-types", "--miss-limit", "5", "--timeout", "3", "--no-headers"]).unwrap();
        assert!(a.list_types);
        assert_eq!(a.options.scrape.miss_limit, 5);
        assert_eq!(a.options.scrape.timeout_secs, 3);
        assert!(!a.options.export.include_headers);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["--type"]).is_err());
        assert!(args(&["--timeout", "0"]).is_err());
        assert!(args(&["--miss-limit", "lots"]).is_err());
    }
}
