// tests/common/mod.rs
//
// In-memory copy of the site's page structure.
#![allow(dead_code)]

use std::collections::HashMap;

use recipe_scrape::{browser::Fetch, config::options::ScrapeOptions, ScrapeError};
use url::Url;

pub const SITE: &str = "https://site.test/";

#[derive(Clone, Default)]
pub struct Site {
    pages: HashMap<String, String>,
}

impl Site {
    pub fn with(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

impl Fetch for Site {
    fn fetch(&mut self, url: &Url) -> Result<String, ScrapeError> {
        self.pages.get(url.as_str()).cloned().ok_or_else(|| ScrapeError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

pub fn options() -> ScrapeOptions {
    ScrapeOptions { site: SITE.to_string(), ..ScrapeOptions::default() }
}

pub fn card(i: usize, href: &str, name: &str) -> String {
    format!(
        r#"<a id="mntl-card-list-items_{i}-0" href="{href}">
             <div class="card__media"><img src="x.jpg"></div>
             <div class="card__content"><span class="card__title"><span class="card__title-text">{name}</span></span></div>
           </a>"#
    )
}

pub fn site() -> Site {
    let home = r#"<html><body>
        <nav id="mntl-header-nav_1-0">
          <div><ul>
            <li><a href="/ingredients/">Ingredients</a></li>
            <li><a href="/recipes/">Dinners</a></li>
          </ul></div>
          <div><ul><li><a href="/other/">Other</a></li></ul></div>
        </nav></body></html>"#;

    let types = r#"<html><body><ul>
        <li id="mntl-link-list__item_1-0"><a href="/recipes/79/desserts/">Desserts</a></li>
        <li id="mntl-link-list__item_2-0"><a href="/recipes/80/main-dish/"> Main
            Dishes </a></li>
        <li id="mntl-link-list__item_3-0"><a href="/recipes/94/soups-stews-and-chili/">Soups, Stews and Chili</a></li>
        </ul>
        <ul><li id="mntl-link-list__item_5-0"><a href="/recipes/1/after-gap/">After Gap</a></li></ul>
        </body></html>"#;

    let desserts = format!(
        "<html><body><div class=\"list\">{}{}{}{}</div></body></html>",
        card(1, "https://site.test/recipe/1/apple-pie/", "Apple Pie"),
        card(2, "https://site.test/recipe/2/brownies/", "Brownies, Fudgy"),
        // slot 3 is an ad
        card(4, "https://site.test/recipe/4/apple-pie-ii/", "Apple Pie"),
        card(5, "/recipe/5/cake/", "Cake"),
    );

    let soups = format!(
        "<html><body>{}</body></html>",
        card(1, "https://site.test/recipe/9/chili/", "Chili"),
    );

    Site::default()
        .with(SITE, home)
        .with("https://site.test/recipes/", types)
        .with("https://site.test/recipes/79/desserts/", &desserts)
        .with("https://site.test/recipes/94/soups-stews-and-chili/", &soups)
}
