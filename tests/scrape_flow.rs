// tests/scrape_flow.rs
//
// Navigation + probing against an in-memory site.

mod common;

use common::{options, site, SITE};
use recipe_scrape::{
    browser::Session,
    scrape::{get_recipe_types, get_recipes},
    specs::{nav, recipe_types, recipes},
    ScrapeError,
};

#[test]
fn recipe_types_in_page_order_until_first_gap() {
    let types = get_recipe_types(site(), &options(), None).unwrap();
    assert_eq!(types, vec!["Desserts", "Main Dishes", "Soups, Stews and Chili"]);
}

#[test]
fn nav_lands_on_recipe_type_page() {
    let mut s = Session::new(site());
    nav::go_to_recipe_type_page(&mut s, SITE).unwrap();
    assert_eq!(s.current_url().unwrap().as_str(), "https://site.test/recipes/");
}

#[test]
fn recipes_sorted_commas_removed_gaps_skipped() {
    let recipes = get_recipes(site(), &options(), "Desserts", None).unwrap();

    let names: Vec<&str> = recipes.keys().map(|s| s.as_str()).collect();
    assert_eq!(names, vec!["Apple Pie", "Brownies Fudgy", "Cake"]);

    // the later card with the same name wins
    assert_eq!(recipes["Apple Pie"], "https://site.test/recipe/4/apple-pie-ii/");
    // relative links come back absolute
    assert_eq!(recipes["Cake"], "https://site.test/recipe/5/cake/");
}

#[test]
fn miss_limit_stops_at_gap() {
    let mut opts = options();
    opts.miss_limit = 1;
    let recipes = get_recipes(site(), &opts, "Desserts", None).unwrap();
    assert_eq!(recipes.len(), 2);
    assert!(recipes.contains_key("Brownies Fudgy"));
    assert!(!recipes.contains_key("Cake"));
}

#[test]
fn type_label_must_match_exactly() {
    let recipes = get_recipes(site(), &options(), "Soups, Stews and Chili", None).unwrap();
    assert_eq!(recipes.len(), 1);

    let err = get_recipes(site(), &options(), "desserts", None).unwrap_err();
    assert!(matches!(err, ScrapeError::RecipeTypeNotFound(ref t) if t == "desserts"));
}

#[test]
fn types_after_gap_are_not_reachable() {
    let mut s = Session::new(site());
    nav::go_to_recipe_type_page(&mut s, SITE).unwrap();
    assert!(recipe_types::find_link(&s, "After Gap").is_err());
    assert!(recipe_types::find_link(&s, "Main Dishes").is_ok());
}

#[test]
fn missing_category_page_is_an_http_error() {
    let err = get_recipes(site(), &options(), "Main Dishes", None).unwrap_err();
    assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
}

#[test]
fn missing_nav_link_is_reported() {
    let bare = common::Site::default().with(SITE, "<html><body><p>maintenance</p></body></html>");
    let err = get_recipe_types(bare, &options(), None).unwrap_err();
    assert!(matches!(err, ScrapeError::ElementNotFound(_)));
}

fn listing(cards: &[String]) -> String {
    format!("<html><body>{}</body></html>", cards.concat())
}

fn open_listing(cards: &[String]) -> Session<common::Site> {
    let url = "https://site.test/recipes/79/desserts/";
    let mut s = Session::new(site().with(url, &listing(cards)));
    s.open(url).unwrap();
    s
}

#[test]
fn blank_type_labels_are_skipped() {
    let types_page = r#"<html><body><ul>
        <li id="mntl-link-list__item_1-0"><a href="/recipes/0/blank/">   </a></li>
        <li id="mntl-link-list__item_2-0"><a href="/recipes/79/desserts/">Desserts</a></li>
        </ul></body></html>"#;
    let s = site().with("https://site.test/recipes/", types_page);

    let types = get_recipe_types(s, &options(), None).unwrap();
    assert_eq!(types, vec!["Desserts"]);
}

#[test]
fn nameless_card_is_skipped_but_keeps_probing_alive() {
    let cards = [
        common::card(1, "https://site.test/recipe/1/", "Pie"),
        // 2 missing
        common::card(3, "https://site.test/recipe/3/", " , "),
        // 4 missing
        common::card(5, "https://site.test/recipe/5/", "Tart"),
    ];
    let s = open_listing(&cards);

    // the blank card at 3 resets the count, so both single gaps are crossed
    let found = recipes::probe(&s, 2).unwrap();
    let names: Vec<&str> = found.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["Pie", "Tart"]);
    assert!(found.values().all(|u| !u.ends_with("/3/")));
}

#[test]
fn miss_count_restarts_after_each_card() {
    let cards = [
        common::card(1, "https://site.test/recipe/1/", " , "),
        common::card(3, "https://site.test/recipe/3/", "Pie"),
        common::card(5, "https://site.test/recipe/5/", "Tart"),
    ];
    let s = open_listing(&cards);

    assert!(recipes::probe(&s, 1).unwrap().is_empty());

    let found = recipes::probe(&s, 2).unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found["Pie"], "https://site.test/recipe/3/");
    assert_eq!(found["Tart"], "https://site.test/recipe/5/");
}

#[test]
fn gap_wider_than_limit_ends_probing() {
    let cards = [
        common::card(1, "https://site.test/recipe/1/", "Pie"),
        common::card(4, "https://site.test/recipe/4/", "Tart"),
    ];
    let s = open_listing(&cards);

    assert_eq!(recipes::probe(&s, 2).unwrap().len(), 1);
    assert_eq!(recipes::probe(&s, 3).unwrap().len(), 2);
}
