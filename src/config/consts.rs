// src/config/consts.rs

// Site
pub const SITE_URL: &str = "https://www.allrecipes.com/";
pub const SITE_ENV: &str = "RECIPE_SCRAPE_SITE";

// Element ids / selectors on the site
pub const NAV_RECIPES_LINK: &str = "#mntl-header-nav_1-0 > div:nth-of-type(1) > ul > li:nth-of-type(2) > a";
pub const RECIPE_TYPE_ID_PREFIX: &str = "mntl-link-list__item_";
pub const RECIPE_CARD_ID_PREFIX: &str = "mntl-card-list-items_";
pub const RECIPE_CARD_NAME_PATH: &str = "div:nth-of-type(2) > span > span";

// Probing
pub const MISS_LIMIT: usize = 100;

// Net
pub const USER_AGENT: &str = concat!("recipe_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 20;

// Local store + logs
pub const STORE_DIR: &str = ".store";
pub const RECIPE_TYPES_FILE: &str = "recipe_types.txt";
pub const LOG_PREFIX: &str = "log_recipe_scrape_";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FILE_PREFIX: &str = "Recipes - ";
pub const CSV_EXT: &str = "csv";
pub const HEADERS: [&str; 2] = ["Recipe", "URL"];

// Window
pub const APP_TITLE: &str = "My Recipe Retriever";
pub const WINDOW_W: f32 = 510.0;
pub const WINDOW_H: f32 = 570.0;
