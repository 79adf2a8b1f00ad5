// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("bad url: {0}")]
    Url(#[from] url::ParseError),

    #[error("bad selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("no page open")]
    NoPage,

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("element `{selector}` has no `{attr}` attribute")]
    MissingAttribute { selector: String, attr: &'static str },

    #[error("recipe type not found on site: {0}")]
    RecipeTypeNotFound(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
