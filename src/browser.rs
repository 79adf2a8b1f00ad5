// src/browser.rs
//
// A minimal page-driving session: open a URL, find elements, follow links.
// Transport is behind `Fetch` so sessions can run against captured pages.

use reqwest::blocking::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::config::options::ScrapeOptions;
use crate::core::{net, sanitize::normalize_ws};
use crate::error::ScrapeError;

pub trait Fetch {
    fn fetch(&mut self, url: &Url) -> Result<String, ScrapeError>;
}

/// Live transport over HTTP(S).
pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        Ok(Self { client: net::build_client(opts)? })
    }
}

impl Fetch for HttpFetch {
    fn fetch(&mut self, url: &Url) -> Result<String, ScrapeError> {
        net::http_get(&self.client, url)
    }
}

/// Snapshot of a located element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub selector: String,
    /// Visible text, whitespace collapsed
    pub text: String,
    /// Absolute link target, if the element has an `href`
    pub href: Option<String>,
}

pub struct Session<F: Fetch> {
    fetch: F,
    url: Option<Url>,
    doc: Option<Html>,
    pages_opened: usize,
}

impl<F: Fetch> Session<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch, url: None, doc: None, pages_opened: 0 }
    }

    pub fn open(&mut self, url: &str) -> Result<(), ScrapeError> {
        let url = Url::parse(url.trim())?;
        self.navigate(url)
    }

    fn navigate(&mut self, url: Url) -> Result<(), ScrapeError> {
        logd!("Session: GET {}", url);
        let body = self.fetch.fetch(&url)?;
        self.doc = Some(Html::parse_document(&body));
        self.url = Some(url);
        self.pages_opened += 1;
        Ok(())
    }

    pub fn current_url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// First element matching `css` on the current page.
    pub fn find(&self, css: &str) -> Result<Element, ScrapeError> {
        self.try_find(css)?
            .ok_or_else(|| ScrapeError::ElementNotFound(s!(css)))
    }

    /// Like `find`, but a missing element is `Ok(None)`.
    pub fn try_find(&self, css: &str) -> Result<Option<Element>, ScrapeError> {
        let doc = self.doc.as_ref().ok_or(ScrapeError::NoPage)?;
        let selector = Selector::parse(css).map_err(|e| ScrapeError::Selector {
            selector: s!(css),
            reason: e.to_string(),
        })?;

        let Some(el) = doc.select(&selector).next() else {
            return Ok(None);
        };

        let text = normalize_ws(&el.text().collect::<String>());
        let href = el.value().attr("href").and_then(|h| self.resolve(h));

        Ok(Some(Element { selector: s!(css), text, href }))
    }

    fn resolve(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        let abs = match &self.url {
            Some(base) => base.join(href).ok()?,
            None => Url::parse(href).ok()?,
        };
        Some(abs.to_string())
    }

    /// Follow the element's link.
    pub fn click(&mut self, el: &Element) -> Result<(), ScrapeError> {
        let href = el.href.as_deref().ok_or_else(|| ScrapeError::MissingAttribute {
            selector: el.selector.clone(),
            attr: "href",
        })?;
        let url = Url::parse(href)?;
        self.navigate(url)
    }

    pub fn close(self) {
        logd!(
            "Session: closed after {} page(s), last={}",
            self.pages_opened,
            self.url.as_ref().map(|u| u.as_str()).unwrap_or("-")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Pages(HashMap<String, String>);

    impl Fetch for Pages {
        fn fetch(&mut self, url: &Url) -> Result<String, ScrapeError> {
            self.0.get(url.as_str()).cloned().ok_or_else(|| ScrapeError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn session() -> Session<Pages> {
        let mut pages = HashMap::new();
        pages.insert(
            s!("https://site.test/"),
            s!(r#"<html><body><p id="x"> Hello
                 <b>there</b> </p><a id="go" href="/next">Go</a><a id="dead">No</a></body></html>"#),
        );
        pages.insert(s!("https://site.test/next"), s!("<html><body><h1 id='t'>Next</h1></body></html>"));
        Session::new(Pages(pages))
    }

    #[test]
    fn find_before_open_is_an_error() {
        let s = session();
        assert!(matches!(s.find("#x"), Err(ScrapeError::NoPage)));
    }

    #[test]
    fn text_is_collapsed_and_href_absolute() {
        let mut s = session();
        s.open("https://site.test/").unwrap();
        assert_eq!(s.find("#x").unwrap().text, "Hello there");
        let go = s.find("#go").unwrap();
        assert_eq!(go.href.as_deref(), Some("https://site.test/next"));
    }

    #[test]
    fn click_follows_link() {
        let mut s = session();
        s.open("https://site.test/").unwrap();
        let go = s.find("#go").unwrap();
        s.click(&go).unwrap();
        assert_eq!(s.current_url().unwrap().as_str(), "https://site.test/next");
        assert_eq!(s.find("#t").unwrap().text, "Next");
    }

    #[test]
    fn click_without_href_fails() {
        let mut s = session();
        s.open("https://site.test/").unwrap();
        let dead = s.find("#dead").unwrap();
        assert!(matches!(s.click(&dead), Err(ScrapeError::MissingAttribute { .. })));
    }

    #[test]
    fn missing_element() {
        let mut s = session();
        s.open("https://site.test/").unwrap();
        assert!(s.try_find("#nope").unwrap().is_none());
        assert!(matches!(s.find("#nope"), Err(ScrapeError::ElementNotFound(_))));
    }

    #[test]
    fn bad_status_surfaces() {
        let mut s = session();
        let err = s.open("https://site.test/missing").unwrap_err();
        assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
    }
}
