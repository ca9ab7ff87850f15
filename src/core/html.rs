// src/core/html.rs
use reqwest::Url;
use scraper::{ElementRef, Selector};

use crate::error::ScrapeError;

/// Compile a selector literal. Only for fixed strings in this crate;
/// anything user-supplied goes through `try_selector`.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e:?}"))
}

pub fn try_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector { css: s!(css), cause: format!("{e:?}") })
}

/// Resolve `href` against `origin`. Absolute hrefs pass through.
pub fn resolve(origin: &str, href: &str) -> Option<Url> {
    Url::parse(origin).ok()?.join(href.trim()).ok()
}

/// Last non-empty path segment of a URL (`.../cart/abc/game.tic` → `game.tic`).
pub fn last_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|seg| !seg.is_empty())
        .last()
        .map(|seg| s!(seg))
}

/// `content` attribute of the first element matching `sel`, trimmed.
/// Empty or whitespace-only content counts as missing.
pub fn first_content(root: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let el = root.select(sel).next()?;
    let content = el.value().attr("content")?;
    let clean = super::sanitize::normalize_ws(content);
    if clean.is_empty() { None } else { Some(clean) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_root_relative_and_absolute() {
        let u = resolve("https://tic80.com", "/play?cart=123").unwrap();
        assert_eq!(u.as_str(), "https://tic80.com/play?cart=123");

        let u = resolve("https://tic80.com", "https://cdn.example.org/x.png").unwrap();
        assert_eq!(u.as_str(), "https://cdn.example.org/x.png");
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(try_selector(r#"meta[name="author"]"#).is_ok());
        let err = try_selector("meta[name=").unwrap_err();
        assert!(matches!(err, ScrapeError::Selector { .. }));
    }

    #[test]
    fn last_segment_skips_trailing_slash() {
        let u = Url::parse("https://tic80.com/cart/abc/game.tic").unwrap();
        assert_eq!(last_segment(&u).as_deref(), Some("game.tic"));

        let u = Url::parse("https://tic80.com/cart/abc/").unwrap();
        assert_eq!(last_segment(&u).as_deref(), Some("abc"));

        let u = Url::parse("https://tic80.com/").unwrap();
        assert_eq!(last_segment(&u), None);
    }
}
