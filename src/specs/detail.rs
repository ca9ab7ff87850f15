// src/specs/detail.rs
//! Detail page (`/play?cart=…`): the download anchor plus head metadata.
//!
//! The download link is the only hard requirement. Cover, description and
//! author are best-effort via `meta::TIC80`.

use scraper::Html;

use crate::config::consts::{CART_EXT, SITE_ORIGIN};
use crate::core::html::{last_segment, resolve, selector};
use crate::error::ScrapeError;

use super::meta::{MetaTags, TIC80};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailInfo {
    /// Absolute URL of the `.tic` file
    pub cart_url: String,
    /// Final path segment of `cart_url`
    pub filename: String,
    /// Absolute cover URL, if the page has one
    pub image_url: Option<String>,
    pub description: String,
    pub author: String,
}

pub fn extract_detail(doc: &str) -> Result<DetailInfo, ScrapeError> {
    extract_detail_with(doc, &TIC80)
}

/// Same as `extract_detail` with other tag shapes. An invalid selector in
/// `tags` is a `ScrapeError::Selector`.
pub fn extract_detail_with(doc: &str, tags: &MetaTags) -> Result<DetailInfo, ScrapeError> {
    let tags = tags.compile()?;
    let html = Html::parse_document(doc);
    let cart_sel = selector(&format!(r#"a[href$="{CART_EXT}"]"#));

    let not_found = || ScrapeError::NotFound { what: "cartridge download link" };

    let href = html
        .select(&cart_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(not_found)?;
    let cart_url = resolve(SITE_ORIGIN, href).ok_or_else(not_found)?;
    let filename = last_segment(&cart_url).ok_or_else(not_found)?;

    let root = html.root_element();
    let image_url = tags
        .image_href(root)
        .and_then(|h| resolve(SITE_ORIGIN, &h))
        .map(|u| u.to_string());

    Ok(DetailInfo {
        cart_url: cart_url.to_string(),
        filename,
        image_url,
        description: tags.description(root),
        author: tags.author(root),
    })
}
