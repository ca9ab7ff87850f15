// src/specs/listing.rs
//! Listing page (`/play?cat=…`): one `div.cart` per cartridge tile.
//!
//! Shape:
//! ```text
//! <div class="cart">
//!   <a href="/play?cart=123"> … </a>
//! </div>
//! ```
//! Only the first `a[href]` inside each tile is looked at, and only if it
//! points at a cart page. Document order is kept.

use scraper::Html;

use crate::config::consts::{CART_LINK_PREFIX, SITE_ORIGIN};
use crate::core::html::{resolve, selector};

/// Absolute detail-page URLs, in the order the tiles appear.
/// No tiles (or no matching links) → empty, not an error.
pub fn extract_links(doc: &str) -> Vec<String> {
    let html = Html::parse_document(doc);
    let cart_sel = selector("div.cart");
    let link_sel = selector("a[href]");

    let mut links = Vec::new();
    for cart in html.select(&cart_sel) {
        let Some(href) = cart
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            continue;
        };

        if !href.starts_with(CART_LINK_PREFIX) {
            continue;
        }
        if let Some(url) = resolve(SITE_ORIGIN, href) {
            links.push(url.to_string());
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_carts_resolve_against_origin() {
        let doc = r#"
            <html><body>
              <div class="cart"><a href="/play?cart=123"><img src="/cart/a/cover.gif"></a></div>
              <div class="cart"><a href="/play?cart=456">Second</a></div>
            </body></html>
        "#;
        assert_eq!(
            extract_links(doc),
            vec!["https://tic80.com/play?cart=123", "https://tic80.com/play?cart=456"]
        );
    }

    #[test]
    fn no_cart_tiles_is_empty() {
        let doc = r#"<html><body><div class="card"><a href="/play?cart=1">x</a></div></body></html>"#;
        assert!(extract_links(doc).is_empty());
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn keeps_valid_skips_invalid_in_order() {
        let doc = r#"
            <div class="cart"><a href="/play?cart=3">c</a></div>
            <div class="cart"><a href="/dev?id=9">profile</a></div>
            <div class="cart"><a name="anchor-without-href">x</a></div>
            <div class="cart big"><a href="/play?cart=1">a</a></div>
            <div class="cart"><span>no link at all</span></div>
            <div class="cart"><a href="/play?cat=0">category</a></div>
            <div class="cart"><a href="/play?cart=2">b</a></div>
        "#;
        assert_eq!(
            extract_links(doc),
            vec![
                "https://tic80.com/play?cart=3",
                "https://tic80.com/play?cart=1",
                "https://tic80.com/play?cart=2",
            ]
        );
    }

    #[test]
    fn only_first_href_in_tile_counts() {
        let doc = r#"
            <div class="cart">
              <a href="/dev?id=4">author</a>
              <a href="/play?cart=77">game</a>
            </div>
        "#;
        assert!(extract_links(doc).is_empty());
    }
}
