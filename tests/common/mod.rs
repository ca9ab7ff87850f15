// tests/common/mod.rs
//
// Canned-site fetcher + recording sink, shared by the integration tests.
//
#![allow(dead_code)]

use std::collections::HashMap;

use log::Level;
use tic_scrape::core::net::Fetch;
use tic_scrape::progress::Progress;
use tic_scrape::runner::RunSummary;
use tic_scrape::ScrapeError;

pub const LISTING: &str = "https://tic80.com/play?cat=0";

pub const GIF_BYTES: &[u8] = b"GIF89a\x01\0\x01\0\0\0\0;";

/// URL → body. Unknown URLs fail like a dead host.
#[derive(Default, Clone)]
pub struct FakeSite {
    pages: HashMap<String, Vec<u8>>,
}

impl FakeSite {
    pub fn put(&mut self, url: &str, body: impl Into<Vec<u8>>) -> &mut Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    pub fn remove(&mut self, url: &str) -> &mut Self {
        self.pages.remove(url);
        self
    }

    /// Listing page linking `/play?cart=<id>` for each id.
    pub fn listing(&mut self, ids: &[u32]) -> &mut Self {
        let tiles: String = ids
            .iter()
            .map(|id| format!(r#"<div class="cart"><a href="/play?cart={id}"><img src="/x.gif"></a></div>"#))
            .collect();
        let doc = format!("<html><body>{tiles}<div class=\"cart\"><a href=\"/dev?id=1\">dev</a></div></body></html>");
        self.put(LISTING, doc)
    }

    /// Detail page + `.tic` payload + cover for cart `id`.
    pub fn cart(&mut self, id: u32) -> &mut Self {
        let detail = format!(
            r#"<html><head>
                 <meta name="description" content="Game number {id}">
                 <meta name="author" content="by Dev {id}">
                 <meta property="og:image" content="/cart/h{id}/cover.gif">
               </head><body><a href="/cart/h{id}/game{id}.tic">download</a></body></html>"#
        );
        self.put(&detail_url(id), detail)
            .put(&cart_url(id), format!("TIC{id}").into_bytes())
            .put(&format!("https://tic80.com/cart/h{id}/cover.gif"), GIF_BYTES)
    }
}

pub fn detail_url(id: u32) -> String {
    format!("https://tic80.com/play?cart={id}")
}

pub fn cart_url(id: u32) -> String {
    format!("https://tic80.com/cart/h{id}/game{id}.tic")
}

impl Fetch for FakeSite {
    fn get(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::network(url, "connection refused"))
    }
}

/// Keeps everything the pipeline reports.
#[derive(Default)]
pub struct Recorder {
    pub lines: Vec<(Level, String)>,
    pub begun: Option<usize>,
    pub done: Vec<String>,
    pub failed: Vec<String>,
    pub finished: Option<RunSummary>,
}

impl Recorder {
    pub fn count(&self, level: Level) -> usize {
        self.lines.iter().filter(|(l, _)| *l == level).count()
    }

    pub fn has(&self, level: Level, needle: &str) -> bool {
        self.lines.iter().any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.begun = Some(total);
    }
    fn log(&mut self, level: Level, msg: &str) {
        self.lines.push((level, msg.to_string()));
    }
    fn item_done(&mut self, _index: usize, link: &str) {
        self.done.push(link.to_string());
    }
    fn item_failed(&mut self, _index: usize, link: &str) {
        self.failed.push(link.to_string());
    }
    fn finish(&mut self, summary: &RunSummary) {
        self.finished = Some(*summary);
    }
}
