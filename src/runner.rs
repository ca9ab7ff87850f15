// src/runner.rs
use std::thread::{self, JoinHandle};

use crate::{
    config::options::RunOptions,
    core::net::Fetch,
    error::ScrapeError,
    file,
    progress::Progress,
    specs::{self, DetailInfo},
    store::{self, GameRecord},
};

/// Summary of what a run produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Links found on the listing page
    pub found: usize,
    /// Cartridges written to disk
    pub saved: usize,
    /// Records appended to the gamelist
    pub recorded: usize,
    /// Links skipped for any reason
    pub failed: usize,
}

/// Walk listing → detail → persist → record, one link at a time.
///
/// Never fails as a whole: every error becomes a log line plus a skip of
/// the smallest unit it touches (asset, link, or, for the listing page
/// itself, the run).
pub fn run(opts: &RunOptions, fetch: &dyn Fetch, progress: &mut dyn Progress) -> RunSummary {
    let mut summary = RunSummary::default();
    logf!(progress, "Starting process to fetch and download TIC-80 cartridges");

    let links = listing_links(&opts.listing_url, fetch, progress);
    summary.found = links.len();
    progress.begin(links.len());

    for (i, link) in links.iter().enumerate() {
        match process_link(opts, link, fetch, progress) {
            Some(outcome) => {
                summary.saved += 1;
                if outcome == Outcome::Recorded {
                    summary.recorded += 1;
                }
                progress.item_done(i, link);
            }
            None => {
                summary.failed += 1;
                progress.item_failed(i, link);
            }
        }
    }

    logf!(progress, "Finished fetching and downloading TIC-80 cartridges");
    logf!(
        progress,
        "Cartridges found: {}, saved: {}, recorded: {}, skipped: {}",
        summary.found, summary.saved, summary.recorded, summary.failed
    );
    progress.finish(&summary);
    summary
}

fn listing_links(url: &str, fetch: &dyn Fetch, progress: &mut dyn Progress) -> Vec<String> {
    logf!(progress, "Fetching cartridge links from: {url}");
    let doc = match fetch.get_text(url) {
        Ok(doc) => doc,
        Err(e) => {
            loge!(progress, "Failed to retrieve cartridge links from {url}: {e}");
            return Vec::new();
        }
    };

    let links = specs::extract_links(&doc);
    for link in &links {
        logd!(progress, "Found cartridge link: {link}");
    }
    logf!(progress, "Total cartridges found: {}", links.len());
    links
}

/// What became of a link whose cartridge made it to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Recorded,
    /// Gamelist off, or its update failed
    SavedOnly,
}

/// None = skipped; the cause was already logged.
fn process_link(
    opts: &RunOptions,
    link: &str,
    fetch: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Option<Outcome> {
    logd!(progress, "Accessing cartridge page for download: {link}");
    let doc = fetch
        .get_text(link)
        .map_err(|e| loge!(progress, "Failed to access cartridge page {link}: {e}"))
        .ok()?;

    let detail = specs::extract_detail(&doc)
        .map_err(|e| match e {
            ScrapeError::NotFound { .. } => logw!(progress, "No .tic download link found on page: {link}"),
            other => loge!(progress, "Failed to read cartridge page {link}: {other}"),
        })
        .ok()?;

    logd!(progress, "Downloading .tic file from: {}", detail.cart_url);
    let bytes = fetch
        .get(&detail.cart_url)
        .map_err(|e| loge!(progress, "Failed to download .tic file from {}: {e}", detail.cart_url))
        .ok()?;
    let saved = file::save_cartridge(&bytes, &detail.filename, &opts.folder)
        .map_err(|e| loge!(progress, "Failed to save {}: {e}", detail.filename))
        .ok()?;
    logf!(progress, "Downloaded and saved file: {}", saved.display());

    let image_file = if opts.images { fetch_cover(opts, &detail, fetch, progress) } else { None };

    if !opts.gamelist {
        return Some(Outcome::SavedOnly);
    }
    let record = GameRecord::for_cartridge(
        &detail.filename,
        &detail.description,
        &detail.author,
        image_file.as_deref(),
    );
    match store::append_record(&opts.folder, record) {
        Ok(total) => {
            logd!(progress, "Recorded {} in gamelist ({total} entries)", detail.filename);
            Some(Outcome::Recorded)
        }
        Err(e) => {
            loge!(progress, "Failed to update gamelist for {}: {e}", detail.filename);
            Some(Outcome::SavedOnly)
        }
    }
}

/// Best effort: any failure is a warning and yields None.
fn fetch_cover(
    opts: &RunOptions,
    detail: &DetailInfo,
    fetch: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Option<String> {
    let url = detail.image_url.as_deref()?;
    logd!(progress, "Downloading cover image from: {url}");

    let bytes = match fetch.get(url) {
        Ok(b) => b,
        Err(e) => {
            logw!(progress, "Skipping cover for {}: {e}", detail.filename);
            return None;
        }
    };
    let name = file::image_filename(&detail.filename, url, &bytes);
    match file::save_image(&bytes, &name, &opts.folder) {
        Ok(path) => {
            logf!(progress, "Saved cover image: {}", path.display());
            Some(name)
        }
        Err(e) => {
            logw!(progress, "Skipping cover for {}: {e}", detail.filename);
            None
        }
    }
}

/* ---------------- Background runs ---------------- */

/// A run executing on its own thread. Owned by whoever started it.
pub struct RunHandle {
    join: JoinHandle<RunSummary>,
}

impl RunHandle {
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Block until the run ends. A panicked worker reports an empty summary.
    pub fn join(self) -> RunSummary {
        self.join.join().unwrap_or_default()
    }
}

/// Start `run` on a worker thread. The fetcher and sink move into it;
/// nothing is shared with the caller.
pub fn spawn(
    opts: RunOptions,
    fetch: Box<dyn Fetch>,
    mut progress: Box<dyn Progress + Send>,
) -> Result<RunHandle, ScrapeError> {
    let join = thread::Builder::new()
        .name(s!("tic-scrape-run"))
        .spawn(move || run(&opts, fetch.as_ref(), progress.as_mut()))
        .map_err(ScrapeError::Spawn)?;
    Ok(RunHandle { join })
}

/// At most one active run. Two runs would write the same folder, so a
/// second start is refused instead of interleaved.
#[derive(Default)]
pub struct Launcher {
    active: Option<RunHandle>,
}

impl Launcher {
    pub fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn start(
        &mut self,
        opts: RunOptions,
        fetch: Box<dyn Fetch>,
        progress: Box<dyn Progress + Send>,
    ) -> Result<(), ScrapeError> {
        if self.is_running() {
            return Err(ScrapeError::AlreadyRunning);
        }
        // A finished-but-unpolled run is simply replaced
        self.active = Some(spawn(opts, fetch, progress)?);
        Ok(())
    }

    /// Summary of the active run once it has ended; frees the slot.
    pub fn poll(&mut self) -> Option<RunSummary> {
        if self.active.as_ref()?.is_finished() {
            self.active.take().map(RunHandle::join)
        } else {
            None
        }
    }

    /// Block until the active run (if any) ends.
    pub fn wait(&mut self) -> Option<RunSummary> {
        self.active.take().map(RunHandle::join)
    }
}
