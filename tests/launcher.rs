// tests/launcher.rs
//
// One run at a time: a second start while the first is active is refused.
//
mod common;

use std::sync::{mpsc, Mutex};

use tic_scrape::config::options::RunOptions;
use tic_scrape::core::net::Fetch;
use tic_scrape::progress::NullProgress;
use tic_scrape::runner::{self, Launcher};
use tic_scrape::ScrapeError;

use common::{FakeSite, Recorder, LISTING};

/// Holds every request until the test lets it through.
struct GatedSite {
    gate: Mutex<mpsc::Receiver<()>>,
    site: FakeSite,
}

impl Fetch for GatedSite {
    fn get(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        let _ = self.gate.lock().unwrap().recv();
        self.site.get(url)
    }
}

fn opts_in(dir: &std::path::Path) -> RunOptions {
    RunOptions { listing_url: LISTING.to_string(), folder: dir.to_path_buf(), ..RunOptions::default() }
}

#[test]
fn second_start_is_rejected_while_running() {
    let tmp = tempfile::tempdir().unwrap();
    let (release, gate) = mpsc::channel();
    let mut site = FakeSite::default();
    site.listing(&[]);
    let gated = GatedSite { gate: Mutex::new(gate), site: site.clone() };

    let mut launcher = Launcher::default();
    launcher
        .start(opts_in(tmp.path()), Box::new(gated), Box::new(NullProgress))
        .unwrap();
    assert!(launcher.is_running());
    assert_eq!(launcher.poll(), None);

    let again = launcher.start(opts_in(tmp.path()), Box::new(site.clone()), Box::new(NullProgress));
    assert!(matches!(again, Err(ScrapeError::AlreadyRunning)));

    release.send(()).unwrap();
    let summary = launcher.wait().unwrap();
    assert_eq!(summary.found, 0);
    assert!(!launcher.is_running());

    // Slot is free again
    launcher
        .start(opts_in(tmp.path()), Box::new(site), Box::new(NullProgress))
        .unwrap();
    assert!(launcher.wait().is_some());
}

#[test]
fn spawned_run_reports_through_its_own_sink() {
    let tmp = tempfile::tempdir().unwrap();
    let mut site = FakeSite::default();
    site.listing(&[1]).cart(1);

    let handle = runner::spawn(opts_in(tmp.path()), Box::new(site), Box::new(Recorder::default())).unwrap();
    let summary = handle.join();
    assert_eq!(summary.saved, 1);
    assert!(tmp.path().join("game1.tic").is_file());
}
