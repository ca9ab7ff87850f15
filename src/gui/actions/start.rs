// src/gui/actions/start.rs
use log::Level;

use crate::{
    core::net::HttpFetcher,
    error::ScrapeError,
    gui::{app::App, progress::GuiProgress},
};

pub fn start(app: &mut App) {
    // Align run options with the form
    app.state.sync_form_into_options();
    let opts = app.state.options.clone();

    if opts.listing_url.is_empty() {
        app.push_log(Level::Error, "Listing URL is empty");
        return;
    }

    let fetcher = match HttpFetcher::new() {
        Ok(f) => f,
        Err(e) => {
            app.push_log(Level::Error, format!("Cannot start: {e}"));
            return;
        }
    };

    log::info!("Run: Begin url={} folder={}", opts.listing_url, opts.folder.display());

    let sink = GuiProgress::new(app.events_tx.clone(), app.egui_ctx.clone());

    // → This is where the run starts ←
    match app.launcher.start(opts, Box::new(fetcher), Box::new(sink)) {
        Ok(()) => {
            app.reset_counts();
            app.status = s!("Running…");
        }
        Err(ScrapeError::AlreadyRunning) => {
            app.push_log(Level::Warn, "Download already in progress");
        }
        Err(e) => {
            app.push_log(Level::Error, format!("Cannot start: {e}"));
            app.status = format!("Error: {e}");
        }
    }
}
