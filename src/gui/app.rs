// src/gui/app.rs
use std::{
    collections::VecDeque,
    error::Error,
    sync::mpsc::{self, Receiver, Sender},
    time::Duration,
};

use eframe::egui;
use log::Level;

use crate::{config::state::AppState, runner::Launcher};

use super::progress::UiEvent;

/// Oldest lines are dropped past this.
pub const LOG_CAP: usize = 5000;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "TIC-80 Cart Downloader",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::default(), cc.egui_ctx.clone())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // at most one background run
    pub launcher: Launcher,
    pub egui_ctx: egui::Context,

    // worker → UI
    pub events_tx: Sender<UiEvent>,
    events_rx: Receiver<UiEvent>,

    // scrolling log + status line
    pub log: VecDeque<(Level, String)>,
    pub status: String,
    pub total: usize,
    pub done: usize,
    pub failed: usize,
}

impl App {
    pub fn new(state: AppState, egui_ctx: egui::Context) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            state,
            launcher: Launcher::default(),
            egui_ctx,
            events_tx,
            events_rx,
            log: VecDeque::new(),
            status: s!("Idle"),
            total: 0,
            done: 0,
            failed: 0,
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.launcher.is_running()
    }

    /// Lines raised by the UI itself (not by a run).
    pub fn push_log(&mut self, level: Level, msg: impl Into<String>) {
        let msg = msg.into();
        log::log!(level, "{msg}");
        self.append_line(level, msg);
    }

    fn append_line(&mut self, level: Level, msg: String) {
        if self.log.len() >= LOG_CAP {
            self.log.pop_front();
        }
        self.log.push_back((level, msg));
    }

    pub fn reset_counts(&mut self) {
        self.total = 0;
        self.done = 0;
        self.failed = 0;
    }

    /// Drain worker events, then reap the run if it ended.
    fn pump(&mut self) {
        while let Ok(ev) = self.events_rx.try_recv() {
            match ev {
                UiEvent::Log(level, msg) => self.append_line(level, msg),
                UiEvent::Begin(total) => {
                    self.total = total;
                    self.status = format!("Found {total} cartridge(s)");
                }
                UiEvent::ItemDone => {
                    self.done += 1;
                    self.status = format!("Saved {}/{}", self.done, self.total);
                }
                UiEvent::ItemFailed => self.failed += 1,
                UiEvent::Finished(s) => {
                    self.status = format!(
                        "Finished: {} found, {} saved, {} skipped",
                        s.found, s.saved, s.failed
                    );
                }
            }
        }
        if let Some(summary) = self.launcher.poll() {
            log::debug!("UI: run reaped ({summary:?})");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump();

        egui::TopBottomPanel::top("form").show(ctx, |ui| {
            super::components::form::draw(ui, self);
            ui.separator();
            super::components::run_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::log_view::draw(ui, self);
        });

        // Worker repaints on every event; this covers the thread exit itself.
        if self.running() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
