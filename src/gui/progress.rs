// src/gui/progress.rs
use std::sync::mpsc::Sender;

use eframe::egui;
use log::Level;

use crate::progress::Progress;
use crate::runner::RunSummary;

/// What the worker tells the UI thread. The UI owns all state; the worker
/// only sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Log(Level, String),
    Begin(usize),
    ItemDone,
    ItemFailed,
    Finished(RunSummary),
}

pub struct GuiProgress {
    tx: Sender<UiEvent>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(tx: Sender<UiEvent>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }

    fn send(&self, ev: UiEvent) {
        // Receiver gone = window closed mid-run; nothing left to show.
        if self.tx.send(ev).is_ok() {
            self.ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.send(UiEvent::Begin(total));
    }
    fn log(&mut self, level: Level, msg: &str) {
        self.send(UiEvent::Log(level, s!(msg)));
    }
    fn item_done(&mut self, _index: usize, _link: &str) {
        self.send(UiEvent::ItemDone);
    }
    fn item_failed(&mut self, _index: usize, _link: &str) {
        self.send(UiEvent::ItemFailed);
    }
    fn finish(&mut self, summary: &RunSummary) {
        self.send(UiEvent::Finished(*summary));
    }
}
