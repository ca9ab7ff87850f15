// src/progress.rs
use log::Level;

use crate::runner::RunSummary;

/// Per-run reporting sink used by the download pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
/// A sink lives for one run; nothing here is global.
pub trait Progress {
    /// Called once the listing is parsed, with the number of links found.
    fn begin(&mut self, _total: usize) {}

    /// Human-readable log line.
    fn log(&mut self, _level: Level, _msg: &str) {}

    /// One link went all the way to a saved cartridge.
    fn item_done(&mut self, _index: usize, _link: &str) {}

    /// One link was skipped (fetch failure, missing markup, write failure).
    fn item_failed(&mut self, _index: usize, _link: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _summary: &RunSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Send one line to the `log` facade and to the run's sink.
pub fn emit(sink: &mut dyn Progress, level: Level, msg: String) {
    log::log!(level, "{msg}");
    sink.log(level, &msg);
}
