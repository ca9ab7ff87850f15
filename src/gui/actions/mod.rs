// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{start, open_folder, browse_folder}.

mod browse;      // src/gui/actions/browse.rs
mod open_folder; // src/gui/actions/open_folder.rs
mod start;       // src/gui/actions/start.rs

pub use browse::browse_folder;
pub use open_folder::open_folder;
pub use start::start;
