// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod progress;

pub mod components {
    pub mod form;
    pub mod log_view;
    pub mod run_bar;
}

pub use app::run;
