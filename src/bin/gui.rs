// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use tic_scrape::{config::state::GuiState, gui};

/// 32×32 cartridge glyph: dark shell, teal label, notch at the top.
fn app_icon() -> IconData {
    let shell = Rgba([26, 28, 44, 255]);
    let label = Rgba([65, 166, 246, 255]);
    let clear = Rgba([0, 0, 0, 0]);

    let rgba = RgbaImage::from_fn(32, 32, |x, y| match (x, y) {
        (4..=27, 2..=29) if (12..=19).contains(&x) && y <= 5 => clear,
        (4..=27, 2..=29) if (8..=23).contains(&x) && (9..=20).contains(&y) => label,
        (4..=27, 2..=29) => shell,
        _ => clear,
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
