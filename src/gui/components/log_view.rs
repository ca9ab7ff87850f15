// src/gui/components/log_view.rs
//
// Scrolling run log. Sticks to the bottom unless the user scrolls up.

use eframe::egui::{self, Color32, RichText};
use log::Level;

use crate::gui::app::App;

fn color_for(level: Level) -> Option<Color32> {
    match level {
        Level::Error => Some(Color32::from_rgb(220, 60, 60)),
        Level::Warn => Some(Color32::from_rgb(220, 170, 40)),
        Level::Debug | Level::Trace => Some(Color32::GRAY),
        Level::Info => None,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let show_debug = app.state.gui.show_debug;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for (level, msg) in &app.log {
                if !show_debug && *level >= Level::Debug {
                    continue;
                }
                let mut text = RichText::new(msg).monospace();
                if let Some(c) = color_for(*level) {
                    text = text.color(c);
                }
                ui.label(text);
            }
        });
}
