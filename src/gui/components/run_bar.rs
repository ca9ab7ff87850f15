// src/gui/components/run_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(40, 170, 90);
        let black = egui::Color32::BLACK;

        let button_start = ui.add_enabled(
            !app.running(),
            egui::Button::new(
                egui::RichText::new("START DOWNLOAD")
                .color(black)
                .strong())
            .fill(green));

        if button_start.clicked() {
            actions::start(app);
        }

        if ui.button("📁").on_hover_text("Open download folder").clicked() {
            actions::open_folder(app);
        }

        if ui.button("Clear log").clicked() {
            app.log.clear();
        }

        if app.running() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status.as_str());
    });
}
