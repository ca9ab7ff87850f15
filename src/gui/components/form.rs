// src/gui/components/form.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.running();
    let gui = &mut app.state.gui;
    let opts = &mut app.state.options;

    egui::Grid::new("form_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("TIC-80 Games URL:");
            ui.add_enabled(
                !running,
                egui::TextEdit::singleline(&mut gui.url_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();

            ui.label("Download Folder:");
            ui.horizontal(|ui| {
                let browse = ui.add_enabled(!running, egui::Button::new("Browse…"));
                if browse.clicked()
                    && let Some(dir) = actions::browse_folder(&gui.folder_text)
                {
                    gui.folder_text = dir.display().to_string();
                    log::info!("UI: folder → {}", gui.folder_text);
                }
                ui.add_enabled(
                    !running,
                    egui::TextEdit::singleline(&mut gui.folder_text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });
            ui.end_row();
        });

    ui.horizontal(|ui| {
        ui.add_enabled_ui(!running, |ui| {
            if ui.checkbox(&mut opts.images, "Cover images").changed() {
                log::info!("UI: images → {}", opts.images);
            }
            if ui.checkbox(&mut opts.gamelist, "gamelist.xml").changed() {
                log::info!("UI: gamelist → {}", opts.gamelist);
            }
        });
        ui.separator();
        ui.checkbox(&mut gui.show_debug, "Show debug lines");
    });
}
