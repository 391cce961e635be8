//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset View (Home)").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Zoom In (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                let has_scene = state.scene.is_some();
                if ui
                    .add_enabled(has_scene, egui::Button::new("Alle Tags zurücksetzen"))
                    .clicked()
                {
                    events.push(AppIntent::ClearTagsRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
