//! Toolbar für Klassifikations-Modus und Gebäude-Parameter.

use crate::app::{AppIntent, AppState, ClassifyMode};
use crate::shared::FLOORS_MAX;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active_mode = state.selection.mode;
    let read_only = state.options.read_only;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");

            ui.add_enabled_ui(!read_only, |ui| {
                if ui
                    .selectable_label(active_mode == ClassifyMode::Site, "Site (Cyan)")
                    .clicked()
                {
                    events.push(AppIntent::SetClassifyModeRequested {
                        mode: ClassifyMode::Site,
                    });
                }
                if ui
                    .selectable_label(active_mode == ClassifyMode::Building, "Building (Orange)")
                    .clicked()
                {
                    events.push(AppIntent::SetClassifyModeRequested {
                        mode: ClassifyMode::Building,
                    });
                }

                ui.separator();
                ui.label("Parameter:");

                let mut is_footprint = state.selection.default_is_footprint;
                if ui.checkbox(&mut is_footprint, "Footprint?").changed() {
                    events.push(AppIntent::SetDefaultFootprintRequested { is_footprint });
                }

                ui.label("Geschosse:");
                let mut floors = state.selection.default_floors;
                if ui
                    .add(egui::DragValue::new(&mut floors).range(1..=FLOORS_MAX))
                    .changed()
                {
                    events.push(AppIntent::SetDefaultFloorsRequested { floors });
                }

                ui.separator();

                let has_scene = state.scene.is_some();
                if ui
                    .add_enabled(has_scene, egui::Button::new("Reset"))
                    .clicked()
                {
                    events.push(AppIntent::ClearTagsRequested);
                }
            });

            // Schreibschutz rechts, bleibt auch im Read-Only-Zustand bedienbar
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut read_only_toggle = read_only;
                if ui.checkbox(&mut read_only_toggle, "Nur ansehen").changed() {
                    events.push(AppIntent::SetReadOnlyRequested {
                        read_only: read_only_toggle,
                    });
                }
            });
        });
    });

    events
}
