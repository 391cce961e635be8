//! Status-Bar am unteren Bildschirmrand: Flächen-Kennzahlen und Hover-Info.

use crate::app::AppState;
use crate::core::AreaMetrics;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(scene) = &state.scene {
                let metrics = AreaMetrics::compute(scene, &state.selection.tags);
                ui.label(format!(
                    "Site: {:.1}m² | Footprint: {:.1}m² | Geschossfläche: {:.1}m² | BCR: {:.2}% | FAR: {:.2}",
                    metrics.site_area,
                    metrics.footprint_area,
                    metrics.total_floor_area,
                    metrics.coverage_ratio_percent(),
                    metrics.floor_area_ratio(),
                ));

                ui.separator();
                ui.label(format!("Regionen: {}", scene.region_count()));

                ui.separator();
                ui.label(hover_info(state));
            } else {
                ui.label("Keine Szene geladen. File → Open");
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
                state.view.camera.zoom,
                state.view.camera.pan_offset.x,
                state.view.camera.pan_offset.y
            ));

            if state.options.read_only {
                ui.separator();
                ui.label(egui::RichText::new("Nur-Lese-Modus").color(egui::Color32::YELLOW));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_GREEN));
            }
        });
    });
}

/// Baut die Hover-Infozeile im Stil "Area 3 (12.4m²) [SITE] [BLDG: Footprint, 2x]".
fn hover_info(state: &AppState) -> String {
    let Some(scene) = state.scene.as_deref() else {
        return String::new();
    };
    let Some(region) = state
        .ui
        .hovered_region_id
        .and_then(|id| scene.region(id))
    else {
        return "Bereit.".to_string();
    };

    let mut info = format!("Area {} ({:.2}m²)", region.id, region.area_world);
    if let Some(tags) = state.selection.tags.get(&region.id) {
        if tags.is_site {
            info.push_str(" [SITE]");
        }
        if tags.is_building {
            let kind = if tags.is_footprint {
                "Footprint"
            } else {
                "Obergeschoss"
            };
            info.push_str(&format!(" [BLDG: {}, {}x]", kind, tags.floors));
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use super::hover_info;
    use crate::app::AppState;
    use crate::core::{PlanRegion, PlanScene, RegionTags, WorldBounds};
    use glam::Vec2;
    use std::sync::Arc;

    fn state_with_region() -> AppState {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
        ];
        let mut state = AppState::new();
        state.scene = Some(Arc::new(PlanScene {
            regions: vec![PlanRegion {
                id: 3,
                bounding_box: WorldBounds::from_points(&points),
                points,
                render_path: None,
                area_raw: 2.0,
                area_world: 12.4,
            }],
            bounds: None,
            name: None,
        }));
        state
    }

    #[test]
    fn hover_info_shows_classification() {
        let mut state = state_with_region();
        state.ui.hovered_region_id = Some(3);
        state.selection.tags_mut().insert(
            3,
            RegionTags {
                is_site: true,
                is_building: true,
                is_footprint: true,
                floors: 2,
            },
        );

        let info = hover_info(&state);
        assert!(info.contains("Area 3"));
        assert!(info.contains("[SITE]"));
        assert!(info.contains("[BLDG: Footprint, 2x]"));
    }

    #[test]
    fn hover_info_without_hover_is_ready() {
        let state = state_with_region();
        assert_eq!(hover_info(&state), "Bereit.");
    }
}
