//! Use-Case: Einzel-Toggle per Klick auf die oberste Region.

use super::containment::apply_site_containment;
use crate::app::state::ClassifyMode;
use crate::app::AppState;
use glam::Vec2;

/// Invertiert das Flag des aktiven Modus für die Region unter dem Klickpunkt.
///
/// Beim Einschalten eines Gebäude-Tags werden die aktuellen
/// Footprint/Geschoss-Defaults übernommen; beim Einschalten eines Site-Tags
/// werden vollständig enthaltene Regionen mitgetaggt. Klicks ins Leere sind
/// No-Ops.
pub fn toggle_region_at(state: &mut AppState, world_pos: Vec2) {
    let Some(scene) = state.scene.clone() else {
        return;
    };
    let Some(region_id) = scene.region_at(world_pos) else {
        return;
    };

    let mode = state.selection.mode;
    let default_is_footprint = state.selection.default_is_footprint;
    let default_floors = state.selection.default_floors;

    let tags = state.selection.tags_mut();
    let entry = tags.entry(region_id).or_default();

    let mut newly_tagged_site = false;
    match mode {
        ClassifyMode::Building => {
            if entry.is_building {
                entry.is_building = false;
            } else {
                entry.is_building = true;
                entry.is_footprint = default_is_footprint;
                entry.floors = default_floors;
            }
        }
        ClassifyMode::Site => {
            if entry.is_site {
                entry.is_site = false;
            } else {
                entry.is_site = true;
                newly_tagged_site = true;
            }
        }
    }

    if newly_tagged_site {
        apply_site_containment(&scene, tags, region_id);
    }
}
