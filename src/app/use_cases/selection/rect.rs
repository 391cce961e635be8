//! Use-Case: Box-Klassifikation (Ctrl + Drag).

use super::containment::apply_site_containment;
use super::helpers::rect_min_max;
use crate::app::state::ClassifyMode;
use crate::app::AppState;
use glam::Vec2;

/// Setzt das Flag des aktiven Modus auf allen Regionen, deren Bounding Box
/// das Rechteck schneidet.
///
/// Anders als der Einzel-Klick wird hier nicht invertiert: die Box wendet
/// den Modus an. Gebäude-Tags übernehmen dabei immer die aktuellen
/// Footprint/Geschoss-Defaults; Site-Tags ziehen das Containment nach.
pub fn classify_regions_in_rect(state: &mut AppState, corner_a: Vec2, corner_b: Vec2) {
    let Some(scene) = state.scene.clone() else {
        return;
    };

    let (min, max) = rect_min_max(corner_a, corner_b);
    let hit_ids = scene.regions_in_rect(min, max);
    if hit_ids.is_empty() {
        return;
    }

    let mode = state.selection.mode;
    let default_is_footprint = state.selection.default_is_footprint;
    let default_floors = state.selection.default_floors;

    let tags = state.selection.tags_mut();
    for &region_id in &hit_ids {
        let entry = tags.entry(region_id).or_default();
        match mode {
            ClassifyMode::Building => {
                entry.is_building = true;
                entry.is_footprint = default_is_footprint;
                entry.floors = default_floors;
            }
            ClassifyMode::Site => {
                entry.is_site = true;
            }
        }
    }

    if mode == ClassifyMode::Site {
        for &region_id in &hit_ids {
            apply_site_containment(&scene, tags, region_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlanRegion, PlanScene, WorldBounds};
    use std::sync::Arc;

    fn rect_region(id: u64, min: Vec2, max: Vec2) -> PlanRegion {
        let points = vec![
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
        PlanRegion {
            id,
            bounding_box: WorldBounds::from_points(&points),
            points,
            render_path: None,
            area_raw: 0.0,
            area_world: 0.0,
        }
    }

    fn with_scene() -> AppState {
        let mut state = AppState::new();
        state.scene = Some(Arc::new(PlanScene {
            regions: vec![
                rect_region(1, Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)),
                rect_region(2, Vec2::new(30.0, 30.0), Vec2::new(40.0, 40.0)),
            ],
            bounds: None,
            name: None,
        }));
        state
    }

    #[test]
    fn box_sets_building_flag_on_overlapping_regions() {
        let mut state = with_scene();
        state.selection.default_floors = 3;

        // Ecken absichtlich vertauscht übergeben
        classify_regions_in_rect(
            &mut state,
            Vec2::new(25.0, 25.0),
            Vec2::new(15.0, 15.0),
        );

        let tags = state.selection.tags.get(&1).copied().expect("Tag erwartet");
        assert!(tags.is_building);
        assert_eq!(tags.floors, 3);
        assert!(state.selection.tags.get(&2).is_none());
    }

    #[test]
    fn box_apply_does_not_invert_existing_flags() {
        let mut state = with_scene();
        classify_regions_in_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0));
        classify_regions_in_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0));

        assert!(state.selection.tags.get(&1).is_some_and(|t| t.is_building));
        assert!(state.selection.tags.get(&2).is_some_and(|t| t.is_building));
    }

    #[test]
    fn site_mode_tags_and_propagates_containment() {
        let mut state = with_scene();
        state.selection.mode = ClassifyMode::Site;
        // Region 3 liegt vollständig in Region 2
        {
            let scene = Arc::get_mut(state.scene.as_mut().expect("Szene erwartet"))
                .expect("einzige Referenz");
            scene
                .regions
                .push(rect_region(3, Vec2::new(32.0, 32.0), Vec2::new(34.0, 34.0)));
        }

        classify_regions_in_rect(&mut state, Vec2::new(29.0, 29.0), Vec2::new(31.0, 31.0));

        assert!(state.selection.tags.get(&2).is_some_and(|t| t.is_site));
        assert!(state.selection.tags.get(&3).is_some_and(|t| t.is_site));
        assert!(state.selection.tags.get(&1).is_none());
    }
}
