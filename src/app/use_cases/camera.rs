//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::WorldBounds;
use glam::Vec2;

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera.reset();
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    state.view.camera.zoom_by(step);
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    state.view.camera.zoom_by(1.0 / step);
}

/// Verschiebt die Kamera um ein Bildschirm-Pixel-Delta.
/// Ohne Szenen-Ausdehnung gibt es kein Sichtfenster und damit keinen Pan.
pub fn pan(state: &mut AppState, screen_delta: Vec2) {
    let Some(bounds) = scene_bounds(state) else {
        return;
    };
    let viewport = Vec2::new(state.view.viewport_size[0], state.view.viewport_size[1]);
    state.view.camera.pan_by_screen(screen_delta, viewport, &bounds);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<Vec2>) {
    match (focus_world, scene_bounds(state)) {
        (Some(focus), Some(bounds)) => state.view.camera.zoom_towards(factor, focus, &bounds),
        _ => state.view.camera.zoom_by(factor),
    }
}

fn scene_bounds(state: &AppState) -> Option<WorldBounds> {
    state.scene.as_deref().and_then(|s| s.bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlanScene, WorldBounds};
    use std::sync::Arc;

    fn with_scene_bounds() -> AppState {
        let mut state = AppState::new();
        state.scene = Some(Arc::new(PlanScene {
            regions: Vec::new(),
            bounds: Some(WorldBounds {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 100.0,
                max_y: 100.0,
            }),
            name: None,
        }));
        state.view.viewport_size = [200.0, 200.0];
        state
    }

    #[test]
    fn reset_camera_sets_default_zoom_and_offset() {
        let mut state = with_scene_bounds();
        state.view.camera.zoom_by(5.0);
        state.view.camera.pan_offset = glam::Vec2::new(10.0, 20.0);

        reset_camera(&mut state);

        assert_eq!(state.view.camera.zoom, 1.0);
        assert_eq!(state.view.camera.pan_offset, glam::Vec2::ZERO);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = with_scene_bounds();
        let original = state.view.camera.zoom;

        zoom_in(&mut state);
        assert!(state.view.camera.zoom > original);
        zoom_out(&mut state);
        assert!((state.view.camera.zoom - original).abs() < 1e-5);
    }

    #[test]
    fn pan_converts_screen_delta_to_world_offset() {
        let mut state = with_scene_bounds();

        // 100 Welt-Einheiten auf 200 Pixel → Faktor 0.5, Y negiert
        pan(&mut state, glam::Vec2::new(10.0, 10.0));

        assert!((state.view.camera.pan_offset.x - 5.0).abs() < 1e-5);
        assert!((state.view.camera.pan_offset.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn pan_without_scene_is_a_no_op() {
        let mut state = AppState::new();
        pan(&mut state, glam::Vec2::new(10.0, 10.0));
        assert_eq!(state.view.camera.pan_offset, glam::Vec2::ZERO);
    }

    #[test]
    fn zoom_towards_without_focus_applies_plain_factor() {
        let mut state = with_scene_bounds();
        zoom_towards(&mut state, 2.0, None);
        assert!((state.view.camera.zoom - 2.0).abs() < 1e-5);
        assert_eq!(state.view.camera.pan_offset, glam::Vec2::ZERO);
    }

    #[test]
    fn zoom_towards_focus_moves_window_center() {
        let mut state = with_scene_bounds();

        zoom_towards(&mut state, 2.0, Some(glam::Vec2::new(75.0, 75.0)));

        // Fenster-Mittelpunkt wandert Richtung Fokus
        assert!(state.view.camera.pan_offset.x > 0.0);
        assert!(state.view.camera.pan_offset.y > 0.0);
    }
}
