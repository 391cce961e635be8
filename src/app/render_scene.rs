//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        scene: state.scene.clone(),
        camera: state.view.camera.clone(),
        viewport_size,
        tags: state.selection.tags.clone(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::RegionTags;

    #[test]
    fn build_snapshots_camera_and_tags() {
        let mut state = AppState::new();
        state.view.camera.zoom_by(2.0);
        state.selection.tags_mut().insert(
            7,
            RegionTags {
                is_site: true,
                ..Default::default()
            },
        );

        let scene = build(&state, [1280.0, 720.0]);

        assert_eq!(scene.viewport_size, [1280.0, 720.0]);
        assert!((scene.camera.zoom - 2.0).abs() < 1e-5);
        assert!(scene.tags.get(&7).is_some_and(|t| t.is_site));
        assert!(!scene.has_scene());
    }
}
