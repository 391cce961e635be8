//! Use-Case: Laden einer Szenen-Datei.

use crate::app::AppState;
use crate::core::PlanScene;
use anyhow::Context;
use std::sync::Arc;

/// Lädt eine Szene aus einer JSON-Datei und ersetzt die aktuelle komplett.
///
/// Tags und Kamera werden zurückgesetzt: die neue Szene hat frische IDs,
/// alte Tags wären bedeutungslos. Fehler werden in der Statuszeile
/// angezeigt und propagiert; der bestehende Zustand bleibt unverändert.
pub fn load_scene(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            state.ui.status_message = Some(format!("Datei nicht lesbar: {}", path));
            return Err(e).context(format!("Szenen-Datei nicht lesbar: {}", path));
        }
    };

    let scene = match PlanScene::from_json(&json) {
        Ok(scene) => scene,
        Err(e) => {
            state.ui.status_message = Some("Szenen-JSON fehlerhaft".to_string());
            return Err(e);
        }
    };

    log::info!(
        "Szene geladen: {} Regionen aus {}",
        scene.region_count(),
        path
    );

    state.scene = Some(Arc::new(scene));
    state.selection.tags_mut().clear();
    state.view.camera.reset();
    state.ui.current_file_path = Some(path.to_string());
    state.ui.hovered_region_id = None;
    state.ui.status_message = Some(format!(
        "{} Regionen geladen",
        state.region_count()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegionTags;

    #[test]
    fn load_scene_replaces_state_and_resets_camera() {
        let mut state = AppState::new();
        state.view.camera.zoom_by(4.0);
        state
            .selection
            .tags_mut()
            .insert(1, RegionTags::default());

        let dir = std::env::temp_dir().join("prv_load_scene_test");
        std::fs::create_dir_all(&dir).expect("Tempdir erwartet");
        let path = dir.join("szene.json");
        std::fs::write(
            &path,
            r#"{
                "bounds": {"min_x": 0.0, "min_y": 0.0, "max_x": 10.0, "max_y": 10.0},
                "regions": [
                    {"id": 5, "points": [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0]]}
                ]
            }"#,
        )
        .expect("Schreiben erwartet");

        load_scene(&mut state, path.to_str().expect("utf8-Pfad"))
            .expect("Laden sollte funktionieren");

        assert_eq!(state.region_count(), 1);
        assert_eq!(state.view.camera.zoom, 1.0);
        assert!(state.selection.tags.is_empty());
        assert!(state.ui.current_file_path.is_some());
    }

    #[test]
    fn load_scene_with_missing_file_keeps_state() {
        let mut state = AppState::new();
        let result = load_scene(&mut state, "/gibt/es/nicht.json");
        assert!(result.is_err());
        assert!(state.scene.is_none());
        assert!(state.ui.status_message.is_some());
    }
}
