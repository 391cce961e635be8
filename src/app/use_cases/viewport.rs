//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Aktualisiert die Hover-Region für die Status-Anzeige.
pub fn set_hovered_region(state: &mut AppState, region_id: Option<u64>) {
    state.ui.hovered_region_id = region_id;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
    }

    #[test]
    fn set_hovered_region_updates_ui_state() {
        let mut state = AppState::new();

        set_hovered_region(&mut state, Some(7));
        assert_eq!(state.ui.hovered_region_id, Some(7));

        set_hovered_region(&mut state, None);
        assert_eq!(state.ui.hovered_region_id, None);
    }
}
