//! Gemeinsame Hilfsfunktionen für Klassifikationslogik.

use crate::app::AppState;
use glam::Vec2;

/// Setzt alle Tags explizit auf unklassifiziert zurück.
pub fn clear_tags(state: &mut AppState) {
    state.selection.tags_mut().clear();
}

/// Berechnet das achsen-alignierte Bounding-Rect aus zwei Eckpunkten.
pub(super) fn rect_min_max(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    (
        Vec2::new(a.x.min(b.x), a.y.min(b.y)),
        Vec2::new(a.x.max(b.x), a.y.max(b.y)),
    )
}
