//! Handler für Klassifikation (Toggle, Box, Defaults, Reset).

use crate::app::state::ClassifyMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::FLOORS_MAX;

/// Invertiert die Klassifikation der Region unter dem Klickpunkt.
pub fn toggle_region_at(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::toggle_region_at(state, world_pos);
}

/// Wendet den aktiven Modus auf alle Regionen im Rechteck an.
pub fn classify_in_rect(state: &mut AppState, min: glam::Vec2, max: glam::Vec2) {
    use_cases::selection::classify_regions_in_rect(state, min, max);
}

/// Setzt den aktiven Klassifikations-Modus.
pub fn set_mode(state: &mut AppState, mode: ClassifyMode) {
    state.selection.mode = mode;
}

/// Setzt den Footprint-Default für neue Gebäude-Tags.
pub fn set_default_footprint(state: &mut AppState, is_footprint: bool) {
    state.selection.default_is_footprint = is_footprint;
}

/// Setzt den Geschosszahl-Default, geklemmt auf [1, FLOORS_MAX].
pub fn set_default_floors(state: &mut AppState, floors: u32) {
    state.selection.default_floors = floors.clamp(1, FLOORS_MAX);
}

/// Schaltet den Schreibschutz um.
pub fn set_read_only(state: &mut AppState, read_only: bool) {
    state.options.read_only = read_only;
}

/// Setzt alle Tags zurück.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_tags(state);
}
