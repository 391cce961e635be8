//! Handler für Datei-I/O und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Fordert den Datei-Öffnen-Dialog an (wird im UI-Layer verarbeitet).
pub fn request_open(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Lädt eine Szenen-Datei und propagiert Fehler an den Aufrufer.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_scene(state, &path)
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
