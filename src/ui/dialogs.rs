//! Native Datei-Dialoge (rfd), entkoppelt über UiState-Flags.

use crate::app::{AppIntent, UiState};

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Plan-Szene", &["json"])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path.to_string_lossy().into_owned(),
            });
        }
    }

    events
}
