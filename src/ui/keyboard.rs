//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_o, key_plus, key_minus, key_home) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::Plus),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Home),
        )
    });

    if modifiers.command && key_o {
        events.push(AppIntent::OpenFileRequested);
    }

    if key_plus {
        events.push(AppIntent::ZoomInRequested);
    }

    if key_minus {
        events.push(AppIntent::ZoomOutRequested);
    }

    if key_home {
        events.push(AppIntent::ResetViewRequested);
    }

    events
}
