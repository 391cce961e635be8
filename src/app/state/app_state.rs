use crate::app::CommandLog;
use crate::core::PlanScene;
use crate::shared::ViewerOptions;
use std::sync::Arc;

use super::{SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladene Plan-Szene (None = keine Datei geladen)
    pub scene: Option<Arc<PlanScene>>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Klassifikations-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Zoom-Grenzen, Schwellwerte)
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            scene: None,
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            options: ViewerOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Regionen zurück (für UI-Anzeige)
    pub fn region_count(&self) -> usize {
        self.scene.as_ref().map_or(0, |s| s.region_count())
    }

    /// Gibt zurück, ob Klassifikation aktuell erlaubt ist.
    pub fn selection_enabled(&self) -> bool {
        !self.options.read_only
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
