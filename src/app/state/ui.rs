/// UI-bezogener Anwendungszustand (Dialoge, Statuszeile, Hover).
#[derive(Default)]
pub struct UiState {
    /// Datei-Öffnen-Dialog im nächsten Frame anzeigen
    pub show_file_dialog: bool,
    /// Pfad der aktuell geladenen Szenen-Datei
    pub current_file_path: Option<String>,
    /// Region unter dem Mauszeiger (Status-Anzeige)
    pub hovered_region_id: Option<u64>,
    /// Statusnachricht (z.B. Ladefehler)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
