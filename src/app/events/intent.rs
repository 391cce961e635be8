use super::super::state::ClassifyMode;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Szenen-Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf Standard zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um ein Bildschirm-Pixel-Delta verschieben
    CameraPan { screen_delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Region unter dem Klickpunkt umklassifizieren (Einzel-Toggle)
    RegionToggleRequested { world_pos: glam::Vec2 },
    /// Abgeschlossene Box-Selektion auf alle geschnittenen Regionen anwenden
    RegionsBoxSelectRequested { min: glam::Vec2, max: glam::Vec2 },
    /// Hover-Region hat sich geändert (Status-Anzeige)
    HoverChanged { region_id: Option<u64> },
    /// Klassifikations-Modus wechseln (Site/Building)
    SetClassifyModeRequested { mode: ClassifyMode },
    /// Footprint-Default für neue Gebäude-Tags setzen
    SetDefaultFootprintRequested { is_footprint: bool },
    /// Geschosszahl-Default für neue Gebäude-Tags setzen
    SetDefaultFloorsRequested { floors: u32 },
    /// Schreibschutz umschalten
    SetReadOnlyRequested { read_only: bool },
    /// Alle Tags auf unklassifiziert zurücksetzen
    ClearTagsRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
}
