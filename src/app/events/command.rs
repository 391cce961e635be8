use super::super::state::ClassifyMode;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Anwendung beenden
    RequestExit,
    /// Szenen-Datei laden
    LoadScene { path: String },
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Bildschirm-Pixel-Delta verschieben
    PanCamera { screen_delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Region unter Weltposition umklassifizieren
    ToggleRegionAt { world_pos: glam::Vec2 },
    /// Regionen im Rechteck klassifizieren
    ClassifyRegionsInRect { min: glam::Vec2, max: glam::Vec2 },
    /// Hover-Region für die Status-Anzeige setzen
    SetHoveredRegion { region_id: Option<u64> },
    /// Klassifikations-Modus setzen
    SetClassifyMode { mode: ClassifyMode },
    /// Footprint-Default setzen
    SetDefaultFootprint { is_footprint: bool },
    /// Geschosszahl-Default setzen
    SetDefaultFloors { floors: u32 },
    /// Schreibschutz setzen
    SetReadOnly { read_only: bool },
    /// Alle Tags zurücksetzen
    ClearTags,
}
