//! Zentrale Konfiguration für den Plan-Region-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────
// Die Zoom-Klemmgrenzen [0.1, 200] liegen als Konstanten auf `Camera2D`.

/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Faktor pro Mausrad-Raste Richtung "heranziehen".
pub const WHEEL_ZOOM_IN_STEP: f32 = 1.1;
/// Zoom-Faktor pro Mausrad-Raste Richtung "wegschieben".
pub const WHEEL_ZOOM_OUT_STEP: f32 = 0.9;

// ── Selektion ───────────────────────────────────────────────────────

/// Mindest-Drag-Distanz (Welt-Einheiten), ab der eine Box-Selektion als
/// solche gilt statt als versehentlicher Klick verworfen zu werden.
pub const BOX_SELECT_MIN_DRAG_WORLD: f32 = 0.05;
/// Maximale Geschosszahl im Spinner.
pub const FLOORS_MAX: u32 = 100;

// ── Region-Rendering (klassisches Farbschema) ──────────────────────

/// Füllfarbe Site+Building kombiniert (RGBA: Violett).
pub const REGION_COLOR_SITE_BUILDING: [f32; 4] = [0.6, 0.2, 0.8, 0.7];
/// Füllfarbe reiner Site-Regionen (RGBA: Cyan).
pub const REGION_COLOR_SITE: [f32; 4] = [0.0, 1.0, 1.0, 0.4];
/// Füllfarbe Gebäude-Footprints (RGBA: Orange).
pub const REGION_COLOR_FOOTPRINT: [f32; 4] = [1.0, 0.65, 0.0, 0.6];
/// Füllfarbe Gebäude-Obergeschosse (RGBA: Gold).
pub const REGION_COLOR_BUILDING: [f32; 4] = [1.0, 0.84, 0.0, 0.5];
/// Füllfarbe unklassifizierter Regionen (RGBA: Dunkelgrau).
pub const REGION_COLOR_UNCLASSIFIED: [f32; 4] = [0.2, 0.2, 0.2, 0.3];
/// Umriss klassifizierter Regionen (RGBA: Weiß).
pub const REGION_STROKE_HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Umriss unklassifizierter Regionen (RGBA: Grau).
pub const REGION_STROKE_NEUTRAL: [f32; 4] = [0.33, 0.33, 0.33, 1.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Dunkelgrau).
pub const CANVAS_BACKGROUND: [f32; 4] = [0.12, 0.12, 0.12, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `plan_region_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── Regionen ────────────────────────────────────────────────
    /// Füllfarbe Site+Building kombiniert (RGBA)
    pub region_color_site_building: [f32; 4],
    /// Füllfarbe reiner Site-Regionen
    pub region_color_site: [f32; 4],
    /// Füllfarbe Gebäude-Footprints
    pub region_color_footprint: [f32; 4],
    /// Füllfarbe Gebäude-Obergeschosse
    pub region_color_building: [f32; 4],
    /// Füllfarbe unklassifizierter Regionen
    pub region_color_unclassified: [f32; 4],
    /// Umrissfarbe klassifizierter Regionen
    pub region_stroke_highlight: [f32; 4],
    /// Umrissfarbe unklassifizierter Regionen
    pub region_stroke_neutral: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Faktor pro Mausrad-Raste hinein
    pub wheel_zoom_in_step: f32,
    /// Zoom-Faktor pro Mausrad-Raste heraus
    pub wheel_zoom_out_step: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Mindest-Drag-Distanz für Box-Selektion (Welt-Einheiten)
    pub box_select_min_drag_world: f32,
    /// Viewer startet schreibgeschützt (Navigation ohne Klassifikation)
    #[serde(default)]
    pub read_only: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            region_color_site_building: REGION_COLOR_SITE_BUILDING,
            region_color_site: REGION_COLOR_SITE,
            region_color_footprint: REGION_COLOR_FOOTPRINT,
            region_color_building: REGION_COLOR_BUILDING,
            region_color_unclassified: REGION_COLOR_UNCLASSIFIED,
            region_stroke_highlight: REGION_STROKE_HIGHLIGHT,
            region_stroke_neutral: REGION_STROKE_NEUTRAL,

            camera_zoom_step: CAMERA_ZOOM_STEP,
            wheel_zoom_in_step: WHEEL_ZOOM_IN_STEP,
            wheel_zoom_out_step: WHEEL_ZOOM_OUT_STEP,

            box_select_min_drag_world: BOX_SELECT_MIN_DRAG_WORLD,
            read_only: false,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("plan_region_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("plan_region_viewer.toml")
    }
}
