//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::ViewerOptions;
use crate::core::{Camera2D, PlanScene, TagMap};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Die aktuelle Plan-Szene (None = nichts geladen)
    pub scene: Option<Arc<PlanScene>>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Tag-Zuordnung für die Stil-Auflösung (Arc für O(1)-Clone pro Frame)
    pub tags: Arc<TagMap>,
    /// Laufzeit-Optionen für Farben und Schwellwerte (enthält auch read_only)
    pub options: ViewerOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Szene für Rendering vorhanden ist.
    pub fn has_scene(&self) -> bool {
        self.scene.is_some()
    }
}
