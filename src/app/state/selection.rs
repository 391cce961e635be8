use crate::core::TagMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Aktiver Klassifikations-Modus für Klick- und Box-Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClassifyMode {
    /// Grundstücks-Regionen taggen
    Site,
    /// Gebäude-Regionen taggen
    #[default]
    Building,
}

/// Klassifikations-Zustand der Anwendung.
///
/// Die Tag-Zuordnung gehört dem App-Layer; der Viewer-Kern liest sie nur
/// und fordert Änderungen ausschließlich über Intents an.
#[derive(Clone)]
pub struct SelectionState {
    /// Tag-Zuordnung Region-ID → Tags (Arc für O(1)-Clone in RenderScene)
    pub tags: Arc<TagMap>,
    /// Aktiver Klassifikations-Modus
    pub mode: ClassifyMode,
    /// Footprint-Default für neu getaggte Gebäude
    pub default_is_footprint: bool,
    /// Geschosszahl-Default für neu getaggte Gebäude
    pub default_floors: u32,
}

impl SelectionState {
    /// Erstellt einen leeren Klassifikations-Zustand.
    pub fn new() -> Self {
        Self {
            tags: Arc::new(TagMap::new()),
            mode: ClassifyMode::default(),
            default_is_footprint: true,
            default_floors: 1,
        }
    }

    /// Gibt eine mutable Referenz auf die TagMap zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Tags gehen über diese Methode, damit der
    /// Arc-Klon in `render_scene::build()` O(1) bleibt.
    #[inline]
    pub fn tags_mut(&mut self) -> &mut TagMap {
        Arc::make_mut(&mut self.tags)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
