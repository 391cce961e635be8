//! Die geladene Plan-Szene: Regionen plus Gesamt-Ausdehnung.

use super::{PlanRegion, WorldBounds};
use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Vollständige Szene aus der Extraktions-Pipeline.
///
/// Wird pro Ladevorgang als Ganzes ersetzt; Regionen sind danach
/// unveränderlich. `bounds` beschreibt die Gesamt-Ausdehnung und kommt aus
/// der Quelle (fehlt sie, bleibt die Szene ohne Sichtfenster darstellbar).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanScene {
    /// Alle Regionen in Zeichen-Reihenfolge (hinten = oben)
    pub regions: Vec<PlanRegion>,
    /// Gesamt-Ausdehnung aller Regionen (optional)
    #[serde(default)]
    pub bounds: Option<WorldBounds>,
    /// Name der Quelle (optional, nur Anzeige)
    #[serde(default)]
    pub name: Option<String>,
}

impl PlanScene {
    /// Parst eine Szene aus dem JSON-Dokument der Pipeline und normalisiert
    /// fehlende oder inkonsistente Bounding Boxen aus `points`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut scene: PlanScene =
            serde_json::from_str(json).context("Szenen-JSON konnte nicht geparst werden")?;
        scene.normalize();
        Ok(scene)
    }

    /// Stellt die Invariante "alle Punkte liegen in der Bounding Box" her.
    /// Gelieferte Boxen, die sie verletzen, werden neu berechnet.
    fn normalize(&mut self) {
        for region in &mut self.regions {
            let derived = WorldBounds::from_points(&region.points);
            let supplied = &region.bounding_box;
            let consistent = region
                .points
                .iter()
                .all(|p| supplied.contains(*p));
            if !consistent {
                log::warn!(
                    "Region {}: Bounding Box inkonsistent zu points, neu berechnet",
                    region.id
                );
                region.bounding_box = derived;
            }
        }
    }

    /// Anzahl der Regionen.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Liefert eine Region per ID.
    pub fn region(&self, id: u64) -> Option<&PlanRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Findet die oberste Region unter einem Welt-Punkt.
    ///
    /// Rückwärts über die Zeichen-Reihenfolge, damit später gezeichnete
    /// (kleinere) Regionen Vorrang vor darunterliegenden haben.
    pub fn region_at(&self, world_pos: Vec2) -> Option<u64> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.contains_point(world_pos))
            .map(|r| r.id)
    }

    /// Liefert die IDs aller Regionen, deren Bounding Box das Rechteck
    /// schneidet (Kanten-Berührung zählt; Null-Flächen-Boxen wie Punkte).
    pub fn regions_in_rect(&self, min: Vec2, max: Vec2) -> Vec<u64> {
        let query = WorldBounds::from_corners(min, max);
        self.regions
            .iter()
            .filter(|r| query.overlaps(&r.bounding_box))
            .map(|r| r.id)
            .collect()
    }
}
