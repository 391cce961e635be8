//! Klassifikations-Tags pro Region und daraus abgeleitete Flächen-Kennzahlen.

use super::PlanScene;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tag-Satz einer Region.
///
/// `floors` und `is_footprint` sind nur bei `is_building` bedeutsam.
/// Eine Region ohne Eintrag in der [`TagMap`] gilt als unklassifiziert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTags {
    /// Region gehört zum Grundstück (Site)
    pub is_site: bool,
    /// Region ist ein Gebäude-Polygon
    pub is_building: bool,
    /// Gebäude-Polygon ist der Erdgeschoss-Footprint (sonst Obergeschoss)
    pub is_footprint: bool,
    /// Geschosszahl des Gebäude-Polygons
    pub floors: u32,
}

impl Default for RegionTags {
    fn default() -> Self {
        Self {
            is_site: false,
            is_building: false,
            is_footprint: true,
            floors: 1,
        }
    }
}

impl RegionTags {
    /// Prüft ob irgendein Klassifikations-Flag gesetzt ist.
    pub fn is_classified(&self) -> bool {
        self.is_site || self.is_building
    }
}

/// Tag-Zuordnung Region-ID → Tags.
/// IndexMap hält die Einfüge-Reihenfolge deterministisch (stabile Anzeige
/// und reproduzierbare Tests).
pub type TagMap = IndexMap<u64, RegionTags>;

/// Flächen-Kennzahlen über alle getaggten Regionen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AreaMetrics {
    /// Summierte Grundstücksfläche (m²)
    pub site_area: f32,
    /// Summierte Footprint-Fläche aller Gebäude (m²)
    pub footprint_area: f32,
    /// Summierte Geschossfläche (Fläche × Geschosse, m²)
    pub total_floor_area: f32,
}

impl AreaMetrics {
    /// Berechnet die Kennzahlen aus Szene und Tag-Zuordnung.
    pub fn compute(scene: &PlanScene, tags: &TagMap) -> Self {
        let mut metrics = Self::default();
        for (&id, tag) in tags {
            let Some(region) = scene.region(id) else {
                continue;
            };
            if tag.is_site {
                metrics.site_area += region.area_world;
            }
            if tag.is_building {
                if tag.is_footprint {
                    metrics.footprint_area += region.area_world;
                }
                metrics.total_floor_area += region.area_world * tag.floors as f32;
            }
        }
        metrics
    }

    /// Bebauungsgrad (Footprint / Site) in Prozent; 0 bei leerer Site-Fläche.
    pub fn coverage_ratio_percent(&self) -> f32 {
        if self.site_area == 0.0 {
            0.0
        } else {
            self.footprint_area / self.site_area * 100.0
        }
    }

    /// Geschossflächenzahl (Geschossfläche / Site); 0 bei leerer Site-Fläche.
    pub fn floor_area_ratio(&self) -> f32 {
        if self.site_area == 0.0 {
            0.0
        } else {
            self.total_floor_area / self.site_area
        }
    }
}
