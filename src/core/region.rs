//! Einzelne Plan-Region: unveränderliches Polygon mit vorberechneter Geometrie.

use super::path::parse_render_path;
use super::WorldBounds;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein geschlossenes Polygon aus der CAD-Extraktion.
///
/// `points`, `bounding_box` und die Flächenwerte werden extern geliefert und
/// vom Viewer nie mutiert. `render_path` ist ein optionaler Zeichen-Cache;
/// fehlt er oder ist er fehlerhaft, wird die Kontur aus `points` abgeleitet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRegion {
    /// Eindeutige, über Re-Renders stabile ID innerhalb der Szene
    pub id: u64,
    /// Geschlossener Ring in Welt-Koordinaten (Even-Odd-Füllregel)
    pub points: Vec<Vec2>,
    /// Optionaler vorberechneter Pfad-String (M/L/Z), äquivalent zu `points`
    #[serde(default)]
    pub render_path: Option<String>,
    /// Bounding Box in Welt-Koordinaten (konsistent zu `points`)
    #[serde(default = "WorldBounds::empty")]
    pub bounding_box: WorldBounds,
    /// Fläche im Pixel-Raum der Quelle
    #[serde(default)]
    pub area_raw: f32,
    /// Fläche in realen Einheiten (m²)
    #[serde(default)]
    pub area_world: f32,
}

impl PlanRegion {
    /// Even-Odd-Punkt-im-Polygon-Test auf `points` mit Bounding-Box-Vorprüfung.
    ///
    /// Die Parität über den einen Ring behandelt auch selbst beschriebene
    /// Löcher (Keyhole-Schnitte) korrekt.
    pub fn contains_point(&self, p: Vec2) -> bool {
        if !self.bounding_box.contains(p) {
            return false;
        }
        point_in_ring_even_odd(&self.points, p)
    }

    /// Liefert die Zeichen-Ringe: Subpfade aus `render_path` falls vorhanden
    /// und parsebar, sonst der `points`-Ring. Ein leerer `points`-Ring ergibt
    /// keine Ringe (die Region wird dann nicht gezeichnet, bleibt aber im
    /// Datenmodell).
    pub fn outline_rings(&self) -> Vec<Vec<Vec2>> {
        if let Some(path) = self.render_path.as_deref() {
            if let Some(rings) = parse_render_path(path) {
                return rings;
            }
            log::debug!("Region {}: render_path unlesbar, fallback auf points", self.id);
        }
        if self.points.len() >= 3 {
            vec![self.points.clone()]
        } else {
            Vec::new()
        }
    }
}

/// Even-Odd-Test: zählt Kantenkreuzungen eines horizontalen Strahls.
fn point_in_ring_even_odd(ring: &[Vec2], p: Vec2) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: u64) -> PlanRegion {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        PlanRegion {
            id,
            bounding_box: WorldBounds::from_points(&points),
            points,
            render_path: None,
            area_raw: 100.0,
            area_world: 100.0,
        }
    }

    #[test]
    fn contains_point_inside_and_outside() {
        let region = square(1);
        assert!(region.contains_point(Vec2::new(5.0, 5.0)));
        assert!(!region.contains_point(Vec2::new(15.0, 5.0)));
        assert!(!region.contains_point(Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn keyhole_ring_excludes_self_described_hole() {
        // Quadrat mit über einen Schnitt angebundenem Innenring (Loch)
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 7.0),
            Vec2::new(7.0, 7.0),
            Vec2::new(7.0, 3.0),
            Vec2::new(3.0, 3.0),
        ];
        let region = PlanRegion {
            id: 2,
            bounding_box: WorldBounds::from_points(&points),
            points,
            render_path: None,
            area_raw: 0.0,
            area_world: 0.0,
        };
        assert!(region.contains_point(Vec2::new(1.0, 5.0))); // im Rand-Bereich
        assert!(!region.contains_point(Vec2::new(5.0, 5.0))); // im Loch
    }

    #[test]
    fn outline_rings_prefers_render_path() {
        let mut region = square(3);
        region.render_path =
            Some("M 0 0 L 10 0 L 10 10 L 0 10 Z M 4 4 L 6 4 L 6 6 L 4 6 Z".to_string());
        let rings = region.outline_rings();
        assert_eq!(rings.len(), 2);
    }

    #[test]
    fn outline_rings_falls_back_on_malformed_path() {
        let mut region = square(4);
        region.render_path = Some("M kaputt".to_string());
        let rings = region.outline_rings();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
    }

    #[test]
    fn degenerate_region_never_contains() {
        let region = PlanRegion {
            id: 5,
            points: vec![Vec2::new(1.0, 1.0)],
            render_path: None,
            bounding_box: WorldBounds::from_points(&[Vec2::new(1.0, 1.0)]),
            area_raw: 0.0,
            area_world: 0.0,
        };
        assert!(!region.contains_point(Vec2::new(1.0, 1.0)));
        assert!(region.outline_rings().is_empty());
    }
}
