//! Achsen-alignierte Welt-Rechtecke für Szenen-Ausdehnung und Hit-Tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Achsen-aliniertes Rechteck in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl WorldBounds {
    /// Erstellt ein Rechteck aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Berechnet die Bounding Box einer Punktfolge.
    /// Leere Folge → Punkt-Rechteck im Ursprung.
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut bounds = Self {
            min_x: f32::MAX,
            min_y: f32::MAX,
            max_x: f32::MIN,
            max_y: f32::MIN,
        };
        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        if points.is_empty() {
            return Self {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 0.0,
                max_y: 0.0,
            };
        }
        bounds
    }

    /// Null-Rechteck im Ursprung; Serde-Default für fehlende Bounding Boxen,
    /// die beim Szenen-Laden aus `points` neu berechnet werden.
    pub fn empty() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        }
    }

    /// Breite des Rechtecks.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Höhe des Rechtecks.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Prüft ob ein Punkt innerhalb oder auf dem Rand liegt.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Prüft ob ein anderes Rechteck vollständig enthalten ist (Rand zählt).
    pub fn contains_bounds(&self, other: &WorldBounds) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Standard-Überlappungstest für achsen-alignierte Rechtecke.
    /// Berührung an einer Kante zählt als Überlappung; Null-Flächen-Rechtecke
    /// verhalten sich wie Punkte.
    pub fn overlaps(&self, other: &WorldBounds) -> bool {
        !(other.max_x < self.min_x
            || other.min_x > self.max_x
            || other.max_y < self.min_y
            || other.min_y > self.max_y)
    }

    /// Prüft auf ausgeartete Ausdehnung (Breite oder Höhe ≤ 0).
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_spans_all_points() {
        let bounds = WorldBounds::from_points(&[
            Vec2::new(3.0, -1.0),
            Vec2::new(-2.0, 4.0),
            Vec2::new(0.5, 0.5),
        ]);
        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_x, 3.0);
        assert_eq!(bounds.max_y, 4.0);
    }

    #[test]
    fn overlaps_partial_and_contained() {
        let a = WorldBounds::from_corners(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        let partial = WorldBounds::from_corners(Vec2::new(15.0, 15.0), Vec2::new(25.0, 25.0));
        let inside = WorldBounds::from_corners(Vec2::new(12.0, 12.0), Vec2::new(14.0, 14.0));
        assert!(a.overlaps(&partial));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn overlaps_disjoint_is_false() {
        let a = WorldBounds::from_corners(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        let b = WorldBounds::from_corners(Vec2::new(21.0, 21.0), Vec2::new(25.0, 25.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn overlaps_edge_contact_counts() {
        let a = WorldBounds::from_corners(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = WorldBounds::from_corners(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn degenerate_bounds_behave_like_points() {
        let point = WorldBounds::from_corners(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        let rect = WorldBounds::from_corners(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(point.is_degenerate());
        assert!(rect.overlaps(&point));
        assert!(point.overlaps(&rect));

        let outside = WorldBounds::from_corners(Vec2::new(11.0, 11.0), Vec2::new(11.0, 11.0));
        assert!(!rect.overlaps(&outside));
    }

    #[test]
    fn contains_bounds_includes_border() {
        let outer = WorldBounds::from_corners(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let on_border = WorldBounds::from_corners(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0));
        assert!(outer.contains_bounds(&on_border));
        assert!(!on_border.contains_bounds(&outer));
    }
}
