//! CPU-Triangulierung der Region-Ringe für das Mesh-Rendering.
//!
//! Der erste Ring ist die Außenkontur, weitere Ringe sind Löcher
//! (Even-Odd). Earcut bekommt die Löcher über Hole-Start-Indizes in der
//! zusammengehängten Vertex-Liste.

use crate::core::PlanRegion;
use glam::Vec2;

/// Trianguliertes Polygon in Welt-Koordinaten.
#[derive(Debug, Clone)]
pub struct RegionMesh {
    /// Alle Ring-Vertices hintereinander (außen, dann Löcher)
    pub vertices: Vec<Vec2>,
    /// Dreiecks-Indizes in `vertices`
    pub indices: Vec<u32>,
    /// Ring-Konturen für den Umriss
    pub rings: Vec<Vec<Vec2>>,
}

/// Trianguliert eine Region. `None` bei degenerierter Geometrie
/// (weniger als drei Punkte oder kollineare Ringe).
pub fn tessellate_region(region: &PlanRegion) -> Option<RegionMesh> {
    let rings = region.outline_rings();
    tessellate_rings(rings)
}

fn tessellate_rings(rings: Vec<Vec<Vec2>>) -> Option<RegionMesh> {
    let outer = rings.first()?;
    if outer.len() < 3 {
        return None;
    }

    let mut coords: Vec<f64> = Vec::with_capacity(rings.iter().map(|r| r.len() * 2).sum());
    let mut hole_indices: Vec<usize> = Vec::new();
    let mut vertices: Vec<Vec2> = Vec::new();

    for (ring_index, ring) in rings.iter().enumerate() {
        if ring_index > 0 {
            hole_indices.push(vertices.len());
        }
        for p in ring {
            coords.push(p.x as f64);
            coords.push(p.y as f64);
            vertices.push(*p);
        }
    }

    let triangles = earcutr::earcut(&coords, &hole_indices, 2).ok()?;
    if triangles.is_empty() {
        return None;
    }

    Some(RegionMesh {
        vertices,
        indices: triangles.into_iter().map(|i| i as u32).collect(),
        rings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorldBounds;

    fn region_from_points(points: Vec<Vec2>) -> PlanRegion {
        PlanRegion {
            id: 1,
            bounding_box: WorldBounds::from_points(&points),
            points,
            render_path: None,
            area_raw: 0.0,
            area_world: 0.0,
        }
    }

    #[test]
    fn square_tessellates_to_two_triangles() {
        let region = region_from_points(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]);
        let mesh = tessellate_region(&region).expect("Mesh erwartet");
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.rings.len(), 1);
    }

    #[test]
    fn ring_with_hole_keeps_hole_empty() {
        let mut region = region_from_points(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]);
        region.render_path =
            Some("M 0 0 L 10 0 L 10 10 L 0 10 Z M 4 4 L 4 6 L 6 6 L 6 4 Z".to_string());

        let mesh = tessellate_region(&region).expect("Mesh erwartet");
        assert_eq!(mesh.rings.len(), 2);
        assert_eq!(mesh.vertices.len(), 8);
        // 8 Vertices mit einem Loch → 8 Dreiecke
        assert_eq!(mesh.indices.len(), 24);
    }

    #[test]
    fn degenerate_region_yields_no_mesh() {
        let region = region_from_points(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]);
        assert!(tessellate_region(&region).is_none());
    }
}
