//! Zeichnet die Plan-Szene über den egui-Painter.
//!
//! Die Triangulierung wird pro Szene gecacht (Regionen sind unveränderlich);
//! nur Farben und Transformation entstehen pro Frame neu. Ein Frame ist eine
//! pure Funktion der RenderScene.

use super::tessellate::{tessellate_region, RegionMesh};
use crate::core::{Camera2D, PlanScene, WorldBounds};
use crate::shared::options::CANVAS_BACKGROUND;
use crate::shared::{style_for, RenderScene};
use glam::Vec2;
use std::collections::HashMap;
use std::sync::Arc;

/// Renderer mit szenen-gebundenem Mesh-Cache.
#[derive(Default)]
pub struct SceneRenderer {
    cached_scene: Option<Arc<PlanScene>>,
    meshes: HashMap<u64, Option<RegionMesh>>,
}

impl SceneRenderer {
    /// Erstellt einen Renderer ohne Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen Frame in das gegebene Bildschirm-Rechteck.
    pub fn draw(&mut self, painter: &egui::Painter, rect: egui::Rect, frame: &RenderScene) {
        painter.rect_filled(rect, 0.0, color32(CANVAS_BACKGROUND));

        let Some(scene_arc) = frame.scene.as_ref() else {
            return;
        };
        let scene = scene_arc.as_ref();
        // Ohne Szenen-Ausdehnung gibt es kein Sichtfenster → leerer Platzhalter
        let Some(bounds) = scene.bounds else {
            return;
        };

        self.refresh_cache(scene_arc);

        let viewport = Vec2::new(rect.width(), rect.height());
        for region in &scene.regions {
            let Some(Some(mesh)) = self.meshes.get(&region.id) else {
                continue;
            };
            let style = style_for(frame.tags.get(&region.id), &frame.options);

            let fill = color32(style.fill);
            let mut shape = egui::Mesh::default();
            for v in &mesh.vertices {
                let p = to_screen(*v, &frame.camera, viewport, &bounds, rect);
                shape.colored_vertex(p, fill);
            }
            shape.indices.extend_from_slice(&mesh.indices);
            painter.add(egui::Shape::mesh(shape));

            let stroke = egui::Stroke::new(style.stroke_width, color32(style.stroke));
            for ring in &mesh.rings {
                let points: Vec<egui::Pos2> = ring
                    .iter()
                    .map(|p| to_screen(*p, &frame.camera, viewport, &bounds, rect))
                    .collect();
                painter.add(egui::Shape::closed_line(points, stroke));
            }
        }
    }

    /// Baut den Mesh-Cache neu auf, wenn die Szene ersetzt wurde.
    fn refresh_cache(&mut self, scene: &Arc<PlanScene>) {
        let is_current = self
            .cached_scene
            .as_ref()
            .is_some_and(|cached| Arc::ptr_eq(cached, scene));
        if is_current {
            return;
        }

        self.meshes = scene
            .regions
            .iter()
            .map(|region| (region.id, tessellate_region(region)))
            .collect();
        self.cached_scene = Some(scene.clone());
        log::info!("Mesh-Cache neu aufgebaut: {} Regionen", self.meshes.len());
    }
}

/// Welt → Bildschirm inkl. Offset des Ziel-Rechtecks.
fn to_screen(
    world: Vec2,
    camera: &Camera2D,
    viewport: Vec2,
    bounds: &WorldBounds,
    rect: egui::Rect,
) -> egui::Pos2 {
    let s = camera.world_to_screen(world, viewport, bounds);
    egui::Pos2::new(rect.min.x + s.x, rect.min.y + s.y)
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlanRegion;

    fn scene_arc() -> Arc<PlanScene> {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        Arc::new(PlanScene {
            regions: vec![PlanRegion {
                id: 1,
                bounding_box: WorldBounds::from_points(&points),
                points,
                render_path: None,
                area_raw: 0.0,
                area_world: 0.0,
            }],
            bounds: Some(WorldBounds {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 10.0,
                max_y: 10.0,
            }),
            name: None,
        })
    }

    #[test]
    fn cache_rebuilds_only_on_scene_replacement() {
        let mut renderer = SceneRenderer::new();
        let scene = scene_arc();

        renderer.refresh_cache(&scene);
        assert_eq!(renderer.meshes.len(), 1);
        let first_ptr = renderer.cached_scene.as_ref().map(Arc::as_ptr);

        // Gleiche Szene → Cache bleibt
        renderer.refresh_cache(&scene);
        assert_eq!(renderer.cached_scene.as_ref().map(Arc::as_ptr), first_ptr);

        // Neue Szene → Cache wird ersetzt
        let other = scene_arc();
        renderer.refresh_cache(&other);
        assert_ne!(renderer.cached_scene.as_ref().map(Arc::as_ptr), first_ptr);
    }
}
