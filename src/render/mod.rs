//! Render-Layer: Triangulierung und Painter-basiertes Szenen-Zeichnen.

mod scene_renderer;
mod tessellate;

pub use scene_renderer::SceneRenderer;
pub use tessellate::{tessellate_region, RegionMesh};
