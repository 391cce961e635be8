//! Core-Domänentypen: Regionen, Szene, Tags, Kamera, Welt-Rechtecke.

pub mod bounds;
pub mod camera;
pub mod path;
/// Core-Datenmodelle der Plan-Szene
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - PlanScene: Container für alle Regionen plus Gesamt-Ausdehnung
/// - PlanRegion: Einzelnes Polygon mit vorberechneter Geometrie
/// - RegionTags/TagMap: Klassifikations-Zustand pro Region
pub mod region;
pub mod scene;
pub mod tags;

pub use bounds::WorldBounds;
pub use camera::Camera2D;
pub use path::parse_render_path;
pub use region::PlanRegion;
pub use scene::PlanScene;
pub use tags::{AreaMetrics, RegionTags, TagMap};
