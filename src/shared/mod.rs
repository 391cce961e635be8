//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod style;

pub use options::ViewerOptions;
pub use options::{BOX_SELECT_MIN_DRAG_WORLD, FLOORS_MAX};
pub use render_scene::RenderScene;
pub use style::{style_for, RegionStyle};
