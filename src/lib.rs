//! Plan-Region-Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ClassifyMode, UiState, ViewState};
pub use crate::core::{
    AreaMetrics, Camera2D, PlanRegion, PlanScene, RegionTags, TagMap, WorldBounds,
};
pub use shared::{style_for, RegionStyle, RenderScene, ViewerOptions};
