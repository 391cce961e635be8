//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O & Anwendungssteuerung ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestExit => handlers::file_io::request_exit(state),
            AppCommand::LoadScene { path } => handlers::file_io::load(state, path)?,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { screen_delta } => handlers::view::pan(state, screen_delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),
            AppCommand::SetHoveredRegion { region_id } => {
                handlers::view::set_hovered_region(state, region_id)
            }

            // === Klassifikation ===
            AppCommand::ToggleRegionAt { world_pos } => {
                handlers::selection::toggle_region_at(state, world_pos)
            }
            AppCommand::ClassifyRegionsInRect { min, max } => {
                handlers::selection::classify_in_rect(state, min, max)
            }
            AppCommand::SetClassifyMode { mode } => handlers::selection::set_mode(state, mode),
            AppCommand::SetDefaultFootprint { is_footprint } => {
                handlers::selection::set_default_footprint(state, is_footprint)
            }
            AppCommand::SetDefaultFloors { floors } => {
                handlers::selection::set_default_floors(state, floors)
            }
            AppCommand::SetReadOnly { read_only } => {
                handlers::selection::set_read_only(state, read_only)
            }
            AppCommand::ClearTags => handlers::selection::clear(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
