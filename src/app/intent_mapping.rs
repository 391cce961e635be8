//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Klassifikations-Intents werden hier zentral verworfen, wenn der Viewer
/// schreibgeschützt ist; Navigation bleibt davon unberührt.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { screen_delta } => vec![AppCommand::PanCamera { screen_delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::RegionToggleRequested { world_pos } => {
            if state.selection_enabled() {
                vec![AppCommand::ToggleRegionAt { world_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::RegionsBoxSelectRequested { min, max } => {
            if state.selection_enabled() {
                vec![AppCommand::ClassifyRegionsInRect { min, max }]
            } else {
                vec![]
            }
        }
        AppIntent::HoverChanged { region_id } => {
            vec![AppCommand::SetHoveredRegion { region_id }]
        }
        AppIntent::SetClassifyModeRequested { mode } => {
            vec![AppCommand::SetClassifyMode { mode }]
        }
        AppIntent::SetDefaultFootprintRequested { is_footprint } => {
            vec![AppCommand::SetDefaultFootprint { is_footprint }]
        }
        AppIntent::SetDefaultFloorsRequested { floors } => {
            vec![AppCommand::SetDefaultFloors { floors }]
        }
        AppIntent::SetReadOnlyRequested { read_only } => {
            vec![AppCommand::SetReadOnly { read_only }]
        }
        AppIntent::ClearTagsRequested => {
            if state.selection_enabled() {
                vec![AppCommand::ClearTags]
            } else {
                vec![]
            }
        }
        AppIntent::FileSelected { path } => vec![AppCommand::LoadScene { path }],
    }
}
