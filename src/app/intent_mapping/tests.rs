use super::map_intent_to_commands;
use crate::app::{AppCommand, AppIntent, AppState};

#[test]
fn toggle_maps_to_command_when_writable() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::RegionToggleRequested {
            world_pos: glam::Vec2::new(1.0, 2.0),
        },
    );
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::ToggleRegionAt { .. }]
    ));
}

#[test]
fn classification_intents_are_dropped_in_read_only_mode() {
    let mut state = AppState::new();
    state.options.read_only = true;

    let toggle = map_intent_to_commands(
        &state,
        AppIntent::RegionToggleRequested {
            world_pos: glam::Vec2::ZERO,
        },
    );
    let box_select = map_intent_to_commands(
        &state,
        AppIntent::RegionsBoxSelectRequested {
            min: glam::Vec2::ZERO,
            max: glam::Vec2::ONE,
        },
    );
    let clear = map_intent_to_commands(&state, AppIntent::ClearTagsRequested);

    assert!(toggle.is_empty());
    assert!(box_select.is_empty());
    assert!(clear.is_empty());
}

#[test]
fn navigation_stays_mapped_in_read_only_mode() {
    let mut state = AppState::new();
    state.options.read_only = true;

    let pan = map_intent_to_commands(
        &state,
        AppIntent::CameraPan {
            screen_delta: glam::Vec2::new(3.0, 4.0),
        },
    );
    let zoom = map_intent_to_commands(
        &state,
        AppIntent::CameraZoom {
            factor: 1.1,
            focus_world: None,
        },
    );

    assert!(matches!(pan.as_slice(), [AppCommand::PanCamera { .. }]));
    assert!(matches!(zoom.as_slice(), [AppCommand::ZoomCamera { .. }]));
}
