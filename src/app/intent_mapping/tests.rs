use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{PopupAction, ToolKind, Waypoint};

use super::map_intent_to_commands;

fn activate(state: &mut AppState, kind: ToolKind) {
    let (modes, mut ctx) = state.split_tools();
    modes.activate(kind, &mut ctx);
}

#[test]
fn toggle_tool_requested_maps_to_toggle_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::CoursePlotter,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::ToggleTool {
            tool: ToolKind::CoursePlotter
        }
    ));
}

#[test]
fn map_click_without_active_tool_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            pos: Waypoint::new(1.0, 2.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn map_click_with_active_tool_maps_to_tool_click() {
    let mut state = AppState::new();
    activate(&mut state, ToolKind::DistanceTool);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            pos: Waypoint::new(1.0, 2.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ToolClick { .. }));
}

#[test]
fn cancel_without_active_tool_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::CancelRequested);

    assert!(commands.is_empty());
}

#[test]
fn cancel_without_pending_input_deactivates_tool() {
    let mut state = AppState::new();
    activate(&mut state, ToolKind::DistanceTool);

    let commands = map_intent_to_commands(&state, AppIntent::CancelRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::DeactivateActiveTool));
}

#[test]
fn cancel_with_pending_input_cancels_input_only() {
    let mut state = AppState::new();
    activate(&mut state, ToolKind::CoursePlotter);
    {
        let (modes, mut ctx) = state.split_tools();
        modes.dispatch_click(Waypoint::new(0.0, 0.0), &mut ctx);
    }

    let commands = map_intent_to_commands(&state, AppIntent::CancelRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CancelToolInput));
}

#[test]
fn popup_actions_map_to_matching_commands() {
    let state = AppState::new();

    let cases = [
        (PopupAction::NewMeasurement, AppCommand::NewMeasurement),
        (PopupAction::ClearRoute, AppCommand::ClearRoute),
        (PopupAction::FinishRoute, AppCommand::FinishRoute),
        (
            PopupAction::RemoveWaypoint(3),
            AppCommand::RemoveWaypoint { index: 3 },
        ),
        (PopupAction::ShowSummary, AppCommand::ShowRouteSummary),
    ];
    for (action, expected) in cases {
        let commands = map_intent_to_commands(&state, AppIntent::PopupActionTriggered { action });
        assert_eq!(commands, vec![expected]);
    }
}

#[test]
fn exit_requested_maps_to_request_exit() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RequestExit));
}
