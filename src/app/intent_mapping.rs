//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::PopupAction;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ToggleToolRequested { tool } => vec![AppCommand::ToggleTool { tool }],
        AppIntent::CancelRequested => {
            let Some(kind) = state.modes.active() else {
                return vec![];
            };
            if state.modes.tool(kind).has_pending_input() {
                vec![AppCommand::CancelToolInput]
            } else {
                vec![AppCommand::DeactivateActiveTool]
            }
        }
        AppIntent::MapClicked { pos } => {
            if state.modes.active().is_some() {
                vec![AppCommand::ToolClick { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::MarkerDragged { marker, pos } => vec![AppCommand::DragMarker { marker, pos }],
        AppIntent::PopupActionTriggered { action } => vec![match action {
            PopupAction::NewMeasurement => AppCommand::NewMeasurement,
            PopupAction::ClearRoute => AppCommand::ClearRoute,
            PopupAction::FinishRoute => AppCommand::FinishRoute,
            PopupAction::RemoveWaypoint(index) => AppCommand::RemoveWaypoint { index },
            PopupAction::ShowSummary => AppCommand::ShowRouteSummary,
        }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::CameraZoom { delta, focus } => vec![AppCommand::ZoomCamera { delta, focus }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
