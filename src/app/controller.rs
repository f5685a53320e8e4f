//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Werkzeug-Aktionen auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
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
            // === Werkzeuge ===
            AppCommand::ToggleTool { tool } => handlers::tools::toggle(state, tool),
            AppCommand::DeactivateActiveTool => handlers::tools::deactivate_active(state),
            AppCommand::CancelToolInput => handlers::tools::cancel_input(state),
            AppCommand::ToolClick { pos } => handlers::tools::click(state, pos),
            AppCommand::DragMarker { marker, pos } => {
                handlers::tools::drag_marker(state, marker, pos)?
            }

            // === Distanzmessung ===
            AppCommand::NewMeasurement => handlers::distance::new_measurement(state),

            // === Routenplaner ===
            AppCommand::RemoveWaypoint { index } => {
                handlers::course::remove_waypoint(state, index)?
            }
            AppCommand::FinishRoute => handlers::course::finish_route(state),
            AppCommand::ClearRoute => handlers::course::clear_route(state),
            AppCommand::ShowRouteSummary => handlers::course::show_summary(state)?,

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera { delta, focus } => {
                handlers::view::zoom_towards(state, delta, focus)
            }
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ResetView => handlers::view::reset_view(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
