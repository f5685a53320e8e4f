//! Handler für die Distanzmessung.

use crate::app::AppState;
use crate::core::ToolKind;

/// Verwirft die aktuelle Messung und wartet auf einen neuen Startpunkt.
pub fn new_measurement(state: &mut AppState) {
    if !state.modes.is_active(ToolKind::DistanceTool) {
        log::debug!("Neue Messung ignoriert: Distanzmessung inaktiv");
        return;
    }
    let (modes, mut ctx) = state.split_tools();
    modes.distance_mut().new_measurement(&mut ctx);
}
