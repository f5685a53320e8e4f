//! Handler für den Routenplaner.

use crate::app::AppState;

/// Entfernt einen Wegpunkt aus der Route.
pub fn remove_waypoint(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let (modes, mut ctx) = state.split_tools();
    modes.course_mut().remove_waypoint(index, &mut ctx)?;
    Ok(())
}

/// Schließt die Route ab.
pub fn finish_route(state: &mut AppState) {
    let (modes, mut ctx) = state.split_tools();
    modes.course_mut().finish_route(&mut ctx);
}

/// Leert die Route.
pub fn clear_route(state: &mut AppState) {
    let (modes, mut ctx) = state.split_tools();
    modes.course_mut().clear(&mut ctx);
}

/// Öffnet die Routen-Zusammenfassung.
pub fn show_summary(state: &mut AppState) -> anyhow::Result<()> {
    let (modes, mut ctx) = state.split_tools();
    modes.course_mut().show_summary(&mut ctx)?;
    Ok(())
}
