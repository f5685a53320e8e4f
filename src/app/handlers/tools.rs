//! Handler für Werkzeugwechsel und Karten-Eingaben.

use crate::app::tools::ToolAction;
use crate::app::AppState;
use crate::core::{MarkerId, ToolKind, Waypoint};

/// Schaltet ein Werkzeug um (das andere wird dabei beendet).
pub fn toggle(state: &mut AppState, tool: ToolKind) {
    let (modes, mut ctx) = state.split_tools();
    modes.toggle(tool, &mut ctx);
}

/// Beendet das aktive Werkzeug.
pub fn deactivate_active(state: &mut AppState) {
    let (modes, mut ctx) = state.split_tools();
    modes.deactivate_active(&mut ctx);
}

/// Verwirft die laufende Eingabe des aktiven Werkzeugs.
pub fn cancel_input(state: &mut AppState) {
    let (modes, mut ctx) = state.split_tools();
    modes.cancel_active_input(&mut ctx);
}

/// Leitet einen Karten-Klick an das aktive Werkzeug weiter.
pub fn click(state: &mut AppState, pos: Waypoint) {
    let (modes, mut ctx) = state.split_tools();
    if modes.dispatch_click(pos, &mut ctx) == ToolAction::Ignored {
        log::debug!("Karten-Klick ohne Abnehmer bei ({:.1}, {:.1})", pos.lat, pos.lng);
    }
}

/// Verschiebt einen Marker und aktualisiert das besitzende Werkzeug.
pub fn drag_marker(state: &mut AppState, marker: MarkerId, pos: Waypoint) -> anyhow::Result<()> {
    let (modes, mut ctx) = state.split_tools();
    modes.dispatch_drag(marker, pos, &mut ctx)?;
    Ok(())
}
