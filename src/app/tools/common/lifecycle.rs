//! Aktivierungs-Bausteine, die beide Werkzeuge identisch teilen.

use crate::core::{ControlState, Cursor, MapSurface, ToolKind};

/// Klicks abonnieren und Fadenkreuz setzen.
pub(crate) fn acquire_input(surface: &mut dyn MapSurface, tool: ToolKind) {
    surface.subscribe_click(tool);
    surface.set_cursor(Cursor::Crosshair);
}

/// Klick-Abo beenden und Cursor zurücksetzen.
pub(crate) fn release_input(surface: &mut dyn MapSurface, tool: ToolKind) {
    surface.unsubscribe_click(tool);
    surface.set_cursor(Cursor::Default);
}

/// Toolbar-Button mit aktuellem Zustand und Anleitung beschreiben.
pub(crate) fn publish_control(
    surface: &mut dyn MapSurface,
    tool: ToolKind,
    active: bool,
    title: String,
) {
    surface.set_control(tool, ControlState { active, title });
}
