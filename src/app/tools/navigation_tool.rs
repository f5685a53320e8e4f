//! NavigationTool-Trait: Schnittstelle für beide Navigations-Werkzeuge.

use crate::core::{MarkerSlot, ToolKind, Waypoint};

use super::{ToolAction, ToolContext, ToolError};

/// Schnittstelle für Distanzmessung und Routenplaner.
///
/// Werkzeuge sind zustandsbehaftet (Phasen) und verwalten ihre Overlays
/// selbst über den übergebenen [`ToolContext`]. Alle Übergänge laufen
/// synchron innerhalb eines Events.
pub trait NavigationTool {
    /// Welches Werkzeug
    fn kind(&self) -> ToolKind;

    /// Anzeigename für die Toolbar
    fn name(&self) -> &str;

    /// Icon-Zeichen für den Toolbar-Button
    fn icon(&self) -> &str {
        ""
    }

    /// Anleitung im aktuellen Zustand (Tooltip des Toolbar-Buttons)
    fn status_text(&self) -> String;

    /// Hält das Werkzeug den Modus (inkl. abgeschlossener Route)?
    fn is_active(&self) -> bool;

    /// Klicks abonnieren, Cursor setzen, Panel aufbauen.
    fn activate(&mut self, ctx: &mut ToolContext<'_>);

    /// Klicks abbestellen, Cursor zurücksetzen, alle Overlays entfernen.
    fn deactivate(&mut self, ctx: &mut ToolContext<'_>);

    /// Karten-Klick verarbeiten. Gibt die nächste Aktion zurück.
    fn on_click(&mut self, pos: Waypoint, ctx: &mut ToolContext<'_>) -> ToolAction;

    /// Ein eigener Marker wurde gezogen.
    ///
    /// Fehlende Marker sind ein stiller No-op; ein ungültiger Index ist ein Fehler.
    fn on_marker_drag(
        &mut self,
        slot: MarkerSlot,
        pos: Waypoint,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), ToolError>;

    /// Aktuelle Wegpunkte in Reihenfolge
    fn waypoints(&self) -> Vec<Waypoint>;

    /// Hat das Werkzeug angefangene Eingaben?
    ///
    /// Wird für die stufenweise Escape-Logik benötigt:
    /// Eingaben vorhanden → verwerfen, sonst Werkzeug beenden.
    fn has_pending_input(&self) -> bool {
        !self.waypoints().is_empty()
    }

    /// Verwirft die Eingaben, Werkzeug bleibt aktiv.
    fn cancel_input(&mut self, ctx: &mut ToolContext<'_>);
}
