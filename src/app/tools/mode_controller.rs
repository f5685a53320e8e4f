//! Gegenseitiger Ausschluss der beiden Navigations-Werkzeuge.

use super::{CoursePlotterTool, DistanceTool, NavigationTool, ToolAction, ToolContext, ToolError};
use crate::core::{MarkerId, ToolKind, Waypoint};

/// Besitzt beide Werkzeuge und hält höchstens eines aktiv.
///
/// Beim Aktivieren wird das andere Werkzeug zuerst vollständig abgebaut
/// (Overlays entfernt, Klick-Abo beendet), erst danach aktiviert sich das Ziel.
#[derive(Debug, Default)]
pub struct ModeController {
    distance: DistanceTool,
    course: CoursePlotterTool,
    active: Option<ToolKind>,
}

impl ModeController {
    /// Erstellt einen Controller mit zwei inaktiven Werkzeugen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktives Werkzeug (eine abgeschlossene Route zählt als aktiv).
    pub fn active(&self) -> Option<ToolKind> {
        self.active
    }

    /// Ist `kind` das aktive Werkzeug?
    pub fn is_active(&self, kind: ToolKind) -> bool {
        self.active == Some(kind)
    }

    /// Distanz-Werkzeug (lesend).
    pub fn distance(&self) -> &DistanceTool {
        &self.distance
    }

    /// Distanz-Werkzeug (schreibend).
    pub fn distance_mut(&mut self) -> &mut DistanceTool {
        &mut self.distance
    }

    /// Routenplaner (lesend).
    pub fn course(&self) -> &CoursePlotterTool {
        &self.course
    }

    /// Routenplaner (schreibend).
    pub fn course_mut(&mut self) -> &mut CoursePlotterTool {
        &mut self.course
    }

    /// Werkzeug per Art als Trait-Objekt.
    pub fn tool(&self, kind: ToolKind) -> &dyn NavigationTool {
        match kind {
            ToolKind::DistanceTool => &self.distance,
            ToolKind::CoursePlotter => &self.course,
        }
    }

    fn tool_mut(&mut self, kind: ToolKind) -> &mut dyn NavigationTool {
        match kind {
            ToolKind::DistanceTool => &mut self.distance,
            ToolKind::CoursePlotter => &mut self.course,
        }
    }

    /// Schaltet `kind` um: aktiv → aus, sonst exklusiv an.
    pub fn toggle(&mut self, kind: ToolKind, ctx: &mut ToolContext<'_>) {
        if self.is_active(kind) {
            self.deactivate(kind, ctx);
        } else {
            self.activate(kind, ctx);
        }
    }

    /// Aktiviert `kind`; ein anderes aktives Werkzeug wird vorher abgebaut.
    pub fn activate(&mut self, kind: ToolKind, ctx: &mut ToolContext<'_>) {
        if self.is_active(kind) {
            return;
        }
        let other = kind.other();
        self.tool_mut(other).deactivate(ctx);
        // Abo des anderen Werkzeugs sicher entfernen, auch ohne dessen Mitwirkung
        ctx.surface.unsubscribe_click(other);

        self.tool_mut(kind).activate(ctx);
        self.active = Some(kind);
        log::info!("Modus gewechselt: {:?}", kind);
    }

    /// Deaktiviert `kind`, falls aktiv.
    pub fn deactivate(&mut self, kind: ToolKind, ctx: &mut ToolContext<'_>) {
        if !self.is_active(kind) {
            return;
        }
        self.tool_mut(kind).deactivate(ctx);
        self.active = None;
    }

    /// Deaktiviert das aktive Werkzeug (Escape / Toolbar).
    pub fn deactivate_active(&mut self, ctx: &mut ToolContext<'_>) {
        if let Some(kind) = self.active {
            self.deactivate(kind, ctx);
        }
    }

    /// Verwirft die Eingabe des aktiven Werkzeugs, ohne es zu beenden.
    pub fn cancel_active_input(&mut self, ctx: &mut ToolContext<'_>) {
        if let Some(kind) = self.active {
            self.tool_mut(kind).cancel_input(ctx);
        }
    }

    /// Leitet einen Karten-Klick an das abonnierte Werkzeug weiter.
    pub fn dispatch_click(&mut self, pos: Waypoint, ctx: &mut ToolContext<'_>) -> ToolAction {
        let Some(kind) = self.active else {
            return ToolAction::Ignored;
        };
        if !ctx.surface.click_subscribers().contains(&kind) {
            return ToolAction::Ignored;
        }
        self.tool_mut(kind).on_click(pos, ctx)
    }

    /// Host meldet einen Marker-Drag; Bindung bestimmt Werkzeug und Slot.
    ///
    /// Unbekannte Marker sind ein stiller No-op.
    pub fn dispatch_drag(
        &mut self,
        marker: MarkerId,
        pos: Waypoint,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), ToolError> {
        let Some(binding) = ctx.surface.marker_binding(marker) else {
            log::debug!("Drag auf unbekanntem Marker {:?} ignoriert", marker);
            return Ok(());
        };
        // Marker erst verschieben, wenn das Werkzeug den Slot akzeptiert hat
        self.tool_mut(binding.tool)
            .on_marker_drag(binding.slot, pos, ctx)?;
        ctx.surface.set_marker_position(marker, pos);
        Ok(())
    }
}
