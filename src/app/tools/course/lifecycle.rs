//! Lifecycle-Methoden des CoursePlotterTool (NavigationTool-Implementierung).

use super::super::common;
use super::super::{NavigationTool, ToolAction, ToolContext, ToolError};
use super::render::{panel_content, summary_content, waypoint_marker_spec};
use super::state::{CoursePhase, CoursePlotterTool};
use crate::core::{bounds_center, MapSurface, MarkerSlot, PanelAccent, ToolKind, Waypoint};

impl CoursePlotterTool {
    /// Entfernt Wegpunkt `index` und baut alle Marker neu auf.
    pub fn remove_waypoint(
        &mut self,
        index: usize,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), ToolError> {
        let len = self.waypoints.len();
        if index >= len {
            return Err(ToolError::WaypointIndexOutOfRange { index, len });
        }

        if index < self.markers.len() {
            let id = self.markers.remove(index);
            ctx.surface.remove_marker(id);
        }
        self.waypoints.remove(index);

        self.recreate_markers(ctx.surface);
        self.recompute(ctx);
        self.publish_control(ctx.surface);
        log::debug!("Wegpunkt {} entfernt, {} verbleibend", index + 1, len - 1);
        Ok(())
    }

    /// Beendet die Klick-Eingabe; Route, Marker und Panel bleiben sichtbar.
    pub fn finish_route(&mut self, ctx: &mut ToolContext<'_>) {
        if self.phase != CoursePhase::Plotting {
            log::debug!("Route abschließen ignoriert (Phase {:?})", self.phase);
            return;
        }
        self.phase = CoursePhase::Finished;
        common::release_input(ctx.surface, ToolKind::CoursePlotter);
        if let Some(panel) = self.panel {
            ctx.surface.set_panel_accent(panel, PanelAccent::Finished);
        }
        self.refresh_panel(ctx);
        self.publish_control(ctx.surface);
        log::info!(
            "Route abgeschlossen: {} Wegpunkte, {:.2} Karteneinheiten",
            self.waypoints.len(),
            self.total_map_distance()
        );
    }

    /// Leert die Route. Eine abgeschlossene Route wird wieder zur Eingabe geöffnet.
    pub fn clear(&mut self, ctx: &mut ToolContext<'_>) {
        if self.phase == CoursePhase::Idle {
            log::debug!("Routenplaner inaktiv, nichts zu leeren");
            return;
        }

        self.clear_route(ctx.surface);
        if self.phase == CoursePhase::Finished {
            self.phase = CoursePhase::Plotting;
            common::acquire_input(ctx.surface, ToolKind::CoursePlotter);
            if let Some(panel) = self.panel {
                ctx.surface.set_panel_accent(panel, PanelAccent::Active);
            }
        }
        self.refresh_panel(ctx);
        self.publish_control(ctx.surface);
        log::debug!("Route geleert");
    }

    /// Öffnet (oder aktualisiert) die Zusammenfassung am Zentrum der Route.
    pub fn show_summary(&mut self, ctx: &mut ToolContext<'_>) -> Result<(), ToolError> {
        if self.waypoints.len() < 2 {
            return Err(ToolError::NoActiveRoute);
        }
        let center = bounds_center(&self.waypoints).ok_or(ToolError::NoActiveRoute)?;
        let content = summary_content(&self.waypoints, ctx.options);
        common::upsert_popup(ctx.surface, &mut self.popup, center, content);
        Ok(())
    }

    /// Entfernt Marker, Linie und Popup und leert die Wegpunkte (Phase unverändert).
    pub(crate) fn clear_route(&mut self, surface: &mut dyn MapSurface) {
        for id in self.markers.drain(..) {
            surface.remove_marker(id);
        }
        common::remove_polyline(surface, &mut self.route);
        common::close_popup(surface, &mut self.popup);
        self.waypoints.clear();
    }

    fn publish_control(&self, surface: &mut dyn MapSurface) {
        common::publish_control(
            surface,
            ToolKind::CoursePlotter,
            self.is_active(),
            self.status_text(),
        );
    }
}

impl NavigationTool for CoursePlotterTool {
    fn kind(&self) -> ToolKind {
        ToolKind::CoursePlotter
    }

    fn name(&self) -> &str {
        "Plot Course"
    }

    fn icon(&self) -> &str {
        "🗺"
    }

    fn status_text(&self) -> String {
        match self.phase {
            CoursePhase::Idle => {
                "Click to start plotting a course with multiple waypoints".to_string()
            }
            CoursePhase::Plotting => format!(
                "Click on map to add waypoints ({} added). Click \"Finish Route\" in popup when done.",
                self.waypoints.len()
            ),
            CoursePhase::Finished => format!(
                "Route finished ({} waypoints). Click to close the course plotter.",
                self.waypoints.len()
            ),
        }
    }

    fn is_active(&self) -> bool {
        self.phase != CoursePhase::Idle
    }

    fn activate(&mut self, ctx: &mut ToolContext<'_>) {
        if self.phase != CoursePhase::Idle {
            return;
        }
        self.phase = CoursePhase::Plotting;
        common::acquire_input(ctx.surface, ToolKind::CoursePlotter);
        let content = panel_content(&self.waypoints, self.phase, ctx.options);
        self.panel = Some(ctx.surface.add_panel(content, PanelAccent::Active));
        self.publish_control(ctx.surface);
        log::info!("Routenplaner aktiviert");
    }

    fn deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        if self.phase == CoursePhase::Idle {
            return;
        }
        common::release_input(ctx.surface, ToolKind::CoursePlotter);
        if let Some(panel) = self.panel.take() {
            ctx.surface.remove_panel(panel);
        }
        self.clear_route(ctx.surface);
        self.phase = CoursePhase::Idle;
        self.publish_control(ctx.surface);
        log::info!("Routenplaner beendet");
    }

    fn on_click(&mut self, pos: Waypoint, ctx: &mut ToolContext<'_>) -> ToolAction {
        if self.phase != CoursePhase::Plotting {
            log::warn!("Klick an Routenplaner ignoriert (Phase {:?})", self.phase);
            return ToolAction::Ignored;
        }

        let index = self.waypoints.len();
        self.waypoints.push(pos);
        self.markers
            .push(ctx.surface.add_marker(waypoint_marker_spec(index, pos)));

        self.recompute(ctx);
        self.publish_control(ctx.surface);
        log::debug!(
            "Wegpunkt {} bei ({:.1}, {:.1}) hinzugefügt",
            index + 1,
            pos.lat,
            pos.lng
        );
        ToolAction::Continue
    }

    fn on_marker_drag(
        &mut self,
        slot: MarkerSlot,
        pos: Waypoint,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), ToolError> {
        let MarkerSlot::Waypoint(index) = slot else {
            log::debug!("Drag ohne Wegpunkt-Slot ignoriert: {:?}", slot);
            return Ok(());
        };
        if self.phase == CoursePhase::Idle {
            log::debug!("Drag an inaktiven Routenplaner ignoriert");
            return Ok(());
        }
        let len = self.waypoints.len();
        let Some(waypoint) = self.waypoints.get_mut(index) else {
            return Err(ToolError::WaypointIndexOutOfRange { index, len });
        };
        *waypoint = pos;
        self.recompute(ctx);
        Ok(())
    }

    fn waypoints(&self) -> Vec<Waypoint> {
        self.waypoints.clone()
    }

    fn cancel_input(&mut self, ctx: &mut ToolContext<'_>) {
        self.clear(ctx);
    }
}
