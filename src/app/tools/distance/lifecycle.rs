//! Lifecycle-Methoden des DistanceTool (NavigationTool-Implementierung).

use super::super::common;
use super::super::{NavigationTool, ToolAction, ToolContext, ToolError};
use super::render::{end_marker_spec, start_marker_spec};
use super::state::{DistancePhase, DistanceTool};
use crate::core::{MapSurface, MarkerSlot, ToolKind, Waypoint};

impl DistanceTool {
    /// Verwirft die aktuelle Messung; das Werkzeug bleibt aktiv.
    pub fn new_measurement(&mut self, ctx: &mut ToolContext<'_>) {
        self.clear_measurement(ctx.surface);
        self.publish_control(ctx.surface);
        log::debug!("Neue Distanzmessung");
    }

    /// Entfernt Marker, Linie und Popup und setzt beide Punkte zurück.
    pub(crate) fn clear_measurement(&mut self, surface: &mut dyn MapSurface) {
        common::remove_marker(surface, &mut self.start_marker);
        common::remove_marker(surface, &mut self.end_marker);
        common::remove_polyline(surface, &mut self.line);
        common::close_popup(surface, &mut self.popup);
        self.start = None;
        self.end = None;
    }

    fn place_start(&mut self, pos: Waypoint, surface: &mut dyn MapSurface) {
        self.start = Some(pos);
        self.start_marker = Some(surface.add_marker(start_marker_spec(pos)));
    }

    fn place_end(&mut self, pos: Waypoint, ctx: &mut ToolContext<'_>) {
        self.end = Some(pos);
        self.end_marker = Some(ctx.surface.add_marker(end_marker_spec(pos)));
        self.refresh_measurement(ctx);
    }

    fn publish_control(&self, surface: &mut dyn MapSurface) {
        common::publish_control(
            surface,
            ToolKind::DistanceTool,
            self.active,
            self.status_text(),
        );
    }
}

impl NavigationTool for DistanceTool {
    fn kind(&self) -> ToolKind {
        ToolKind::DistanceTool
    }

    fn name(&self) -> &str {
        "Measure Distance"
    }

    fn icon(&self) -> &str {
        "📏"
    }

    fn status_text(&self) -> String {
        if !self.active {
            return "Click to start measuring distance".to_string();
        }
        let text = match self.phase() {
            DistancePhase::Idle => "Click on map to place start point",
            DistancePhase::AwaitingEnd => "Click on map to place end point",
            DistancePhase::Measured => "Drag markers to adjust, click map for new measurement",
        };
        text.to_string()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, ctx: &mut ToolContext<'_>) {
        if self.active {
            return;
        }
        self.active = true;
        common::acquire_input(ctx.surface, ToolKind::DistanceTool);
        self.publish_control(ctx.surface);
        log::info!("Distanzmessung aktiviert");
    }

    fn deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        if !self.active {
            return;
        }
        common::release_input(ctx.surface, ToolKind::DistanceTool);
        self.clear_measurement(ctx.surface);
        self.active = false;
        self.publish_control(ctx.surface);
        log::info!("Distanzmessung beendet");
    }

    fn on_click(&mut self, pos: Waypoint, ctx: &mut ToolContext<'_>) -> ToolAction {
        if !self.active {
            log::warn!("Klick an inaktive Distanzmessung ignoriert");
            return ToolAction::Ignored;
        }

        let action = match self.phase() {
            DistancePhase::Idle => {
                self.place_start(pos, ctx.surface);
                ToolAction::Continue
            }
            DistancePhase::AwaitingEnd => {
                self.place_end(pos, ctx);
                ToolAction::Completed
            }
            DistancePhase::Measured => {
                // Dritter Klick: alte Messung verwerfen, Klick ist neuer Start
                self.clear_measurement(ctx.surface);
                self.place_start(pos, ctx.surface);
                ToolAction::Continue
            }
        };
        self.publish_control(ctx.surface);
        log::debug!("Distanz-Klick bei ({:.1}, {:.1}) → {:?}", pos.lat, pos.lng, action);
        action
    }

    fn on_marker_drag(
        &mut self,
        slot: MarkerSlot,
        pos: Waypoint,
        ctx: &mut ToolContext<'_>,
    ) -> Result<(), ToolError> {
        match slot {
            MarkerSlot::Start if self.start_marker.is_some() => self.start = Some(pos),
            MarkerSlot::End if self.end_marker.is_some() => self.end = Some(pos),
            _ => {
                log::debug!("Drag ohne passenden Distanz-Marker ignoriert: {:?}", slot);
                return Ok(());
            }
        }
        self.refresh_measurement(ctx);
        Ok(())
    }

    fn waypoints(&self) -> Vec<Waypoint> {
        self.start.into_iter().chain(self.end).collect()
    }

    fn cancel_input(&mut self, ctx: &mut ToolContext<'_>) {
        self.new_measurement(ctx);
    }
}
