//! Marker, Routenlinie, Info-Panel und Zusammenfassung des Routenplaners.
//!
//! Alle Inhalte werden bei jeder Änderung komplett neu aufgebaut.

use super::super::common::{self, waypoint_color, ROUTE_LINE};
use super::super::ToolContext;
use super::state::{CoursePhase, CoursePlotterTool};
use crate::core::{
    bounds_center, route_length, InfoContent, MapSurface, MarkerBinding, MarkerSlot, MarkerSpec,
    PolylineSpec, PopupAction, ToolKind, Waypoint,
};
use crate::shared::{NavigatorOptions, TravelEstimate};

/// Marker für Wegpunkt `index` (Beschriftung 1-basiert, Farbe zyklisch).
pub(crate) fn waypoint_marker_spec(index: usize, position: Waypoint) -> MarkerSpec {
    let label = format!("Waypoint {}", index + 1);
    MarkerSpec {
        position,
        color: waypoint_color(index),
        popup: InfoContent::titled(label.clone()).action(PopupAction::RemoveWaypoint(index)),
        label,
        binding: MarkerBinding {
            tool: ToolKind::CoursePlotter,
            slot: MarkerSlot::Waypoint(index),
        },
    }
}

/// Inhalt des Info-Panels für den aktuellen Stand.
pub(crate) fn panel_content(
    waypoints: &[Waypoint],
    phase: CoursePhase,
    options: &NavigatorOptions,
) -> InfoContent {
    let finished = phase == CoursePhase::Finished;

    match waypoints.len() {
        0 => InfoContent::titled("Course Plotter Active").line(if finished {
            "Route finished"
        } else {
            "Click on the map to add waypoints"
        }),
        1 => InfoContent::titled("Course Plotter - 1 Waypoint").line(if finished {
            "Route finished"
        } else {
            "Click on the map to add more waypoints"
        }),
        n => {
            let estimate =
                TravelEstimate::from_map_distance(route_length(waypoints), options);
            let mut content = InfoContent::titled(format!("Course Route ({} waypoints)", n))
                .line(format!(
                    "Total Distance: {} km ({} miles)",
                    estimate.km, estimate.miles
                ))
                .line("")
                .line("Travel Times:");
            for line in estimate.time_and_day_lines() {
                content = content.line(line);
            }
            content = content.line("").line(if finished {
                "Route finished"
            } else {
                "Click map to add waypoints"
            });
            if !finished {
                content = content.action(PopupAction::ShowSummary);
            }
            content
        }
    }
}

/// Inhalt des Zusammenfassungs-Popups.
pub(crate) fn summary_content(waypoints: &[Waypoint], options: &NavigatorOptions) -> InfoContent {
    let estimate = TravelEstimate::from_map_distance(route_length(waypoints), options);
    let mut content = InfoContent::titled(format!("Course Route ({} waypoints)", waypoints.len()))
        .line(format!("Total Distance: {} km", estimate.km))
        .line(format!("({} miles)", estimate.miles))
        .line("")
        .line("Total Travel Times:");
    for line in estimate.time_lines() {
        content = content.line(line);
    }
    if let Some(hint) = common::rules_hint(options) {
        content = content.line("").line(hint);
    }
    content
        .action(PopupAction::ClearRoute)
        .action(PopupAction::FinishRoute)
}

impl CoursePlotterTool {
    /// Routenlinie entfernen und ab 2 Wegpunkten neu anlegen.
    pub(crate) fn update_route(&mut self, surface: &mut dyn MapSurface) {
        common::remove_polyline(surface, &mut self.route);
        if self.waypoints.len() >= 2 {
            self.route = Some(surface.add_polyline(PolylineSpec {
                points: self.waypoints.clone(),
                style: ROUTE_LINE,
            }));
        }
    }

    /// Alle Marker entfernen und aus den Wegpunkten neu erzeugen.
    pub(crate) fn recreate_markers(&mut self, surface: &mut dyn MapSurface) {
        for id in self.markers.drain(..) {
            surface.remove_marker(id);
        }
        self.markers = self
            .waypoints
            .iter()
            .enumerate()
            .map(|(index, &pos)| surface.add_marker(waypoint_marker_spec(index, pos)))
            .collect();
    }

    /// Info-Panel-Inhalt ersetzen (falls vorhanden).
    pub(crate) fn refresh_panel(&mut self, ctx: &mut ToolContext<'_>) {
        if let Some(panel) = self.panel {
            let content = panel_content(&self.waypoints, self.phase, ctx.options);
            ctx.surface.update_panel(panel, content);
        }
    }

    /// Offenes Zusammenfassungs-Popup nachführen; ohne Wegpunkte schließen.
    pub(crate) fn refresh_summary(&mut self, ctx: &mut ToolContext<'_>) {
        let Some(popup) = self.popup else {
            return;
        };
        match bounds_center(&self.waypoints) {
            Some(center) => {
                let content = summary_content(&self.waypoints, ctx.options);
                ctx.surface.update_popup(popup, center, content);
            }
            None => common::close_popup(ctx.surface, &mut self.popup),
        }
    }

    /// Linie, Panel und Popup nach einer Wegpunkt-Änderung neu berechnen.
    pub(crate) fn recompute(&mut self, ctx: &mut ToolContext<'_>) {
        self.update_route(ctx.surface);
        self.refresh_panel(ctx);
        self.refresh_summary(ctx);
        log::debug!(
            "Route neu berechnet: {} Wegpunkte, {:.2} Karteneinheiten",
            self.waypoints.len(),
            self.total_map_distance()
        );
    }
}
