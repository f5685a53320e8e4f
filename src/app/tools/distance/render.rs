//! Marker-, Linien- und Popup-Inhalte der Distanzmessung.

use super::super::common::{self, DISTANCE_LINE};
use super::super::ToolContext;
use super::state::DistanceTool;
use crate::core::{
    InfoContent, MarkerBinding, MarkerColor, MarkerSlot, MarkerSpec, PopupAction, ToolKind,
    Waypoint,
};
use crate::shared::{NavigatorOptions, TravelEstimate};

/// Marker für den Startpunkt (grün).
pub(crate) fn start_marker_spec(position: Waypoint) -> MarkerSpec {
    endpoint_marker(position, "Start Point", MarkerColor::Green, MarkerSlot::Start)
}

/// Marker für den Endpunkt (rot).
pub(crate) fn end_marker_spec(position: Waypoint) -> MarkerSpec {
    endpoint_marker(position, "End Point", MarkerColor::Red, MarkerSlot::End)
}

fn endpoint_marker(
    position: Waypoint,
    label: &str,
    color: MarkerColor,
    slot: MarkerSlot,
) -> MarkerSpec {
    MarkerSpec {
        position,
        color,
        label: label.to_string(),
        popup: InfoContent::titled(label),
        binding: MarkerBinding {
            tool: ToolKind::DistanceTool,
            slot,
        },
    }
}

/// Ergebnis-Popup: Distanz, Meilen, Reisezeiten und "New Measurement".
pub(crate) fn measurement_content(
    estimate: &TravelEstimate,
    options: &NavigatorOptions,
) -> InfoContent {
    let mut content = InfoContent::titled(format!("Distance: {} km", estimate.km))
        .line(format!("({} miles)", estimate.miles))
        .line("")
        .line("Travel Times:");
    for line in estimate.time_lines() {
        content = content.line(line);
    }
    if let Some(hint) = common::rules_hint(options) {
        content = content.line("").line(hint);
    }
    content.action(PopupAction::NewMeasurement)
}

impl DistanceTool {
    /// Linie und Ergebnis-Popup neu berechnen (nur wenn beide Punkte gesetzt).
    ///
    /// Bestehende Linie und Popup werden wiederverwendet.
    pub(crate) fn refresh_measurement(&mut self, ctx: &mut ToolContext<'_>) {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return;
        };

        common::upsert_polyline(ctx.surface, &mut self.line, vec![start, end], DISTANCE_LINE);

        let estimate = TravelEstimate::from_map_distance(start.distance_to(end), ctx.options);
        let content = measurement_content(&estimate, ctx.options);
        common::upsert_popup(ctx.surface, &mut self.popup, start.midpoint(end), content);

        log::debug!(
            "Distanz aktualisiert: {} km ({} Meilen)",
            estimate.km,
            estimate.miles
        );
    }
}
