//! Handle-Verwaltung: jedes Overlay liegt als `Option<Id>` im Werkzeug.
//!
//! Entfernen nimmt das Handle heraus (`take`), damit kein Werkzeug ein
//! bereits entferntes Overlay erneut anfasst.

use crate::core::{
    InfoContent, LineStyle, MapSurface, MarkerId, PolylineId, PolylineSpec, PopupId, Waypoint,
};

/// Entfernt einen Marker, falls vorhanden.
pub(crate) fn remove_marker(surface: &mut dyn MapSurface, slot: &mut Option<MarkerId>) {
    if let Some(id) = slot.take() {
        surface.remove_marker(id);
    }
}

/// Entfernt eine Polyline, falls vorhanden.
pub(crate) fn remove_polyline(surface: &mut dyn MapSurface, slot: &mut Option<PolylineId>) {
    if let Some(id) = slot.take() {
        surface.remove_polyline(id);
    }
}

/// Schließt ein Popup, falls offen.
pub(crate) fn close_popup(surface: &mut dyn MapSurface, slot: &mut Option<PopupId>) {
    if let Some(id) = slot.take() {
        surface.close_popup(id);
    }
}

/// Setzt die Eckpunkte einer bestehenden Linie oder legt sie neu an.
pub(crate) fn upsert_polyline(
    surface: &mut dyn MapSurface,
    slot: &mut Option<PolylineId>,
    points: Vec<Waypoint>,
    style: LineStyle,
) {
    match *slot {
        Some(id) => surface.set_polyline_points(id, points),
        None => *slot = Some(surface.add_polyline(PolylineSpec { points, style })),
    }
}

/// Aktualisiert ein offenes Popup an Ort und Stelle oder öffnet ein neues.
pub(crate) fn upsert_popup(
    surface: &mut dyn MapSurface,
    slot: &mut Option<PopupId>,
    position: Waypoint,
    content: InfoContent,
) {
    match *slot {
        Some(id) => surface.update_popup(id, position, content),
        None => *slot = Some(surface.open_popup(position, content)),
    }
}
