//! Handler für Kartenansicht und Viewport.

use crate::app::AppState;
use crate::core::Waypoint;

/// Setzt die Ansicht auf Kartenmitte und Start-Zoom zurück.
pub fn reset_view(state: &mut AppState) {
    let [lat, lng] = state.options.map_center;
    state.view.view.look_at(Waypoint::new(lat, lng));
    state.view.view.zoom = state
        .options
        .initial_zoom
        .clamp(crate::core::MapView::ZOOM_MIN, crate::core::MapView::ZOOM_MAX);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Ansicht um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: glam::DVec2) {
    state.view.view.pan_pixels(delta_px);
}

/// Ändert die Zoom-Stufe; ohne Fokus wird um die Ansichtsmitte gezoomt.
pub fn zoom_towards(state: &mut AppState, delta: f64, focus: Option<Waypoint>) {
    let focus = focus.unwrap_or(state.view.view.center);
    state.view.view.zoom_towards(delta, focus);
}
