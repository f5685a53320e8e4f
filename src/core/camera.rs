//! 2D-Kartenansicht für Pan und Zoom.

use super::Waypoint;
use glam::DVec2;

/// Kartenansicht mit Pan und Zoom.
///
/// Zoom-Stufen wie bei gekachelten Karten: eine Karteneinheit entspricht
/// `2^zoom` Bildschirm-Pixeln. Die Breite (`lat`) wächst nach oben,
/// Bildschirm-Y nach unten.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Kartenkoordinate in der Viewport-Mitte
    pub center: Waypoint,
    /// Zoom-Stufe
    pub zoom: f64,
}

impl MapView {
    /// Minimale Zoom-Stufe.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximale Zoom-Stufe.
    pub const ZOOM_MAX: f64 = 5.0;

    /// Erstellt eine Ansicht mit Mittelpunkt und Zoom-Stufe.
    pub fn new(center: Waypoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Zentriert die Ansicht auf einen Punkt
    pub fn look_at(&mut self, target: Waypoint) {
        self.center = target;
    }

    /// Bildschirm-Pixel pro Karteneinheit.
    pub fn pixels_per_unit(&self) -> f64 {
        self.zoom.exp2()
    }

    /// Verschiebt die Ansicht um ein Pixel-Delta (Maus-Drag).
    pub fn pan_pixels(&mut self, delta_px: DVec2) {
        let scale = self.pixels_per_unit();
        self.center = Waypoint::new(
            self.center.lat + delta_px.y / scale,
            self.center.lng - delta_px.x / scale,
        );
    }

    /// Ändert die Zoom-Stufe, ohne den Fokuspunkt auf dem Bildschirm zu verschieben.
    pub fn zoom_towards(&mut self, delta: f64, focus: Waypoint) {
        let old_scale = self.pixels_per_unit();
        self.zoom = (self.zoom + delta).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        let ratio = old_scale / self.pixels_per_unit();
        let center = focus.to_vec2() + (self.center.to_vec2() - focus.to_vec2()) * ratio;
        self.center = Waypoint::from_vec2(center);
    }

    /// Konvertiert eine Kartenkoordinate in Viewport-Pixel (Ursprung oben links).
    pub fn map_to_screen(&self, point: Waypoint, viewport_size: DVec2) -> DVec2 {
        let scale = self.pixels_per_unit();
        let half = viewport_size * 0.5;
        DVec2::new(
            half.x + (point.lng - self.center.lng) * scale,
            half.y - (point.lat - self.center.lat) * scale,
        )
    }

    /// Konvertiert Viewport-Pixel in eine Kartenkoordinate.
    pub fn screen_to_map(&self, screen_pos: DVec2, viewport_size: DVec2) -> Waypoint {
        let scale = self.pixels_per_unit();
        let half = viewport_size * 0.5;
        Waypoint::new(
            self.center.lat - (screen_pos.y - half.y) / scale,
            self.center.lng + (screen_pos.x - half.x) / scale,
        )
    }

    /// Rechnet einen Pixel-Radius in Karteneinheiten um (für Marker-Hit-Tests).
    pub fn pick_radius_map(&self, pick_radius_px: f64) -> f64 {
        pick_radius_px / self.pixels_per_unit()
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(Waypoint::default(), Self::ZOOM_MIN)
    }
}
