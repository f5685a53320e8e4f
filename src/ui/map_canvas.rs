//! Zeichnet Karte, Raster, Linien und Marker in den Viewport.

use super::input::map_to_screen_pos;
use crate::core::{LineStyle, MapScene, MapView, Waypoint};
use crate::shared::NavigatorOptions;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x2b, 0x2a, 0x26);
const MAP_FILL: egui::Color32 = egui::Color32::from_rgb(0xd8, 0xcc, 0xa8);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(0x60, 0x55, 0x40, 0x50);
const MARKER_RADIUS: f32 = 7.0;

/// Rasterweite in Karteneinheiten (passend zur Zoom-Stufe).
fn grid_spacing(view: &MapView) -> f64 {
    // Ziel: etwa 64 px zwischen zwei Linien
    let raw = 64.0 / view.pixels_per_unit();
    let exponent = raw.log2().ceil();
    exponent.exp2().max(1.0)
}

fn color(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn line_stroke(style: &LineStyle) -> egui::Stroke {
    let base = color(style.color);
    egui::Stroke::new(style.weight, base.gamma_multiply(style.opacity))
}

/// Malt die komplette Kartenszene in `rect`.
pub fn paint_map(
    painter: &egui::Painter,
    rect: egui::Rect,
    view: &MapView,
    scene: &MapScene,
    options: &NavigatorOptions,
) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
    paint_map_area(painter, rect, view, options);

    for (_, polyline) in scene.polylines() {
        let points: Vec<egui::Pos2> = polyline
            .points
            .iter()
            .map(|&p| map_to_screen_pos(p, rect, view))
            .collect();
        let stroke = line_stroke(&polyline.style);
        match polyline.style.dash {
            Some((dash, gap)) => {
                painter.extend(egui::Shape::dashed_line(&points, stroke, dash, gap));
            }
            None => {
                painter.add(egui::Shape::line(points, stroke));
            }
        }
    }

    for (_, marker) in scene.markers() {
        let pos = map_to_screen_pos(marker.position, rect, view);
        if !rect.expand(MARKER_RADIUS).contains(pos) {
            continue;
        }
        painter.circle(
            pos,
            MARKER_RADIUS,
            color(marker.spec.color.rgb()),
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
        painter.text(
            pos + egui::vec2(0.0, -MARKER_RADIUS - 2.0),
            egui::Align2::CENTER_BOTTOM,
            &marker.spec.label,
            egui::FontId::proportional(12.0),
            egui::Color32::BLACK,
        );
    }
}

/// Kartenfläche und Raster innerhalb der konfigurierten Grenzen.
fn paint_map_area(
    painter: &egui::Painter,
    rect: egui::Rect,
    view: &MapView,
    options: &NavigatorOptions,
) {
    let Some(bounds) = &options.map_bounds else {
        return;
    };
    let [south, west] = bounds.south_west;
    let [north, east] = bounds.north_east;

    let top_left = map_to_screen_pos(Waypoint::new(north, west), rect, view);
    let bottom_right = map_to_screen_pos(Waypoint::new(south, east), rect, view);
    let map_rect = egui::Rect::from_two_pos(top_left, bottom_right);
    painter.rect_filled(map_rect, 0.0, MAP_FILL);

    let clip = painter.with_clip_rect(map_rect.intersect(rect));
    let spacing = grid_spacing(view);
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);

    let mut lng = (west / spacing).ceil() * spacing;
    while lng <= east {
        let a = map_to_screen_pos(Waypoint::new(north, lng), rect, view);
        let b = map_to_screen_pos(Waypoint::new(south, lng), rect, view);
        clip.line_segment([a, b], stroke);
        lng += spacing;
    }
    let mut lat = (south / spacing).ceil() * spacing;
    while lat <= north {
        let a = map_to_screen_pos(Waypoint::new(lat, west), rect, view);
        let b = map_to_screen_pos(Waypoint::new(lat, east), rect, view);
        clip.line_segment([a, b], stroke);
        lat += spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spacing_is_power_of_two() {
        let view = MapView::new(Waypoint::default(), 2.0);
        let spacing = grid_spacing(&view);
        assert_eq!(spacing, 16.0);
        assert_eq!(spacing.log2().fract(), 0.0);
    }

    #[test]
    fn test_grid_spacing_shrinks_with_zoom() {
        let near = MapView::new(Waypoint::default(), 5.0);
        let far = MapView::new(Waypoint::default(), 1.0);
        assert!(grid_spacing(&near) < grid_spacing(&far));
    }
}
