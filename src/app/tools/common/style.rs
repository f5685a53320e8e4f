//! Farben und Linienstile der Werkzeug-Overlays.

use crate::core::{LineStyle, MarkerColor};

/// Farbzyklus der Routen-Wegpunkte.
pub const MARKER_PALETTE: [MarkerColor; 7] = [
    MarkerColor::Green,
    MarkerColor::Blue,
    MarkerColor::Purple,
    MarkerColor::Red,
    MarkerColor::Orange,
    MarkerColor::DarkBlue,
    MarkerColor::LightBlue,
];

/// Messlinie: gelb, gestrichelt 5/5.
pub const DISTANCE_LINE: LineStyle = LineStyle {
    color: [0xff, 0xff, 0x00],
    weight: 3.0,
    opacity: 0.8,
    dash: Some((5.0, 5.0)),
};

/// Routenlinie: cyan, gestrichelt 10/5.
pub const ROUTE_LINE: LineStyle = LineStyle {
    color: [0x00, 0xff, 0xff],
    weight: 4.0,
    opacity: 0.8,
    dash: Some((10.0, 5.0)),
};

/// Markerfarbe für Wegpunkt `index` (zyklisch).
pub fn waypoint_color(index: usize) -> MarkerColor {
    MARKER_PALETTE[index % MARKER_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_color_cycles() {
        assert_eq!(waypoint_color(0), MarkerColor::Green);
        assert_eq!(waypoint_color(6), MarkerColor::LightBlue);
        assert_eq!(waypoint_color(7), MarkerColor::Green);
        assert_eq!(waypoint_color(10), MarkerColor::Red);
    }
}
