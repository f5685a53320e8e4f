//! Wegpunkte und planare Distanzen im Bildkoordinatensystem der Karte.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Kartenkoordinate (Breite/Länge im synthetischen Bildraum, ohne Einheit).
///
/// Unveränderlicher Wert: beim Ziehen eines Markers wird der Wegpunkt
/// ersetzt, nicht verändert.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Waypoint {
    /// Vertikale Achse (wächst nach oben)
    pub lat: f64,
    /// Horizontale Achse (wächst nach rechts)
    pub lng: f64,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt aus Breite und Länge.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Wandelt in einen Vektor um (`x = lng`, `y = lat`).
    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Gegenstück zu [`Waypoint::to_vec2`].
    pub fn from_vec2(v: DVec2) -> Self {
        Self::new(v.y, v.x)
    }

    /// Planare Distanz zu einem anderen Wegpunkt.
    pub fn distance_to(self, other: Waypoint) -> f64 {
        map_distance(self, other)
    }

    /// Mittelpunkt der Strecke zwischen zwei Wegpunkten.
    pub fn midpoint(self, other: Waypoint) -> Waypoint {
        Waypoint::new((self.lat + other.lat) / 2.0, (self.lng + other.lng) / 2.0)
    }
}

impl From<[f64; 2]> for Waypoint {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

/// Euklidische Distanz zweier Wegpunkte in Karteneinheiten.
///
/// Kein Großkreis: die Koordinaten sind Bildraum-Einheiten.
pub fn map_distance(a: Waypoint, b: Waypoint) -> f64 {
    a.to_vec2().distance(b.to_vec2())
}

/// Summe aller Segmentlängen einer Route.
pub fn route_length(points: &[Waypoint]) -> f64 {
    points.windows(2).map(|w| map_distance(w[0], w[1])).sum()
}

/// Mittelpunkt der Bounding-Box aller Punkte (`None` bei leerer Liste).
pub fn bounds_center(points: &[Waypoint]) -> Option<Waypoint> {
    let first = points.first()?.to_vec2();
    let (min, max) = points
        .iter()
        .map(|p| p.to_vec2())
        .fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
    Some(Waypoint::from_vec2((min + max) * 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_map_distance_is_planar() {
        let d = map_distance(Waypoint::new(0.0, 0.0), Waypoint::new(3.0, 4.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_route_length_sums_segments() {
        let route = [
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 3.0),
            Waypoint::new(4.0, 3.0),
        ];
        assert_relative_eq!(route_length(&route), 7.0);
        assert_relative_eq!(route_length(&route[..1]), 0.0);
    }

    #[test]
    fn test_midpoint() {
        let mid = Waypoint::new(-10.0, 4.0).midpoint(Waypoint::new(10.0, 8.0));
        assert_relative_eq!(mid.lat, 0.0);
        assert_relative_eq!(mid.lng, 6.0);
    }

    #[test]
    fn test_bounds_center() {
        assert!(bounds_center(&[]).is_none());
        let center = bounds_center(&[
            Waypoint::new(0.0, 0.0),
            Waypoint::new(10.0, 2.0),
            Waypoint::new(4.0, 8.0),
        ])
        .expect("Zentrum erwartet");
        assert_relative_eq!(center.lat, 5.0);
        assert_relative_eq!(center.lng, 4.0);
    }
}
