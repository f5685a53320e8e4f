//! State-Definitionen und Konstruktor für das Distanz-Werkzeug.

use crate::core::{MarkerId, PolylineId, PopupId, Waypoint};

/// Phase der Messung, abgeleitet aus den gesetzten Punkten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistancePhase {
    /// Kein Punkt gesetzt
    Idle,
    /// Startpunkt gesetzt, Endpunkt fehlt
    AwaitingEnd,
    /// Beide Punkte gesetzt, Ergebnis sichtbar
    Measured,
}

/// Distanz-Werkzeug
#[derive(Debug, Default)]
pub struct DistanceTool {
    pub(crate) active: bool,
    pub(crate) start: Option<Waypoint>,
    pub(crate) end: Option<Waypoint>,
    pub(crate) start_marker: Option<MarkerId>,
    pub(crate) end_marker: Option<MarkerId>,
    /// Verbindungslinie (nur in `Measured`)
    pub(crate) line: Option<PolylineId>,
    /// Ergebnis-Popup am Mittelpunkt (nur in `Measured`)
    pub(crate) popup: Option<PopupId>,
}

impl DistanceTool {
    /// Erstellt ein inaktives Distanz-Werkzeug.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> DistancePhase {
        match (self.start, self.end) {
            (None, _) => DistancePhase::Idle,
            (Some(_), None) => DistancePhase::AwaitingEnd,
            (Some(_), Some(_)) => DistancePhase::Measured,
        }
    }

    /// Startpunkt, falls gesetzt.
    pub fn start(&self) -> Option<Waypoint> {
        self.start
    }

    /// Endpunkt, falls gesetzt.
    pub fn end(&self) -> Option<Waypoint> {
        self.end
    }

    /// Kartendistanz zwischen Start und Ende.
    pub fn map_distance(&self) -> Option<f64> {
        Some(self.start?.distance_to(self.end?))
    }

    /// Anzahl der eigenen Marker auf der Oberfläche.
    pub fn marker_count(&self) -> usize {
        [self.start_marker, self.end_marker]
            .iter()
            .filter(|m| m.is_some())
            .count()
    }

    /// Handle der Verbindungslinie.
    pub fn line(&self) -> Option<PolylineId> {
        self.line
    }

    /// Handle des Ergebnis-Popups.
    pub fn popup(&self) -> Option<PopupId> {
        self.popup
    }
}
