//! State-Definitionen und Konstruktor für den Routenplaner.

use crate::core::{route_length, MarkerId, PanelId, PolylineId, PopupId, Waypoint};
use crate::shared::{NavigatorOptions, TravelEstimate};

/// Phase des Routenplaners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoursePhase {
    /// Inaktiv, keine Overlays
    Idle,
    /// Klicks fügen Wegpunkte hinzu
    Plotting,
    /// Route abgeschlossen: nur noch Drag, Panel grün
    Finished,
}

/// Routenplaner
#[derive(Debug)]
pub struct CoursePlotterTool {
    pub(crate) phase: CoursePhase,
    /// Wegpunkte in Reise-Reihenfolge
    pub(crate) waypoints: Vec<Waypoint>,
    /// Marker-Handles, `markers[i]` gehört zu `waypoints[i]`
    pub(crate) markers: Vec<MarkerId>,
    /// Routenlinie (ab 2 Wegpunkten)
    pub(crate) route: Option<PolylineId>,
    /// Zusammenfassungs-Popup (nur auf Anforderung)
    pub(crate) popup: Option<PopupId>,
    /// Info-Panel (solange aktiv)
    pub(crate) panel: Option<PanelId>,
}

impl CoursePlotterTool {
    /// Erstellt einen inaktiven Routenplaner.
    pub fn new() -> Self {
        Self {
            phase: CoursePhase::Idle,
            waypoints: Vec::new(),
            markers: Vec::new(),
            route: None,
            popup: None,
            panel: None,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> CoursePhase {
        self.phase
    }

    /// Anzahl der Wegpunkte.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Wegpunkt `index`.
    pub fn waypoint(&self, index: usize) -> Option<Waypoint> {
        self.waypoints.get(index).copied()
    }

    /// Marker-Handles in Wegpunkt-Reihenfolge.
    pub fn markers(&self) -> &[MarkerId] {
        &self.markers
    }

    /// Handle der Routenlinie.
    pub fn route(&self) -> Option<PolylineId> {
        self.route
    }

    /// Handle des Zusammenfassungs-Popups.
    pub fn popup(&self) -> Option<PopupId> {
        self.popup
    }

    /// Handle des Info-Panels.
    pub fn panel(&self) -> Option<PanelId> {
        self.panel
    }

    /// Summe aller Segmentlängen in Karteneinheiten.
    pub fn total_map_distance(&self) -> f64 {
        route_length(&self.waypoints)
    }

    /// Distanz- und Zeitangaben der Route (ab 2 Wegpunkten).
    pub fn estimate(&self, options: &NavigatorOptions) -> Option<TravelEstimate> {
        (self.waypoints.len() >= 2)
            .then(|| TravelEstimate::from_map_distance(self.total_map_distance(), options))
    }
}

impl Default for CoursePlotterTool {
    fn default() -> Self {
        Self::new()
    }
}
