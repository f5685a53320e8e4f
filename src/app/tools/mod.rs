//! Trait-basiertes Werkzeug-System für Distanzmessung und Routenplanung.
//!
//! Jedes Werkzeug implementiert den `NavigationTool`-Trait und besitzt seine
//! Overlays (Marker, Linien, Popups, Panel) auf der `MapSurface` selbst.
//! Der `ModeController` sorgt dafür, dass höchstens ein Werkzeug aktiv ist.

/// Gemeinsame Hilfsfunktionen (Farben, Linienstile, Overlay-Verwaltung).
pub mod common;
/// Mehrpunkt-Routenplaner mit Info-Panel.
pub mod course;
/// Zwei-Punkt-Distanzmessung.
pub mod distance;
mod mode_controller;
/// NavigationTool-Trait: Schnittstelle für beide Werkzeuge.
mod navigation_tool;

pub use course::{CoursePhase, CoursePlotterTool};
pub use distance::{DistancePhase, DistanceTool};
pub use mode_controller::ModeController;
pub use navigation_tool::NavigationTool;

use crate::core::MapSurface;
use crate::shared::NavigatorOptions;

// ── Typen ────────────────────────────────────────────────────────

/// Rückgabe von `on_click`, steuert den Werkzeug-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Klick nicht angenommen (Werkzeug inaktiv oder abgeschlossen)
    Ignored,
    /// Punkt registriert, weitere Eingabe möglich
    Continue,
    /// Messung vollständig (Linie + Ergebnis sichtbar)
    Completed,
}

/// Vertragsverletzungen bei Werkzeug-Operationen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// Index außerhalb `[0, len)`
    #[error("Wegpunkt-Index {index} außerhalb des gültigen Bereichs (Anzahl: {len})")]
    WaypointIndexOutOfRange { index: usize, len: usize },
    /// Zusammenfassung ohne mindestens zwei Wegpunkte angefordert
    #[error("Keine Route vorhanden (mindestens 2 Wegpunkte nötig)")]
    NoActiveRoute,
}

/// Alles, was ein Werkzeug während eines Events braucht.
///
/// Wird pro Event neu gebaut; Werkzeuge halten keine Referenzen darauf.
pub struct ToolContext<'a> {
    /// Kartenoberfläche für Marker, Linien, Popups und Panels
    pub surface: &'a mut dyn MapSurface,
    /// Maßstab und Reisegeschwindigkeiten
    pub options: &'a NavigatorOptions,
}

impl<'a> ToolContext<'a> {
    /// Erstellt einen Kontext aus Oberfläche und Optionen.
    pub fn new(surface: &'a mut dyn MapSurface, options: &'a NavigatorOptions) -> Self {
        Self { surface, options }
    }
}
