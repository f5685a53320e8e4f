//! Routenplaner: beliebig viele Wegpunkte mit Gesamtdistanz und Reisezeiten.
//!
//! **Ablauf:** Aktivieren → Info-Panel erscheint → jeder Klick hängt einen
//! Wegpunkt an → ab 2 Wegpunkten zeigt das Panel Distanz, Zeiten und Tage.
//! "Finish Route" beendet die Klick-Eingabe; Route, Marker und Panel bleiben
//! sichtbar und die Marker ziehbar.
//!
//! Entfernen eines Wegpunkts baut alle Marker neu auf, damit Beschriftung und
//! Drag-Index immer der Position in der Route entsprechen.

mod lifecycle;
mod render;
mod state;

pub use state::{CoursePhase, CoursePlotterTool};
