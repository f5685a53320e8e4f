//! Distanz-Werkzeug: misst die Strecke zwischen zwei Punkten.
//!
//! **Ablauf:** Startpunkt klicken → Endpunkt klicken → Linie und Ergebnis-Popup
//! erscheinen. Ein dritter Klick verwirft die Messung und setzt sofort einen
//! neuen Startpunkt. Beide Marker bleiben ziehbar; das Popup wird dabei an Ort
//! und Stelle aktualisiert.

mod lifecycle;
mod render;
mod state;

pub use state::{DistancePhase, DistanceTool};

#[cfg(test)]
mod tests;
