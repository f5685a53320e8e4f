//! Gemeinsame Hilfsfunktionen für die Navigations-Werkzeuge.
//!
//! Aufgeteilt in:
//! - `style`: Marker-Palette und Linienstile
//! - `lifecycle`: Klick-Abo, Cursor und Toolbar-Button
//! - `overlay`: Handle-Verwaltung für Marker, Linien, Popups

mod lifecycle;
mod overlay;
mod style;

pub(crate) use lifecycle::{acquire_input, publish_control, release_input};
pub(crate) use overlay::{close_popup, remove_marker, remove_polyline, upsert_polyline, upsert_popup};
pub use style::{waypoint_color, DISTANCE_LINE, MARKER_PALETTE, ROUTE_LINE};

use crate::shared::NavigatorOptions;

/// Hinweiszeile mit dem Regel-Link (sofern konfiguriert).
pub(crate) fn rules_hint(options: &NavigatorOptions) -> Option<String> {
    options
        .rules_link()
        .map(|link| format!("Travel rules: {}", link))
}

