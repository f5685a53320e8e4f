//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration und die reinen Distanz-/Zeit-Umrechnungen,
//! die von `app` (Werkzeuge) und `ui` gemeinsam genutzt werden.

pub mod options;
/// Distanz- und Reisezeit-Formatierung
pub mod travel;

pub use options::{MapBounds, NavigatorOptions, TravelSpeeds};
pub use options::{HOURS_PER_DAY, KILOMETER_TO_MILES, SCALE_FACTOR};
pub use travel::{
    km_to_miles, to_fixed, to_real_distance, travel_days, travel_days_for, travel_time, Pace,
    PaceEstimate, TravelEstimate,
};
