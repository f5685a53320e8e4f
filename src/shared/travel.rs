//! Umrechnung von Kartendistanzen in Reisedistanzen und Reisezeiten.
//!
//! Reine Funktionen ohne Zustand. Alle Zahlen werden wie in der Anzeige
//! gerundet: eine Nachkommastelle, exakte Halbwerte werden aufgerundet.

use super::options::{NavigatorOptions, HOURS_PER_DAY};

/// Nachkommastellen der exakten Dezimaldarstellung einer `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formatiert `value` mit `digits` Nachkommastellen.
///
/// Exakte Halbwerte (z.B. `0.25` → `"0.3"`) werden vom Nullpunkt weg gerundet,
/// alle anderen Werte zur nächsten Darstellung. `0.15` liegt binär knapp unter
/// dem Halbwert und ergibt daher `"0.1"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let is_tie = exact
        .split_once('.')
        .and_then(|(_, fraction)| fraction.get(digits..))
        .is_some_and(|tail| {
            tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0')
        });

    if is_tie {
        let factor = 10f64.powi(digits as i32);
        format!("{:.*}", digits, (value * factor).round() / factor)
    } else {
        format!("{:.*}", digits, value)
    }
}

/// Rundet auf `digits` Nachkommastellen (gleiche Regel wie [`to_fixed`]).
pub fn round_to(value: f64, digits: usize) -> f64 {
    to_fixed(value, digits).parse().unwrap_or(value)
}

/// Kartendistanz → Kilometer.
pub fn to_real_distance(map_distance: f64, scale_factor: f64) -> f64 {
    map_distance * scale_factor
}

/// Kilometer → Meilen.
pub fn km_to_miles(km: f64, kilometer_to_miles: f64) -> f64 {
    km * kilometer_to_miles
}

/// Reisezeit als `"<h>h <m> min"`.
///
/// Die Stundenzahl wird vor der Minutenberechnung auf zwei Stellen gerundet,
/// die Stunden selbst werden abgeschnitten. Dadurch kann z.B. `"2h 60 min"`
/// entstehen; das entspricht der gewohnten Anzeige.
pub fn travel_time(miles: f64, speed_mph: f64) -> String {
    let total_hours = miles / speed_mph;
    let hours = total_hours.floor();
    let minutes = (round_to(total_hours, 2) - hours) * 60.0;
    format!("{}h {} min", hours, to_fixed(minutes, 0))
}

/// Reisetage bei 8 Reisestunden pro Tag.
pub fn travel_days(miles: f64, speed_mph: f64) -> String {
    travel_days_for(miles, speed_mph, HOURS_PER_DAY)
}

/// Reisetage mit frei wählbarer Tageslänge.
///
/// Nur exakt `"1.0"` wird zu `"1 day"`, alles andere zu `"<x> days"`.
pub fn travel_days_for(miles: f64, speed_mph: f64, hours_per_day: f64) -> String {
    let days = to_fixed(miles / speed_mph / hours_per_day, 1);
    if days == "1.0" {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Reisetempo, in Anzeige-Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Fast,
    Normal,
    Slow,
}

impl Pace {
    /// Alle Tempi in Anzeige-Reihenfolge.
    pub const ALL: [Pace; 3] = [Pace::Fast, Pace::Normal, Pace::Slow];

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            Pace::Fast => "Fast",
            Pace::Normal => "Normal",
            Pace::Slow => "Slow",
        }
    }

    /// Geschwindigkeit (mph) aus den Optionen.
    pub fn speed(self, options: &NavigatorOptions) -> f64 {
        match self {
            Pace::Fast => options.travel_speed.fast,
            Pace::Normal => options.travel_speed.normal,
            Pace::Slow => options.travel_speed.slow,
        }
    }
}

/// Reisezeit für ein Tempo.
#[derive(Debug, Clone, PartialEq)]
pub struct PaceEstimate {
    pub pace: Pace,
    /// z.B. `"5h 0 min"`
    pub time: String,
    /// z.B. `"0.6 days"`
    pub days: String,
}

/// Aufbereitete Distanz- und Zeitangaben für eine Kartendistanz.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelEstimate {
    /// Kilometer, eine Nachkommastelle
    pub km: String,
    /// Meilen, eine Nachkommastelle
    pub miles: String,
    /// Zeiten in der Reihenfolge Fast, Normal, Slow
    pub paces: Vec<PaceEstimate>,
}

impl TravelEstimate {
    /// Berechnet alle Anzeigewerte für eine Kartendistanz.
    ///
    /// Zeiten und Tage werden aus den bereits gerundeten Meilen berechnet.
    pub fn from_map_distance(map_distance: f64, options: &NavigatorOptions) -> Self {
        let km = to_real_distance(map_distance, options.scale_factor);
        let miles = to_fixed(km_to_miles(km, options.kilometer_to_miles), 1);
        let shown_miles: f64 = miles.parse().unwrap_or(0.0);

        let paces = Pace::ALL
            .iter()
            .map(|&pace| {
                let speed = pace.speed(options);
                PaceEstimate {
                    pace,
                    time: travel_time(shown_miles, speed),
                    days: travel_days_for(shown_miles, speed, options.hours_per_day),
                }
            })
            .collect();

        Self {
            km: to_fixed(km, 1),
            miles,
            paces,
        }
    }

    /// Zeitangabe für ein Tempo.
    pub fn pace(&self, pace: Pace) -> Option<&PaceEstimate> {
        self.paces.iter().find(|p| p.pace == pace)
    }

    /// Zeilen `"Fast: 0h 47 min"` usw.
    pub fn time_lines(&self) -> Vec<String> {
        self.paces
            .iter()
            .map(|p| format!("{}: {}", p.pace.label(), p.time))
            .collect()
    }

    /// Zeilen `"Fast: 0h 47 min (0.1 days)"` usw.
    pub fn time_and_day_lines(&self) -> Vec<String> {
        self.paces
            .iter()
            .map(|p| format!("{}: {} ({})", p.pace.label(), p.time, p.days))
            .collect()
    }
}
