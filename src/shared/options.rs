//! Zentrale Konfiguration für den Karten-Navigator.
//!
//! `NavigatorOptions` enthält Maßstab, Umrechnung und Reisegeschwindigkeiten.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Maßstab ─────────────────────────────────────────────────────────

/// Karteneinheiten → Kilometer. Größer = längere Distanzen.
pub const SCALE_FACTOR: f64 = 4.42;
/// 1 km = 0.6213712 Meilen.
pub const KILOMETER_TO_MILES: f64 = 0.6213712;
/// Maximale Reisestunden pro Tag.
pub const HOURS_PER_DAY: f64 = 8.0;

// ── Reisegeschwindigkeiten (Meilen pro Stunde) ─────────────────────

pub const TRAVEL_SPEED_SLOW: f64 = 2.0;
pub const TRAVEL_SPEED_NORMAL: f64 = 3.0;
pub const TRAVEL_SPEED_FAST: f64 = 4.0;

/// Verweis auf die Reiseregeln, wird unter Ergebnissen angezeigt.
pub const TRAVEL_RULES_LINK: &str = "https://2e.aonprd.com/Rules.aspx?ID=2581";

// ── Ansicht ─────────────────────────────────────────────────────────

/// Startmittelpunkt der Karte.
pub const MAP_CENTER: [f64; 2] = [-128.3, 129.0];
/// Startzoom.
pub const INITIAL_ZOOM: f64 = 4.0;
/// Pick-Radius für Marker in Screen-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f64 = 12.0;

/// Reisegeschwindigkeiten in Meilen pro Stunde.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TravelSpeeds {
    pub slow: f64,
    pub normal: f64,
    pub fast: f64,
}

impl Default for TravelSpeeds {
    fn default() -> Self {
        Self {
            slow: TRAVEL_SPEED_SLOW,
            normal: TRAVEL_SPEED_NORMAL,
            fast: TRAVEL_SPEED_FAST,
        }
    }
}

/// Kartengrenzen (Südwest/Nordost als `[lat, lng]`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapBounds {
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            south_west: [-255.0, 0.0],
            north_east: [0.0, 255.0],
        }
    }
}

/// Alle zur Laufzeit änderbaren Navigator-Optionen.
/// Wird als `fantasy_map_navigator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigatorOptions {
    // ── Maßstab ─────────────────────────────────────────────────
    /// Multiplikator Karteneinheit → Kilometer
    pub scale_factor: f64,
    /// Umrechnungsfaktor Kilometer → Meilen
    pub kilometer_to_miles: f64,
    /// Reisegeschwindigkeiten (mph)
    #[serde(default)]
    pub travel_speed: TravelSpeeds,
    /// Reisestunden pro Tag für die Tagesangabe
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
    /// Link auf die Reiseregeln (leer = ausblenden)
    #[serde(default)]
    pub travel_rules_link: Option<String>,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Kartengrenzen, `None` = unbegrenzt
    #[serde(default)]
    pub map_bounds: Option<MapBounds>,
    /// Startmittelpunkt `[lat, lng]`
    pub map_center: [f64; 2],
    /// Startzoom
    pub initial_zoom: f64,
    /// Pick-Radius für Marker in Screen-Pixeln
    #[serde(default = "default_marker_pick_radius_px")]
    pub marker_pick_radius_px: f64,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            scale_factor: SCALE_FACTOR,
            kilometer_to_miles: KILOMETER_TO_MILES,
            travel_speed: TravelSpeeds::default(),
            hours_per_day: HOURS_PER_DAY,
            travel_rules_link: Some(TRAVEL_RULES_LINK.to_string()),

            map_bounds: Some(MapBounds::default()),
            map_center: MAP_CENTER,
            initial_zoom: INITIAL_ZOOM,
            marker_pick_radius_px: MARKER_PICK_RADIUS_PX,
        }
    }
}

/// Serde-Default für `hours_per_day` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_hours_per_day() -> f64 {
    HOURS_PER_DAY
}

/// Serde-Default für `marker_pick_radius_px`.
fn default_marker_pick_radius_px() -> f64 {
    MARKER_PICK_RADIUS_PX
}

impl NavigatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst und validiert Optionen aus einem TOML-String.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fantasy_map_navigator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fantasy_map_navigator.toml")
    }

    /// Prüft, dass alle Divisoren und Faktoren positiv sind.
    pub fn validate(&self) -> anyhow::Result<()> {
        let checks = [
            ("scale_factor", self.scale_factor),
            ("kilometer_to_miles", self.kilometer_to_miles),
            ("travel_speed.slow", self.travel_speed.slow),
            ("travel_speed.normal", self.travel_speed.normal),
            ("travel_speed.fast", self.travel_speed.fast),
            ("hours_per_day", self.hours_per_day),
        ];
        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("{} muss positiv sein (ist {})", name, value);
            }
        }
        Ok(())
    }

    /// Regel-Link, sofern gesetzt und nicht leer.
    pub fn rules_link(&self) -> Option<&str> {
        self.travel_rules_link
            .as_deref()
            .filter(|link| !link.trim().is_empty())
    }
}
