//! Application State: zentrale Datenhaltung.

use super::tools::{ModeController, ToolContext};
use super::CommandLog;
use crate::core::{ControlState, MapScene, MapSurface, MapView, ToolKind, Waypoint};
use crate::shared::NavigatorOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Kartenansicht (Mittelpunkt + Zoom)
    pub view: MapView,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt die Startansicht aus den Optionen.
    pub fn from_options(options: &NavigatorOptions) -> Self {
        let [lat, lng] = options.map_center;
        Self {
            view: MapView::new(Waypoint::new(lat, lng), options.initial_zoom),
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&NavigatorOptions::default())
    }
}

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Kartenoberfläche mit allen Werkzeug-Overlays
    pub scene: MapScene,
    /// Beide Werkzeuge + gegenseitiger Ausschluss
    pub modes: ModeController,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen (Umrechnung, Reisegeschwindigkeiten, Karte)
    pub options: NavigatorOptions,
    /// Command-Log
    pub command_log: CommandLog,
    /// Signalisiert, dass die Anwendung beendet werden soll
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(NavigatorOptions::default())
    }

    /// Erstellt den App-State mit geladenen Optionen.
    ///
    /// Beide Toolbar-Buttons werden sofort mit ihrer Grundanleitung belegt.
    pub fn with_options(options: NavigatorOptions) -> Self {
        let mut scene = MapScene::new();
        let modes = ModeController::new();
        for kind in ToolKind::ALL {
            scene.set_control(
                kind,
                ControlState {
                    active: false,
                    title: modes.tool(kind).status_text(),
                },
            );
        }

        Self {
            scene,
            modes,
            view: ViewState::from_options(&options),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Teilt den State in Werkzeug-Controller und Werkzeug-Kontext auf.
    pub fn split_tools(&mut self) -> (&mut ModeController, ToolContext<'_>) {
        (
            &mut self.modes,
            ToolContext::new(&mut self.scene, &self.options),
        )
    }

    /// Aktives Werkzeug (für Statusleiste und Toolbar).
    pub fn active_tool(&self) -> Option<ToolKind> {
        self.modes.active()
    }

    /// Anleitungstext des aktiven Werkzeugs.
    pub fn status_text(&self) -> Option<String> {
        self.modes
            .active()
            .map(|kind| self.modes.tool(kind).status_text())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
