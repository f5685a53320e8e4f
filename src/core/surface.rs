//! Schnittstelle zur Kartenoberfläche (Marker, Linien, Popups, Panels, Cursor).
//!
//! Die Werkzeuge kennen nur diesen Trait. Der Host (egui-Viewport oder Tests)
//! stellt die Implementierung bereit; `MapScene` ist die Standard-Variante.

use super::Waypoint;
use serde::{Deserialize, Serialize};

/// Die beiden Navigations-Werkzeuge (gegenseitig exklusiv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Zwei-Punkt-Distanzmessung
    DistanceTool,
    /// Mehrpunkt-Routenplanung
    CoursePlotter,
}

impl ToolKind {
    /// Alle Werkzeuge in Toolbar-Reihenfolge.
    pub const ALL: [ToolKind; 2] = [ToolKind::DistanceTool, ToolKind::CoursePlotter];

    /// Das jeweils andere Werkzeug.
    pub fn other(self) -> ToolKind {
        match self {
            ToolKind::DistanceTool => ToolKind::CoursePlotter,
            ToolKind::CoursePlotter => ToolKind::DistanceTool,
        }
    }
}

/// Handle eines Markers auf der Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// Handle einer Polyline auf der Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolylineId(pub u64);

/// Handle eines geöffneten Popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PopupId(pub u64);

/// Handle eines Info-Panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

/// Marker-Farben (Icon-Palette der Kartenoberfläche).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Green,
    Blue,
    Purple,
    Red,
    Orange,
    DarkBlue,
    LightBlue,
}

impl MarkerColor {
    /// RGB-Wert für das Rendering.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            MarkerColor::Green => [0x72, 0xaf, 0x26],
            MarkerColor::Blue => [0x38, 0xaa, 0xdd],
            MarkerColor::Purple => [0xd2, 0x52, 0xb9],
            MarkerColor::Red => [0xd6, 0x3e, 0x2a],
            MarkerColor::Orange => [0xf6, 0x97, 0x30],
            MarkerColor::DarkBlue => [0x00, 0x67, 0xa3],
            MarkerColor::LightBlue => [0x8a, 0xda, 0xff],
        }
    }
}

/// Position eines Markers innerhalb des besitzenden Werkzeugs.
///
/// Ersetzt die per Closure gebundenen Drag-Callbacks: der Host meldet den
/// Drag mit der Marker-ID, die Bindung sagt, welcher Wegpunkt gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSlot {
    /// Startpunkt der Distanzmessung
    Start,
    /// Endpunkt der Distanzmessung
    End,
    /// Wegpunkt `i` (0-basiert) der Route
    Waypoint(usize),
}

/// Zuordnung Marker → Werkzeug + Slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerBinding {
    pub tool: ToolKind,
    pub slot: MarkerSlot,
}

/// Schaltflächen in Popups und Panels. Der Host setzt sie in Intents um.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    /// Distanzmessung verwerfen und neu beginnen
    NewMeasurement,
    /// Route leeren
    ClearRoute,
    /// Route abschließen (Klicks deaktivieren, Anzeige behalten)
    FinishRoute,
    /// Wegpunkt mit Index entfernen
    RemoveWaypoint(usize),
    /// Routen-Zusammenfassung als Popup öffnen
    ShowSummary,
}

impl PopupAction {
    /// Beschriftung der Schaltfläche.
    pub fn label(self) -> &'static str {
        match self {
            PopupAction::NewMeasurement => "New Measurement",
            PopupAction::ClearRoute => "Clear Route",
            PopupAction::FinishRoute => "Finish Route",
            PopupAction::RemoveWaypoint(_) => "Remove",
            PopupAction::ShowSummary => "Route Summary",
        }
    }
}

/// Strukturierter Inhalt von Popups, Marker-Popups und Panels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoContent {
    /// Hervorgehobene Überschrift
    pub title: String,
    /// Textzeilen; leere Zeile = Absatz
    pub lines: Vec<String>,
    /// Schaltflächen unter dem Text
    pub actions: Vec<PopupAction>,
}

impl InfoContent {
    /// Erstellt einen Inhalt nur mit Überschrift.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Hängt eine Zeile an (Builder-Stil).
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Hängt eine Schaltfläche an (Builder-Stil).
    pub fn action(mut self, action: PopupAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// Alles, was zum Anlegen eines ziehbaren Markers nötig ist.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: Waypoint,
    pub color: MarkerColor,
    /// Kurzbeschriftung (Tooltip)
    pub label: String,
    /// Popup beim Anklicken des Markers
    pub popup: InfoContent,
    pub binding: MarkerBinding,
}

/// Darstellung einer Polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: [u8; 3],
    /// Linienstärke in Pixeln
    pub weight: f32,
    pub opacity: f32,
    /// Strich/Lücke in Pixeln, `None` = durchgezogen
    pub dash: Option<(f32, f32)>,
}

/// Polyline aus einer geordneten Koordinatenliste.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineSpec {
    pub points: Vec<Waypoint>,
    pub style: LineStyle,
}

/// Cursor-Stil der Kartenoberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Crosshair,
}

/// Rahmenfarbe des Info-Panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelAccent {
    /// Routenplanung läuft
    #[default]
    Active,
    /// Route abgeschlossen
    Finished,
}

impl PanelAccent {
    /// RGB-Wert der Rahmenfarbe.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PanelAccent::Active => [0x17, 0xa2, 0xb8],
            PanelAccent::Finished => [0x28, 0xa7, 0x45],
        }
    }
}

/// Zustand eines Toolbar-Buttons (aktiv + Tooltip/Anleitung).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlState {
    pub active: bool,
    pub title: String,
}

/// Fähigkeiten der Kartenoberfläche, die die Werkzeuge benötigen.
///
/// Alle Entfernen-/Aktualisieren-Operationen auf unbekannten Handles sind
/// No-ops; Werkzeuge dürfen sich darauf verlassen.
pub trait MapSurface {
    /// Klick-Events der Karte für ein Werkzeug abonnieren.
    fn subscribe_click(&mut self, tool: ToolKind);
    /// Klick-Abonnement eines Werkzeugs beenden.
    fn unsubscribe_click(&mut self, tool: ToolKind);
    /// Werkzeuge mit aktivem Klick-Abonnement.
    fn click_subscribers(&self) -> Vec<ToolKind>;

    /// Ziehbaren Marker hinzufügen.
    fn add_marker(&mut self, spec: MarkerSpec) -> MarkerId;
    /// Marker entfernen.
    fn remove_marker(&mut self, id: MarkerId);
    /// Position eines Markers setzen (Host während eines Drags).
    fn set_marker_position(&mut self, id: MarkerId, position: Waypoint);
    /// Bindung eines Markers, `None` wenn er nicht (mehr) existiert.
    fn marker_binding(&self, id: MarkerId) -> Option<MarkerBinding>;

    /// Polyline hinzufügen.
    fn add_polyline(&mut self, spec: PolylineSpec) -> PolylineId;
    /// Eckpunkte einer bestehenden Polyline ersetzen.
    fn set_polyline_points(&mut self, id: PolylineId, points: Vec<Waypoint>);
    /// Polyline entfernen.
    fn remove_polyline(&mut self, id: PolylineId);

    /// Popup an einer Koordinate öffnen.
    fn open_popup(&mut self, position: Waypoint, content: InfoContent) -> PopupId;
    /// Position und Inhalt eines offenen Popups ersetzen.
    fn update_popup(&mut self, id: PopupId, position: Waypoint, content: InfoContent);
    /// Popup schließen.
    fn close_popup(&mut self, id: PopupId);

    /// Persistentes Info-Panel anlegen.
    fn add_panel(&mut self, content: InfoContent, accent: PanelAccent) -> PanelId;
    /// Panel-Inhalt ersetzen.
    fn update_panel(&mut self, id: PanelId, content: InfoContent);
    /// Rahmenfarbe des Panels setzen.
    fn set_panel_accent(&mut self, id: PanelId, accent: PanelAccent);
    /// Panel entfernen.
    fn remove_panel(&mut self, id: PanelId);

    /// Cursor-Stil setzen.
    fn set_cursor(&mut self, cursor: Cursor);
    /// Toolbar-Button eines Werkzeugs aktualisieren.
    fn set_control(&mut self, tool: ToolKind, state: ControlState);
}
