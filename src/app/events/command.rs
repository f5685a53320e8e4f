use crate::core::{MarkerId, ToolKind, Waypoint};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Werkzeug umschalten (exklusiv)
    ToggleTool { tool: ToolKind },
    /// Aktives Werkzeug beenden
    DeactivateActiveTool,
    /// Laufende Eingabe des aktiven Werkzeugs verwerfen
    CancelToolInput,
    /// Karten-Klick an das aktive Werkzeug
    ToolClick { pos: Waypoint },
    /// Marker-Drag an das besitzende Werkzeug
    DragMarker { marker: MarkerId, pos: Waypoint },
    /// Distanzmessung neu beginnen
    NewMeasurement,
    /// Wegpunkt aus der Route entfernen
    RemoveWaypoint { index: usize },
    /// Route abschließen
    FinishRoute,
    /// Route leeren
    ClearRoute,
    /// Routen-Zusammenfassung öffnen
    ShowRouteSummary,
    /// Karte um Pixel-Delta verschieben
    PanCamera { delta_px: glam::DVec2 },
    /// Zoom-Stufe ändern
    ZoomCamera {
        delta: f64,
        focus: Option<Waypoint>,
    },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Ansicht zurücksetzen
    ResetView,
    /// Anwendung beenden
    RequestExit,
}
