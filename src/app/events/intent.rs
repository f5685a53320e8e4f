use crate::core::{MarkerId, PopupAction, ToolKind, Waypoint};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Toolbar-Button eines Werkzeugs geklickt
    ToggleToolRequested { tool: ToolKind },
    /// Escape: laufende Eingabe verwerfen bzw. Werkzeug beenden
    CancelRequested,
    /// Klick auf die Karte (Kartenkoordinate)
    MapClicked { pos: Waypoint },
    /// Marker wurde auf eine neue Position gezogen
    MarkerDragged { marker: MarkerId, pos: Waypoint },
    /// Schaltfläche in Popup oder Panel gedrückt
    PopupActionTriggered { action: PopupAction },
    /// Karte um ein Pixel-Delta verschieben
    CameraPan { delta_px: glam::DVec2 },
    /// Zoom-Stufe ändern (optional um einen Fokuspunkt)
    CameraZoom {
        delta: f64,
        focus: Option<Waypoint>,
    },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ansicht auf Kartenmitte zurücksetzen
    ResetViewRequested,
    /// Anwendung beenden
    ExitRequested,
}
