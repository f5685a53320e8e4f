//! Core-Domänentypen: Wegpunkte, Kartenansicht, Oberflächen-Schnittstelle.

pub mod camera;
pub mod scene;
/// Schnittstelle zur Kartenoberfläche
///
/// Definiert den `MapSurface`-Trait und alle Handle-/Spezifikations-Typen,
/// über die Werkzeuge Marker, Linien, Popups und Panels verwalten.
pub mod surface;
pub mod waypoint;

pub use camera::MapView;
pub use scene::{MapScene, SceneMarker, ScenePanel, ScenePopup, SurfaceOp};
pub use surface::{
    ControlState, Cursor, InfoContent, LineStyle, MapSurface, MarkerBinding, MarkerColor,
    MarkerId, MarkerSlot, MarkerSpec, PanelAccent, PanelId, PolylineId, PolylineSpec, PopupAction,
    PopupId, ToolKind,
};
pub use waypoint::{bounds_center, map_distance, route_length, Waypoint};
