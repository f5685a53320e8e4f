//! UI-Komponenten: Toolbar, Statusleiste, Kartenansicht, Overlays, Input-Handling.

pub mod input;
mod keyboard;
pub mod map_canvas;
/// Werkzeug-Popups und Info-Panel
///
/// Übersetzt Schaltflächen in `AppIntent::PopupActionTriggered`.
pub mod overlays;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use map_canvas::paint_map;
pub use overlays::{show_marker_popup, show_panels, show_popups};
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
