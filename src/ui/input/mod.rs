//! Viewport-Input-Handling: Maus-Events, Marker-Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks`: Karten- und Marker-Klicks
//! - `drag_primary`: Drag-Start/-Ende (Marker-Drag oder Kamera-Pan)
//! - `pointer_delta`: Pan-/Drag-Updates während aktiver Drags
//! - `zoom`: Scroll-Zoom auf Mausposition

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::{MapScene, MapView, MarkerId, Waypoint};
use crate::shared::NavigatorOptions;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    CameraPan,
    /// Ein Werkzeug-Marker wird gezogen
    MarkerDrag(MarkerId),
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub view: &'a MapView,
    pub scene: &'a MapScene,
    pub options: &'a NavigatorOptions,
}

impl ViewportContext<'_> {
    /// Marker unter einer Bildschirmposition (Pick-Radius aus den Optionen).
    fn marker_at_screen(&self, pointer_pos: egui::Pos2) -> Option<(MarkerId, Waypoint)> {
        let pos = screen_pos_to_map(pointer_pos, self.response, self.viewport_size, self.view);
        let radius = self.view.pick_radius_map(self.options.marker_pick_radius_px);
        self.scene.marker_at(pos, radius).map(|id| (id, pos))
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Marker-Popup)
#[derive(Debug, Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
    /// Marker, dessen Popup gerade offen ist
    pub(crate) marker_popup: Option<MarkerId>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker mit offenem Popup.
    pub fn marker_popup(&self) -> Option<MarkerId> {
        self.marker_popup
    }

    /// Schließt das Marker-Popup.
    pub fn close_marker_popup(&mut self) {
        self.marker_popup = None;
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll- und Drag-Interaktionen.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        view: &MapView,
        scene: &MapScene,
        options: &NavigatorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            view,
            scene,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        // Popup eines inzwischen entfernten Markers schließen
        if self
            .marker_popup
            .is_some_and(|id| scene.marker(id).is_none())
        {
            self.marker_popup = None;
        }

        self.handle_drag_start(&ctx);
        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_drag_end(&ctx);
        self.handle_scroll_zoom(&ctx, &mut events);
        self.update_cursor(&ctx);

        events
    }

    fn update_cursor(&self, ctx: &ViewportContext) {
        let Some(hover) = ctx.response.hover_pos() else {
            return;
        };
        let icon = match self.primary_drag_mode {
            PrimaryDragMode::MarkerDrag(_) => egui::CursorIcon::Grabbing,
            PrimaryDragMode::CameraPan => egui::CursorIcon::Move,
            PrimaryDragMode::None if ctx.marker_at_screen(hover).is_some() => {
                egui::CursorIcon::Grab
            }
            PrimaryDragMode::None => match ctx.scene.cursor() {
                crate::core::Cursor::Crosshair => egui::CursorIcon::Crosshair,
                crate::core::Cursor::Default => egui::CursorIcon::Default,
            },
        };
        ctx.ui.ctx().set_cursor_icon(icon);
    }
}

/// Rechnet eine Bildschirmposition in Kartenkoordinaten um.
pub(crate) fn screen_pos_to_map(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    view: &MapView,
) -> Waypoint {
    let local = pointer_pos - response.rect.min;
    view.screen_to_map(
        glam::DVec2::new(f64::from(local.x), f64::from(local.y)),
        glam::DVec2::new(f64::from(viewport_size[0]), f64::from(viewport_size[1])),
    )
}

/// Rechnet eine Kartenkoordinate in eine absolute Bildschirmposition um.
pub(crate) fn map_to_screen_pos(
    point: Waypoint,
    rect: egui::Rect,
    view: &MapView,
) -> egui::Pos2 {
    let local = view.map_to_screen(
        point,
        glam::DVec2::new(f64::from(rect.width()), f64::from(rect.height())),
    );
    rect.min + egui::vec2(local.x as f32, local.y as f32)
}
