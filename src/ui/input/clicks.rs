//! Klick-Events: Marker-Popups und Karten-Klicks für das aktive Werkzeug.

use super::{screen_pos_to_map, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Linksklicks im Viewport.
    ///
    /// Ein Klick auf einen Marker öffnet dessen Popup und erreicht die Karte
    /// nicht; jeder andere Klick geht als `MapClicked` an das Werkzeug.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        if let Some((marker, _)) = ctx.marker_at_screen(pointer_pos) {
            self.marker_popup = if self.marker_popup == Some(marker) {
                None
            } else {
                Some(marker)
            };
        } else {
            self.marker_popup = None;
            let pos = screen_pos_to_map(pointer_pos, ctx.response, ctx.viewport_size, ctx.view);
            events.push(AppIntent::MapClicked { pos });
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
