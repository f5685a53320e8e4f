//! Drag-Start/-Ende: Marker-Drag oder Kamera-Pan.

use super::{InputState, PrimaryDragMode, ViewportContext};

impl InputState {
    /// Erkennt Drag-Beginn: Marker unter dem Druckpunkt → Marker-Drag, sonst Pan.
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Druckposition vor der Drag-Schwelle
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());
        let hit = press_pos.and_then(|pos| ctx.marker_at_screen(pos));

        self.primary_drag_mode = match hit {
            Some((marker, _)) => {
                log::debug!("Marker-Drag gestartet: {:?}", marker);
                self.marker_popup = None;
                PrimaryDragMode::MarkerDrag(marker)
            }
            None => PrimaryDragMode::CameraPan,
        };
    }

    /// Beendet den laufenden Drag.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext) {
        if ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }
}
