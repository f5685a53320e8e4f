//! Pointer-Delta-Verarbeitung: Kamera-Pan und Marker-Drag.

use super::{screen_pos_to_map, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungen während eines Drags.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }
        let delta_px = glam::DVec2::new(f64::from(pointer_delta.x), f64::from(pointer_delta.y));

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::MarkerDrag(marker) => {
                    if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                        let pos = screen_pos_to_map(
                            pointer_pos,
                            ctx.response,
                            ctx.viewport_size,
                            ctx.view,
                        );
                        events.push(AppIntent::MarkerDragged { marker, pos });
                    }
                }
                PrimaryDragMode::CameraPan | PrimaryDragMode::None => {
                    events.push(AppIntent::CameraPan { delta_px });
                }
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan { delta_px });
        }
    }
}
