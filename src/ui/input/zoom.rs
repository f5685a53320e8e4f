//! Scroll-Zoom auf Mausposition.

use super::{screen_pos_to_map, InputState, ViewportContext};
use crate::app::AppIntent;

/// Zoom-Stufen pro Scroll-Raste.
const SCROLL_ZOOM_STEP: f64 = 0.25;

impl InputState {
    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let delta = if scroll > 0.0 {
            SCROLL_ZOOM_STEP
        } else {
            -SCROLL_ZOOM_STEP
        };
        let focus = ctx
            .response
            .hover_pos()
            .map(|pos| screen_pos_to_map(pos, ctx.response, ctx.viewport_size, ctx.view));
        events.push(AppIntent::CameraZoom { delta, focus });
    }
}
