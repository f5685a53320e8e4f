//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.status_text() {
                Some(text) => ui.label(text),
                None => ui.label("No tool active"),
            };

            ui.separator();

            let view = &state.view.view;
            ui.label(format!(
                "Zoom: {:.2} | Center: ({:.1}, {:.1})",
                view.zoom, view.center.lat, view.center.lng
            ));

            ui.separator();

            ui.label(format!(
                "Markers: {} | Lines: {}",
                state.scene.marker_count(),
                state.scene.polyline_count()
            ));
        });
    });
}
