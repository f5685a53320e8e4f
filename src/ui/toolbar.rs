//! Toolbar mit den beiden Navigations-Werkzeugen.

use crate::app::{AppIntent, AppState};
use crate::core::ToolKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// Zustand und Tooltip jedes Buttons kommen aus dem Control-Slot, den das
/// Werkzeug selbst pflegt.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Tools:");
            ui.separator();

            for (shortcut, kind) in ToolKind::ALL.into_iter().enumerate() {
                let tool = state.modes.tool(kind);
                let control = state.scene.control(kind);
                let text = format!("{} {} ({})", tool.icon(), tool.name(), shortcut + 1);
                let button = egui::Button::new(text).selected(control.active);
                if ui.add(button).on_hover_text(&control.title).clicked() {
                    events.push(AppIntent::ToggleToolRequested { tool: kind });
                }
            }

            ui.separator();

            if ui
                .button("Reset View")
                .on_hover_text("Center map (Home)")
                .clicked()
            {
                events.push(AppIntent::ResetViewRequested);
            }
        });
    });

    events
}
