//! Popups und Info-Panel der Werkzeuge als egui-Overlays.

use super::input::{map_to_screen_pos, InputState};
use crate::app::AppIntent;
use crate::core::{InfoContent, MapScene, MapView};

/// Zeichnet den Inhalt eines Popups/Panels; Schaltflächen werden zu Intents.
fn show_info_content(ui: &mut egui::Ui, content: &InfoContent, events: &mut Vec<AppIntent>) {
    ui.label(egui::RichText::new(&content.title).strong());
    for line in &content.lines {
        if line.is_empty() {
            ui.add_space(4.0);
        } else if let Some(link) = line.strip_prefix("Travel rules: ") {
            ui.horizontal(|ui| {
                ui.label("Travel rules:");
                ui.hyperlink(link);
            });
        } else {
            ui.label(line);
        }
    }
    if content.actions.is_empty() {
        return;
    }
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        for &action in &content.actions {
            if ui.button(action.label()).clicked() {
                events.push(AppIntent::PopupActionTriggered { action });
            }
        }
    });
}

/// Zeichnet alle offenen Werkzeug-Popups über ihrer Kartenposition.
pub fn show_popups(
    ctx: &egui::Context,
    rect: egui::Rect,
    view: &MapView,
    scene: &MapScene,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    for (id, popup) in scene.popups() {
        let anchor = map_to_screen_pos(popup.position, rect, view);
        egui::Area::new(egui::Id::new(("tool_popup", id.0)))
            .order(egui::Order::Foreground)
            .fixed_pos(anchor)
            .pivot(egui::Align2::CENTER_BOTTOM)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(260.0);
                    show_info_content(ui, &popup.content, &mut events);
                });
            });
    }
    events
}

/// Zeichnet das Popup des angeklickten Markers.
///
/// Eine Schaltfläche im Popup schließt es nach dem Auslösen.
pub fn show_marker_popup(
    ctx: &egui::Context,
    rect: egui::Rect,
    view: &MapView,
    scene: &MapScene,
    input: &mut InputState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(marker_id) = input.marker_popup() else {
        return events;
    };
    let Some(marker) = scene.marker(marker_id) else {
        input.close_marker_popup();
        return events;
    };

    let anchor = map_to_screen_pos(marker.position, rect, view) - egui::vec2(0.0, 12.0);
    egui::Area::new(egui::Id::new(("marker_popup", marker_id.0)))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                show_info_content(ui, &marker.spec.popup, &mut events);
            });
        });

    if !events.is_empty() {
        input.close_marker_popup();
    }
    events
}

/// Zeichnet Info-Panels oben rechts im Viewport (Rahmenfarbe je Phase).
pub fn show_panels(ctx: &egui::Context, rect: egui::Rect, scene: &MapScene) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mut offset = 10.0;
    for (id, panel) in scene.panels() {
        let [r, g, b] = panel.accent.rgb();
        let response = egui::Area::new(egui::Id::new(("info_panel", id.0)))
            .order(egui::Order::Foreground)
            .fixed_pos(rect.right_top() + egui::vec2(-10.0, offset))
            .pivot(egui::Align2::RIGHT_TOP)
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(r, g, b)))
                    .show(ui, |ui| {
                        ui.set_max_width(280.0);
                        show_info_content(ui, &panel.content, &mut events);
                    });
            })
            .response;
        offset += response.rect.height() + 10.0;
    }
    events
}
