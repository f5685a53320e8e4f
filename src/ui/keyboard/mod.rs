//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::core::ToolKind;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_1, key_2, key_home, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
            i.key_pressed(egui::Key::Home),
            i.key_pressed(egui::Key::Escape),
        )
    });

    // Werkzeug-Shortcuts nur ohne Modifier
    if !modifiers.any() {
        if key_1 {
            events.push(AppIntent::ToggleToolRequested {
                tool: ToolKind::DistanceTool,
            });
        }
        if key_2 {
            events.push(AppIntent::ToggleToolRequested {
                tool: ToolKind::CoursePlotter,
            });
        }
    }

    if key_home {
        events.push(AppIntent::ResetViewRequested);
    }

    if key_escape {
        events.push(AppIntent::CancelRequested);
    }

    events
}
