//! Fantasy Map Navigator.
//!
//! Distanzmessung und Routenplanung auf einer Fantasy-Weltkarte (egui).

use eframe::egui;
use fantasy_map_navigator::{ui, AppController, AppIntent, AppState, NavigatorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Fantasy Map Navigator v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Fantasy Map Navigator"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Fantasy Map Navigator",
            options,
            Box::new(|_cc| Ok(Box::new(NavigatorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct NavigatorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl NavigatorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = NavigatorOptions::config_path();
        let options = NavigatorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for NavigatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl NavigatorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.view,
                    &self.state.scene,
                    &self.state.options,
                ));

                ui::paint_map(
                    ui.painter(),
                    rect,
                    &self.state.view.view,
                    &self.state.scene,
                    &self.state.options,
                );

                events.extend(ui::show_panels(ctx, rect, &self.state.scene));
                events.extend(ui::show_popups(
                    ctx,
                    rect,
                    &self.state.view.view,
                    &self.state.scene,
                ));
                events.extend(ui::show_marker_popup(
                    ctx,
                    rect,
                    &self.state.view.view,
                    &self.state.scene,
                    &mut self.input,
                ));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
