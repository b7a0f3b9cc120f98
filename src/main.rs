//! Chem Grid Editor.
//!
//! Raster-Editor: Gitterpunkte per Klick paarweise mit geraden Linien verbinden.
//! Basiert auf egui/eframe, gezeichnet wird direkt mit dem egui-Painter.

use chem_grid_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren (RUST_LOG überschreibt den Standard)
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        log::info!("Chem Grid Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let editor_options = Self::load_options();

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(editor_options.window_size)
                .with_title("Chem Grid Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Chem Grid Editor",
            options,
            Box::new(|_cc| {
                let app = EditorApp::new(editor_options)?;
                Ok(Box::new(app))
            }),
        )
    }

    /// Lädt Optionen aus TOML; legt beim ersten Start eine Datei mit Standardwerten an.
    fn load_options() -> EditorOptions {
        let config_path = EditorOptions::config_path();
        if !config_path.exists() {
            if let Err(e) = EditorOptions::default().save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }
        EditorOptions::load_from_file(&config_path)
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(options: EditorOptions) -> Result<Self, chem_grid_editor::GridLayoutError> {
        let state = AppState::with_options(options)?;
        log::info!(
            "Gitter erzeugt: {} Punkte ({} × {})",
            state.grid.len(),
            state.grid.layout().rows,
            state.grid.layout().columns
        );

        Ok(Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events || self.input.armed().is_some() {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::show_clear_confirmation(
            ctx,
            self.state.ui.show_clear_confirmation,
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    let canvas = self.state.grid.canvas_size();
                    let size = egui::vec2(canvas.x, canvas.y).max(ui.available_size());
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

                    events.extend(self.input.collect_canvas_events(
                        ui,
                        &response,
                        &self.state.grid,
                        self.state.ui.show_clear_confirmation,
                    ));

                    let scene = self
                        .controller
                        .build_render_scene(&self.state, self.input.armed());
                    render::paint_scene(ui.painter(), rect, &scene);
                });
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
}
