//! Hotspot-Modell-Viewer.
//!
//! Interaktiver 3D-Viewer mit editierbaren, persistierbaren
//! Hotspot-Annotationen auf Basis von egui/eframe.

use eframe::egui;
use hotspot_model_viewer::{
    render, ui, AppController, AppIntent, AppState, ConfigStore, EditorOptions, FileStorage,
};

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
            "Hotspot-Modell-Viewer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Hotspot-Modell-Viewer"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Hotspot-Modell-Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur.
struct ViewerApp {
    state: AppState,
    controller: AppController,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        // Konfigurations-Sammlung aus dem durablen Speicher lesen.
        // Fehlerhafte Daten werden hier an der Kompositionswurzel behandelt:
        // loggen und mit leerer Sammlung starten.
        let storage = FileStorage::next_to_executable();
        let configs = match ConfigStore::load(Box::new(storage)) {
            Ok(configs) => configs,
            Err(e) => {
                log::error!("Konfigurations-Speicher unlesbar: {e:#}");
                ConfigStore::in_memory()
            }
        };

        let mut state = AppState::with_config_store(configs);
        state.view.rotation_speed = editor_options.rotation_speed_default;
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let scene = self.controller.build_render_scene(&self.state);
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &scene));
        events.extend(ui::render_edit_panel(ctx, &scene));
        events.extend(ui::render_info_panel(ctx, &scene));
        events.extend(ui::show_save_dialog(ctx, &scene, &mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                // Szene mit der tatsächlichen Viewport-Größe neu ableiten
                let mut frame_scene = scene.clone();
                frame_scene.viewport_size = [rect.width(), rect.height()];

                events.extend(ui::collect_viewport_events(ui, &response, &frame_scene));
                render::draw_scene(ui.painter(), &frame_scene, rect);

                if frame_scene.edit_mode && !frame_scene.has_editing_target() {
                    ui.painter().text(
                        rect.center_bottom() - egui::vec2(0.0, 24.0),
                        egui::Align2::CENTER_CENTER,
                        "Hotspot in der Liste wählen, dann aufs Modell klicken",
                        egui::FontId::proportional(14.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.view.auto_rotate
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.state.tick_rotation();

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}
