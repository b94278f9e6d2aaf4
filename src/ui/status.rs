//! Statuszeile am unteren Fensterrand.

use crate::app::AppState;

/// Rendert die Statuszeile (Modell, Zähler, Modus, letzte Meldung).
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(&state.model.name);
            ui.separator();
            ui.label(format!("Hotspots: {}", state.hotspot_count()));
            ui.separator();
            ui.label(format!("Konfigurationen: {}", state.config_count()));
            ui.separator();
            ui.label(format!("Modus: {:?}", state.mode.mode()));

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(message).weak());
            }
        });
    });
}
