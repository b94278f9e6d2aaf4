//! Info-Popup für den im View-Modus angeklickten Hotspot.

use crate::app::AppIntent;
use crate::shared::ViewerScene;

/// Zeigt das Info-Popup, falls im View-Modus ein Hotspot aktiv ist.
pub fn render_info_panel(ctx: &egui::Context, scene: &ViewerScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(hotspot) = &scene.info_hotspot else {
        return events;
    };

    egui::Window::new("Hotspot")
        .id(egui::Id::new("hotspot_info_popup"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 60.0])
        .show(ctx, |ui| {
            ui.set_min_width(220.0);
            ui.heading(&hotspot.title);
            ui.add_space(4.0);
            ui.label(&hotspot.description);
            ui.add_space(8.0);
            if ui.button("Schließen").clicked() {
                events.push(AppIntent::InfoPopupClosed);
            }
        });

    events
}
