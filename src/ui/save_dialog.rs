//! Speichern/Laden-Overlay für benannte Hotspot-Konfigurationen.

use crate::app::{AppIntent, UiState};
use crate::shared::ViewerScene;
use chrono::{Local, TimeZone};

/// Zeigt das Speichern/Laden-Overlay als modales Fenster.
pub fn show_save_dialog(
    ctx: &egui::Context,
    scene: &ViewerScene,
    ui_state: &mut UiState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !scene.save_overlay_visible {
        return events;
    }

    egui::Window::new("💾 Konfigurationen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);

            // ── Speichern ──
            ui.label("Aktuellen Stand speichern");
            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut ui_state.save_name_input);
                let name_valid = !ui_state.save_name_input.trim().is_empty();
                // Button deaktiviert solange der Name leer ist
                ui.add_enabled_ui(name_valid, |ui| {
                    if ui.button("Speichern").clicked() {
                        events.push(AppIntent::SaveConfigurationRequested {
                            name: ui_state.save_name_input.clone(),
                        });
                    }
                });
            });

            ui.add_space(8.0);
            ui.separator();
            ui.label("Gespeicherte Konfigurationen");

            if scene.configs.is_empty() {
                ui.label("Noch keine Konfigurationen gespeichert.");
            } else {
                egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                    for config in &scene.configs {
                        ui.horizontal(|ui| {
                            ui.label(&config.name);
                            ui.label(
                                egui::RichText::new(format_timestamp(config.timestamp))
                                    .weak()
                                    .small(),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("🗑").clicked() {
                                        events.push(AppIntent::DeleteConfigurationRequested {
                                            config_id: config.id.clone(),
                                        });
                                    }
                                    if ui.small_button("Laden").clicked() {
                                        events.push(AppIntent::LoadConfigurationRequested {
                                            config_id: config.id.clone(),
                                        });
                                    }
                                },
                            );
                        });
                    }
                });
            }

            ui.add_space(10.0);
            if ui.button("Schließen").clicked() {
                events.push(AppIntent::CloseSaveLoadRequested);
            }
        });

    events
}

/// Formatiert Epoch-Millisekunden als lokales Datum.
fn format_timestamp(millis: u64) -> String {
    match Local.timestamp_millis_opt(millis as i64) {
        chrono::LocalResult::Single(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        _ => String::from("—"),
    }
}
