//! Toolbar: Modus-Umschalter, Speichern/Laden, Rotation, Modell-Auswahl.

use crate::app::AppIntent;
use crate::core::model_catalog;
use crate::shared::{options, ViewerScene};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, scene: &ViewerScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ── Bearbeiten-Modus ──
            let edit_label = if scene.edit_mode {
                "✔ Bearbeiten beenden"
            } else {
                "✏ Bearbeiten-Modus"
            };
            if ui
                .add(egui::Button::new(edit_label).selected(scene.edit_mode))
                .clicked()
            {
                events.push(AppIntent::ToggleEditModeRequested);
            }

            if ui.button("💾 Speichern/Laden").clicked() {
                events.push(AppIntent::OpenSaveLoadRequested);
            }

            ui.separator();

            // ── Auto-Rotation ──
            let rotate_label = if scene.auto_rotate {
                "⏸ Rotation anhalten"
            } else {
                "▶ Rotation fortsetzen"
            };
            if ui.button(rotate_label).clicked() {
                events.push(AppIntent::ToggleAutoRotateRequested);
            }

            let mut speed = scene.rotation_speed;
            ui.label("Tempo");
            if ui
                .add(
                    egui::Slider::new(&mut speed, 0.0..=options::ROTATION_SPEED_MAX)
                        .show_value(false),
                )
                .changed()
            {
                events.push(AppIntent::SetRotationSpeedRequested { speed });
            }

            ui.separator();

            if ui.button("Kamera zurücksetzen").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }

            // ── Modell-Auswahl (rechts ausgerichtet) ──
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_salt("model_selector")
                    .selected_text(&scene.model.name)
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for model in model_catalog() {
                            let selected = model.id == scene.model.id;
                            if ui.selectable_label(selected, &model.name).clicked() && !selected {
                                events.push(AppIntent::ModelSelected {
                                    model_id: model.id.clone(),
                                });
                            }
                        }
                    });
                ui.label("Objekt:");
            });
        });
    });

    events
}
