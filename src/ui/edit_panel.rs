//! Seiten-Panel des Bearbeiten-Modus: Hotspot-Liste und Feld-Editor.

use crate::app::AppIntent;
use crate::core::Axis;
use crate::shared::ViewerScene;

/// Rendert das Bearbeiten-Panel (nur im Edit-Modus sichtbar)
/// und gibt erzeugte Events zurück.
pub fn render_edit_panel(ctx: &egui::Context, scene: &ViewerScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !scene.edit_mode {
        return events;
    }

    egui::SidePanel::right("edit_panel")
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("🎯 Hotspot-Editor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("➕ Hinzufügen").clicked() {
                        events.push(AppIntent::AddHotspotRequested);
                    }
                });
            });
            ui.separator();

            render_hotspot_list(ui, scene, &mut events);

            if let Some(hotspot) = &scene.editing_hotspot {
                ui.separator();
                render_field_editor(ui, scene, hotspot, &mut events);
            }
        });

    events
}

/// Liste aller Hotspots mit Auswahl- und Lösch-Interaktion.
fn render_hotspot_list(ui: &mut egui::Ui, scene: &ViewerScene, events: &mut Vec<AppIntent>) {
    if scene.markers.is_empty() {
        ui.label("Noch keine Hotspots. Mit „Hinzufügen“ den ersten anlegen.");
        return;
    }

    for marker in &scene.markers {
        ui.horizontal(|ui| {
            let selected = marker.is_editing;
            if ui
                .selectable_label(selected, &marker.hotspot.title)
                .clicked()
            {
                events.push(AppIntent::HotspotSelectedForEdit {
                    id: marker.hotspot.id.clone(),
                });
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("🗑").clicked() {
                    events.push(AppIntent::DeleteHotspotRequested {
                        id: marker.hotspot.id.clone(),
                    });
                }
            });
        });
    }
}

/// Feld-Editor für das aktuelle Bearbeitungsziel.
fn render_field_editor(
    ui: &mut egui::Ui,
    scene: &ViewerScene,
    hotspot: &crate::core::Hotspot,
    events: &mut Vec<AppIntent>,
) {
    ui.label(format!("Bearbeiten: {}", hotspot.title));
    ui.add_space(4.0);

    ui.label("Titel");
    let mut title = hotspot.title.clone();
    if ui.text_edit_singleline(&mut title).changed() {
        events.push(AppIntent::UpdateHotspotTitle {
            id: hotspot.id.clone(),
            title,
        });
    }

    ui.add_space(4.0);
    ui.label("Beschreibung");
    let mut description = hotspot.description.clone();
    if ui
        .add(egui::TextEdit::multiline(&mut description).desired_rows(3))
        .changed()
    {
        events.push(AppIntent::UpdateHotspotDescription {
            id: hotspot.id.clone(),
            description,
        });
    }

    ui.add_space(6.0);
    ui.label("Position (Klick aufs Modell platziert)");
    let range = scene.options.axis_range;
    for axis in Axis::ALL {
        let mut value = hotspot.position[axis.index()];
        ui.horizontal(|ui| {
            ui.label(axis.label());
            if ui
                .add(egui::Slider::new(&mut value, -range..=range).step_by(0.01))
                .changed()
            {
                events.push(AppIntent::UpdateHotspotPosition {
                    id: hotspot.id.clone(),
                    axis,
                    value,
                });
            }
        });
    }
}
