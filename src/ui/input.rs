//! Viewport-Input: Marker-Klicks, Flächen-Klicks, Orbit-Drag, Scroll-Zoom.

use crate::app::AppIntent;
use crate::render;
use crate::shared::ViewerScene;
use glam::Vec2;

/// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
///
/// Klick-Priorität: ein Treffer auf einen Marker hat Vorrang vor dem
/// Flächen-Klick — der Marker-Klick transportiert nur die Hotspot-ID,
/// die Bedeutung entscheidet das Intent-Mapping anhand des Modus.
pub fn collect_viewport_events(
    ui: &egui::Ui,
    response: &egui::Response,
    scene: &ViewerScene,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let rect = response.rect;

    events.push(AppIntent::ViewportResized {
        size: [rect.width(), rect.height()],
    });

    // ── Orbit-Drag ──
    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::CameraOrbitRequested {
                delta: Vec2::new(delta.x, delta.y),
            });
        }
    }

    // ── Klicks ──
    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            if let Some(id) = marker_hit(scene, rect, pointer) {
                events.push(AppIntent::HotspotMarkerClicked { id });
            } else {
                let local = pointer - rect.min;
                events.push(AppIntent::SurfaceClicked {
                    pointer: Vec2::new(local.x, local.y),
                });
            }
        }
    }

    // ── Scroll-Zoom ──
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            events.push(AppIntent::CameraZoomRequested {
                scroll_delta: scroll,
            });
        }
    }

    events
}

/// Findet den nächstgelegenen Marker im Klick-Radius, falls vorhanden.
fn marker_hit(scene: &ViewerScene, rect: egui::Rect, pointer: egui::Pos2) -> Option<String> {
    let hit_radius = scene.options.marker_hit_radius_px;
    render::marker_screen_positions(scene, rect)
        .into_iter()
        .filter_map(|(id, pos)| {
            let distance = (pos - pointer).length();
            (distance <= hit_radius).then_some((id, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
