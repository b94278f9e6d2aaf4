//! Projektion der Viewer-Szene auf den egui-Painter.
//!
//! Bewusst dünn gehalten: Hüllflächen als Drahtgitter, Marker als
//! beschriftete Punkte. Material, Licht und Mesh-Darstellung sind Sache
//! externer Kollaborateure.

use crate::shared::ViewerScene;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};
use glam::{Mat4, Quat, Vec2, Vec3};

/// Hintergrundfarbe des Viewports.
const BACKGROUND_COLOR: Color32 = Color32::from_rgb(10, 10, 15);
/// Stützstellen für die Scheiben-Umrisse.
const DISC_SEGMENTS: usize = 48;

/// Projiziert einen Weltpunkt in Bildschirm-Koordinaten des Viewport-Rects.
/// `None` für Punkte hinter der Kamera oder außerhalb des Tiefenbereichs.
pub fn project_point(view_proj: Mat4, rect: Rect, world: Vec3) -> Option<Pos2> {
    let clip = view_proj * world.extend(1.0);
    if clip.w <= 1.0e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !ndc.x.is_finite() || !ndc.y.is_finite() || !ndc.z.is_finite() {
        return None;
    }
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    let x = rect.min.x + (ndc.x * 0.5 + 0.5) * rect.width();
    let y = rect.min.y + (0.5 - ndc.y * 0.5) * rect.height();
    Some(Pos2::new(x, y))
}

/// View-Projektions-Matrix der Szene für das gegebene Rect.
pub fn scene_view_proj(scene: &ViewerScene, rect: Rect) -> Mat4 {
    scene
        .camera
        .view_proj(Vec2::new(rect.width().max(1.0), rect.height().max(1.0)))
}

/// Bildschirm-Positionen aller Marker (für Zeichnen und Klick-Treffer).
///
/// Die Hotspot-Positionen sind Modell-lokal und drehen mit der
/// Auto-Rotation mit.
pub fn marker_screen_positions(scene: &ViewerScene, rect: Rect) -> Vec<(String, Pos2)> {
    let view_proj = scene_view_proj(scene, rect);
    let rotation = Quat::from_rotation_y(scene.spin_angle);
    scene
        .markers
        .iter()
        .filter_map(|marker| {
            let world = rotation * marker.hotspot.position;
            project_point(view_proj, rect, world)
                .map(|pos| (marker.hotspot.id.clone(), pos))
        })
        .collect()
}

/// Zeichnet die komplette Szene: Hintergrund, Hüllflächen, Marker.
pub fn draw_scene(painter: &egui::Painter, scene: &ViewerScene, rect: Rect) {
    painter.rect_filled(rect, egui::CornerRadius::ZERO, BACKGROUND_COLOR);

    let view_proj = scene_view_proj(scene, rect);
    let rotation = Quat::from_rotation_y(scene.spin_angle);

    draw_surfaces(painter, scene, rect, view_proj, rotation);
    draw_markers(painter, scene, rect, view_proj, rotation);
}

fn draw_surfaces(
    painter: &egui::Painter,
    scene: &ViewerScene,
    rect: Rect,
    view_proj: Mat4,
    rotation: Quat,
) {
    let surface_stroke = Stroke::new(1.0, color32(scene.options.surface_color));
    let ground_stroke = Stroke::new(1.0, color32(scene.options.ground_color));

    for surface in scene.surfaces.surfaces() {
        match *surface {
            crate::core::SceneSurface::Sphere { center, radius } => {
                draw_sphere(painter, rect, view_proj, rotation, center, radius, surface_stroke);
            }
            crate::core::SceneSurface::Cuboid {
                center,
                half_extents,
            } => {
                draw_cuboid(
                    painter,
                    rect,
                    view_proj,
                    rotation,
                    center,
                    half_extents,
                    surface_stroke,
                );
            }
            crate::core::SceneSurface::Disc {
                center,
                normal,
                radius,
            } => {
                draw_disc(
                    painter,
                    rect,
                    view_proj,
                    rotation,
                    center,
                    normal,
                    radius,
                    ground_stroke,
                );
            }
        }
    }
}

fn draw_sphere(
    painter: &egui::Painter,
    rect: Rect,
    view_proj: Mat4,
    rotation: Quat,
    center: Vec3,
    radius: f32,
    stroke: Stroke,
) {
    let world_center = rotation * center;
    let Some(screen_center) = project_point(view_proj, rect, world_center) else {
        return;
    };
    // Bildschirm-Radius über einen vertikal versetzten Referenzpunkt
    let Some(screen_top) = project_point(view_proj, rect, world_center + Vec3::Y * radius) else {
        return;
    };
    let screen_radius = (screen_top - screen_center).length();
    painter.circle_stroke(screen_center, screen_radius, stroke);
}

fn draw_cuboid(
    painter: &egui::Painter,
    rect: Rect,
    view_proj: Mat4,
    rotation: Quat,
    center: Vec3,
    half_extents: Vec3,
    stroke: Stroke,
) {
    // Ecken-Index als Bitmaske: Bit 0 = X, Bit 1 = Y, Bit 2 = Z
    let corner = |i: usize| {
        let sign = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
        let local = center
            + Vec3::new(
                sign(0) * half_extents.x,
                sign(1) * half_extents.y,
                sign(2) * half_extents.z,
            );
        project_point(view_proj, rect, rotation * local)
    };

    let corners: Vec<Option<Pos2>> = (0..8).map(corner).collect();
    for i in 0..8 {
        for j in (i + 1)..8 {
            // Kanten verbinden Ecken, die sich in genau einem Bit unterscheiden
            if ((i ^ j) as u32).count_ones() != 1 {
                continue;
            }
            if let (Some(a), Some(b)) = (corners[i], corners[j]) {
                painter.line_segment([a, b], stroke);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_disc(
    painter: &egui::Painter,
    rect: Rect,
    view_proj: Mat4,
    rotation: Quat,
    center: Vec3,
    normal: Vec3,
    radius: f32,
    stroke: Stroke,
) {
    // Orthonormalbasis in der Scheiben-Ebene
    let normal = normal.normalize_or_zero();
    let seed = if normal.x.abs() < 0.9 { Vec3::X } else { Vec3::Z };
    let u = normal.cross(seed).normalize_or_zero();
    let v = normal.cross(u);

    let points: Vec<Pos2> = (0..DISC_SEGMENTS)
        .filter_map(|i| {
            let angle = (i as f32 / DISC_SEGMENTS as f32) * std::f32::consts::TAU;
            let local = center + (u * angle.cos() + v * angle.sin()) * radius;
            project_point(view_proj, rect, rotation * local)
        })
        .collect();

    if points.len() == DISC_SEGMENTS {
        painter.add(egui::Shape::closed_line(points, stroke));
    }
}

fn draw_markers(
    painter: &egui::Painter,
    scene: &ViewerScene,
    rect: Rect,
    view_proj: Mat4,
    rotation: Quat,
) {
    for marker in &scene.markers {
        let world = rotation * marker.hotspot.position;
        let Some(pos) = project_point(view_proj, rect, world) else {
            continue;
        };

        let (color, radius) = if marker.is_editing {
            (
                color32(scene.options.marker_color_editing),
                scene.options.marker_radius_px * 1.2,
            )
        } else if marker.is_active {
            (
                color32(scene.options.marker_color_active),
                scene.options.marker_radius_px * 1.2,
            )
        } else {
            (
                color32(scene.options.marker_color),
                scene.options.marker_radius_px,
            )
        };

        painter.circle_filled(pos, radius, color);
        painter.circle_stroke(pos, radius, Stroke::new(1.5, Color32::WHITE));
        painter.text(
            pos + egui::vec2(radius + 4.0, 0.0),
            Align2::LEFT_CENTER,
            &marker.hotspot.title,
            FontId::proportional(13.0),
            Color32::WHITE,
        );
    }
}

/// Konvertiert eine RGBA-Float-Farbe in `Color32`.
fn color32(rgba: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
