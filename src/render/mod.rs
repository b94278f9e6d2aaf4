//! Darstellung der Viewer-Szene über den egui-Painter.

pub mod painter;

pub use painter::{draw_scene, marker_screen_positions, project_point, scene_view_proj};
