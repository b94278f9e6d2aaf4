//! Gemeinsame Typen zwischen App, UI und Darstellung.

pub mod options;
pub mod viewer_scene;

pub use options::EditorOptions;
pub use viewer_scene::{HotspotMarker, ViewerScene};
