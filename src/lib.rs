//! Hotspot-Modell-Viewer.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod persistence;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionMode, ModeState};
pub use core::{
    Axis, Hotspot, HotspotList, ModelConfig, OrbitCamera, Ray, SceneModel, SceneSurface,
};
pub use persistence::{ConfigStore, FileStorage, KeyValueStore, MemoryStorage, SavedConfiguration};
pub use shared::{EditorOptions, HotspotMarker, ViewerScene};
