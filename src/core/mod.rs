//! Core-Domänentypen: Hotspots, Kamera, Schnittflächen, Modell-Katalog.

pub mod camera;
pub mod hotspot;
pub mod hotspot_list;
pub mod model;
pub mod scene;

pub use camera::OrbitCamera;
pub use hotspot::{Axis, Hotspot};
pub use hotspot_list::{HotspotList, HOTSPOT_SPAWN_POSITION};
pub use model::{find_model, initial_hotspots, model_catalog, scene_for, ModelConfig,
    DEFAULT_MODEL_ID};
pub use scene::{Ray, SceneModel, SceneSurface, SurfaceHit};
