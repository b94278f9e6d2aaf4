//! Orbit-Kamera für die 3D-Ansicht.

use super::scene::Ray;
use glam::{Mat4, Vec2, Vec3};

/// Orbit-Kamera: umkreist einen Zielpunkt auf fester Distanz.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Azimut um die Y-Achse (Radiant)
    pub yaw: f32,
    /// Elevation über der XZ-Ebene (Radiant)
    pub pitch: f32,
    /// Abstand zum Zielpunkt
    pub distance: f32,
    /// Zielpunkt in Welt-Koordinaten
    pub target: Vec3,
}

impl OrbitCamera {
    /// Vertikaler Öffnungswinkel in Grad.
    pub const FOV_Y_DEG: f32 = 50.0;
    /// Near-Plane.
    pub const Z_NEAR: f32 = 0.01;
    /// Far-Plane.
    pub const Z_FAR: f32 = 100.0;
    /// Minimaler Abstand zum Ziel.
    pub const DISTANCE_MIN: f32 = 2.0;
    /// Maximaler Abstand zum Ziel.
    pub const DISTANCE_MAX: f32 = 15.0;
    /// Minimale Elevation (leicht unter die Objektbasis schauen).
    pub const PITCH_MIN: f32 = -0.5;
    /// Maximale Elevation (nicht ganz senkrecht von oben).
    pub const PITCH_MAX: f32 = std::f32::consts::FRAC_PI_2 - 0.1;

    /// Erstellt die Standard-Kamera (entspricht Augpunkt [5, 3, 5]).
    pub fn new() -> Self {
        Self {
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.4,
            distance: 7.68,
            target: Vec3::ZERO,
        }
    }

    /// Augpunkt in Welt-Koordinaten.
    pub fn position(&self) -> Vec3 {
        let dir = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target + dir * self.distance
    }

    /// Dreht die Kamera um den Zielpunkt (Deltas in Radiant).
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(Self::PITCH_MIN, Self::PITCH_MAX);
    }

    /// Ändert den Abstand zum Ziel (Faktor < 1 = heranzoomen).
    pub fn zoom_by(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(Self::DISTANCE_MIN, Self::DISTANCE_MAX);
    }

    /// View-Projektions-Matrix für die gegebene Viewport-Größe in Pixeln.
    pub fn view_proj(&self, viewport_size: Vec2) -> Mat4 {
        let aspect = viewport_size.x.max(1.0) / viewport_size.y.max(1.0);
        let view = Mat4::look_at_rh(self.position(), self.target, Vec3::Y);
        let projection =
            Mat4::perspective_rh(Self::FOV_Y_DEG.to_radians(), aspect, Self::Z_NEAR, Self::Z_FAR);
        projection * view
    }

    /// Konstruiert den Welt-Strahl durch eine Pointer-Position.
    ///
    /// Die Pointer-Koordinaten werden auf [-1, 1] normalisiert, die vertikale
    /// Achse invertiert (Screen-unten vs. Welt-oben), dann werden Near- und
    /// Far-Punkt durch die inverse View-Projektion zurückprojiziert.
    pub fn screen_to_ray(&self, pointer: Vec2, viewport_size: Vec2) -> Ray {
        let ndc_x = (pointer.x / viewport_size.x.max(1.0)) * 2.0 - 1.0;
        let ndc_y = 1.0 - (pointer.y / viewport_size.y.max(1.0)) * 2.0;

        let inv = self.view_proj(viewport_size).inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        Ray::new(near, (far - near).normalize_or_zero())
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
