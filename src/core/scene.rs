//! Schnittflächen-Modell für die Ray-Cast-Platzierung.
//!
//! Die Szene eines Modells besteht aus wenigen analytischen Flächen
//! (Kugeln, Quader, Scheiben), gegen die der Pointer-Strahl geschnitten
//! wird. Mesh-genaues Picking ist Sache externer Kollaborateure.

use glam::{Quat, Vec3};

/// Minimaler Ray-Parameter, um Treffer am Augpunkt selbst auszuschließen.
const T_EPSILON: f32 = 1e-4;

/// Strahl mit Ursprung und normalisierter Richtung.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ursprung in Welt- bzw. Modell-Koordinaten
    pub origin: Vec3,
    /// Normalisierte Richtung
    pub dir: Vec3,
}

impl Ray {
    /// Erstellt einen neuen Strahl.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Punkt auf dem Strahl beim Parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Strahl um die Y-Achse gedreht (für Modell-lokales Ray-Casting
    /// bei akkumulierter Auto-Rotation).
    pub fn rotated_y(&self, angle: f32) -> Ray {
        let rotation = Quat::from_rotation_y(angle);
        Ray::new(rotation * self.origin, rotation * self.dir)
    }
}

/// Eine analytische Schnittfläche der Modell-Szene.
#[derive(Debug, Clone, Copy)]
pub enum SceneSurface {
    /// Kugel um `center` mit Radius `radius`
    Sphere { center: Vec3, radius: f32 },
    /// Achsenparalleler Quader um `center` mit Halbausdehnung `half_extents`
    Cuboid { center: Vec3, half_extents: Vec3 },
    /// Kreisscheibe um `center` mit Normale `normal` und Radius `radius`
    Disc {
        center: Vec3,
        normal: Vec3,
        radius: f32,
    },
}

impl SceneSurface {
    /// Berechnet den kleinsten positiven Ray-Parameter eines Treffers.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            SceneSurface::Sphere { center, radius } => intersect_sphere(ray, center, radius),
            SceneSurface::Cuboid {
                center,
                half_extents,
            } => intersect_cuboid(ray, center, half_extents),
            SceneSurface::Disc {
                center,
                normal,
                radius,
            } => intersect_disc(ray, center, normal, radius),
        }
    }
}

/// Kugel-Schnitt über die quadratische Gleichung (Richtung normalisiert).
fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t_near = -b - sqrt_d;
    if t_near > T_EPSILON {
        return Some(t_near);
    }
    let t_far = -b + sqrt_d;
    (t_far > T_EPSILON).then_some(t_far)
}

/// Quader-Schnitt per Slab-Methode.
fn intersect_cuboid(ray: &Ray, center: Vec3, half_extents: Vec3) -> Option<f32> {
    let min = center - half_extents;
    let max = center + half_extents;

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.dir[axis];
        if dir.abs() < 1e-8 {
            // Strahl parallel zum Slab: außerhalb → kein Treffer
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir;
        let mut t1 = (min[axis] - origin) * inv;
        let mut t2 = (max[axis] - origin) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        t_enter = t_enter.max(t1);
        t_exit = t_exit.min(t2);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit <= T_EPSILON {
        return None;
    }
    // Ursprung im Quader: Austrittsfläche zählt
    Some(if t_enter > T_EPSILON { t_enter } else { t_exit })
}

/// Scheiben-Schnitt: Ebene schneiden, dann Radius prüfen.
fn intersect_disc(ray: &Ray, center: Vec3, normal: Vec3, radius: f32) -> Option<f32> {
    let denom = normal.dot(ray.dir);
    if denom.abs() < 1e-8 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t <= T_EPSILON {
        return None;
    }
    let hit = ray.at(t);
    ((hit - center).length_squared() <= radius * radius).then_some(t)
}

/// Ein Treffer: Schnittpunkt plus Ray-Parameter.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// Schnittpunkt
    pub point: Vec3,
    /// Ray-Parameter (Distanz entlang des normalisierten Strahls)
    pub t: f32,
}

/// Alle Schnittflächen eines Modells.
#[derive(Debug, Clone, Default)]
pub struct SceneModel {
    surfaces: Vec<SceneSurface>,
}

impl SceneModel {
    /// Erstellt eine Szene aus Flächen.
    pub fn new(surfaces: Vec<SceneSurface>) -> Self {
        Self { surfaces }
    }

    /// Read-only Zugriff auf die Flächen (für das Rendering).
    pub fn surfaces(&self) -> &[SceneSurface] {
        &self.surfaces
    }

    /// Schneidet den Strahl gegen alle Flächen.
    ///
    /// Gibt alle Treffer aufsteigend nach Ray-Parameter sortiert zurück;
    /// die Platzierung konsumiert nur den ersten Eintrag.
    pub fn raycast(&self, ray: &Ray) -> Vec<SurfaceHit> {
        let mut hits: Vec<SurfaceHit> = self
            .surfaces
            .iter()
            .filter_map(|surface| {
                surface.intersect(ray).map(|t| SurfaceHit {
                    point: ray.at(t),
                    t,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.t.total_cmp(&b.t));
        hits
    }

    /// Nächstgelegener Treffer (kleinster Ray-Parameter), falls vorhanden.
    pub fn first_hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.raycast(ray).into_iter().next()
    }
}
