//! Ray picking against the interactive part of the scene graph.
//!
//! A click is turned into a world-space ray, every shaped node below the
//! interactive roots is intersected in its own local space, and the nearest
//! hit is resolved to the memory carried by its top-level group.

use crate::input::{PointerInput, Viewport};
use crate::memory::MemoryPayload;
use crate::scene::{NodeId, SceneGraph, Shape};
use crate::state::Camera;
use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through a point in normalized device coordinates.
    pub fn from_ndc(ndc: Vec2, camera: &Camera) -> Self {
        let inv = camera.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Self::new(camera.eye, p1 - camera.eye)
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub node: NodeId,
    pub distance: f32,
    pub point: Vec3,
}

/// Intersect `ray` with every shaped node under the interactive roots.
/// Hits come back nearest first.
pub fn hit_test(scene: &SceneGraph, ray: &Ray) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut stack: Vec<(NodeId, Mat4)> = Vec::new();
    for &root in scene.interactive() {
        let parent_world = match scene.parent(root) {
            Some(p) => scene.world_matrix(p),
            None => Mat4::IDENTITY,
        };
        stack.push((root, parent_world));
        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = scene.node(id) else { continue };
            if !node.visible {
                continue;
            }
            let world = parent_world * node.transform.matrix();
            if let Some(shape) = node.shape {
                if let Some(t) = intersect_local(&shape, world, ray) {
                    hits.push(Hit {
                        node: id,
                        distance: t,
                        point: ray.at(t),
                    });
                }
            }
            for &child in node.children() {
                stack.push((child, world));
            }
        }
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Ray parameter of the first hit with `shape` placed by `world`.
///
/// The ray is moved into local space without renormalising its direction, so
/// the local parameter equals the world-space distance.
fn intersect_local(shape: &Shape, world: Mat4, ray: &Ray) -> Option<f32> {
    let det = world.determinant();
    if det.abs() < 1e-12 {
        return None;
    }
    let inv = world.inverse();
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.direction);
    match *shape {
        Shape::Sphere { radius } | Shape::Dodecahedron { radius } => ray_sphere(o, d, radius),
        Shape::Cuboid { size } => ray_box(o, d, size * 0.5),
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
        } => ray_frustum(o, d, radius_top, radius_bottom, height),
        Shape::Plane { width, height } => ray_rect(o, d, width * 0.5, height * 0.5),
    }
}

/// Sphere at the origin. A ray starting inside reports the exit point.
#[inline]
pub fn ray_sphere(o: Vec3, d: Vec3, radius: f32) -> Option<f32> {
    let a = d.dot(d);
    if a <= f32::EPSILON {
        return None;
    }
    let b = o.dot(d);
    let c = o.dot(o) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = (-b - sq) / a;
    let t1 = (-b + sq) / a;
    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Axis-aligned box centred at the origin (slab test).
#[inline]
pub fn ray_box(o: Vec3, d: Vec3, half: Vec3) -> Option<f32> {
    let inv = d.recip();
    let t_a = (-half - o) * inv;
    let t_b = (half - o) * inv;
    let t_min = t_a.min(t_b);
    let t_max = t_a.max(t_b);
    let t_near = t_min.max_element();
    let t_far = t_max.min_element();
    if t_near.is_nan() || t_far.is_nan() || t_near > t_far || t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Rectangle in the local XY plane.
#[inline]
pub fn ray_rect(o: Vec3, d: Vec3, half_w: f32, half_h: f32) -> Option<f32> {
    if d.z.abs() < 1e-9 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let p = o + d * t;
    (p.x.abs() <= half_w && p.y.abs() <= half_h).then_some(t)
}

/// Capped cone frustum along local Y, radius varying linearly from bottom to top.
pub fn ray_frustum(o: Vec3, d: Vec3, r_top: f32, r_bottom: f32, height: f32) -> Option<f32> {
    let h2 = height * 0.5;
    let k = if height > 0.0 { (r_top - r_bottom) / height } else { 0.0 };
    let m = (r_top + r_bottom) * 0.5;
    let radius_at = |y: f32| m + k * y;
    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    // lateral surface: x^2 + z^2 = (m + k*y)^2
    let ry = m + k * o.y;
    let a = d.x * d.x + d.z * d.z - k * k * d.y * d.y;
    let b = 2.0 * (o.x * d.x + o.z * d.z - k * ry * d.y);
    let c = o.x * o.x + o.z * o.z - ry * ry;
    let mut side = |t: f32| {
        let y = o.y + d.y * t;
        if y.abs() <= h2 && radius_at(y) >= 0.0 {
            consider(t);
        }
    };
    if a.abs() > 1e-9 {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            side((-b - sq) / (2.0 * a));
            side((-b + sq) / (2.0 * a));
        }
    } else if b.abs() > 1e-9 {
        side(-c / b);
    }

    // caps
    if d.y.abs() > 1e-9 {
        for y_cap in [h2, -h2] {
            let t = (y_cap - o.y) / d.y;
            let p = o + d * t;
            let r = radius_at(y_cap).max(0.0);
            if p.x * p.x + p.z * p.z <= r * r {
                consider(t);
            }
        }
    }
    best
}

/// Outcome of a successful click: the entity that owns the memory, the leaf
/// part the ray actually struck, and where the popup should anchor.
#[derive(Clone, Debug)]
pub struct Selection {
    pub entity: NodeId,
    pub hit_node: NodeId,
    pub distance: f32,
    pub payload: MemoryPayload,
    pub anchor: Vec2,
}

/// Pointer event to memory. Every miss is silent and yields `None`.
pub fn select(
    scene: &SceneGraph,
    camera: &Camera,
    viewport: Viewport,
    input: &PointerInput,
) -> Option<Selection> {
    let Some(anchor) = input.client_point() else {
        log::debug!("[pick] touch event without touch points");
        return None;
    };
    let ray = Ray::from_ndc(viewport.to_ndc(anchor), camera);
    let hits = hit_test(scene, &ray);
    let Some(nearest) = hits.first() else {
        log::debug!("[pick] no hit at ({:.0},{:.0})", anchor.x, anchor.y);
        return None;
    };
    let Some((entity, payload)) = scene.resolve_payload(nearest.node) else {
        log::debug!("[pick] hit {:?} carries no memory", nearest.node);
        return None;
    };
    log::debug!(
        "[pick] hit {:?} -> entity {:?} at {:.2}",
        nearest.node,
        entity,
        nearest.distance
    );
    Some(Selection {
        entity,
        hit_node: nearest.node,
        distance: nearest.distance,
        payload: payload.clone(),
        anchor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_hit_from_outside() {
        let t = ray_box(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, Vec3::splat(1.0)).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn box_miss() {
        assert!(ray_box(Vec3::new(3.0, 0.0, -5.0), Vec3::Z, Vec3::splat(1.0)).is_none());
    }

    #[test]
    fn rect_respects_extent() {
        let d = Vec3::new(0.0, 0.0, -1.0);
        assert!(ray_rect(Vec3::new(0.4, 0.0, 3.0), d, 0.5, 0.5).is_some());
        assert!(ray_rect(Vec3::new(0.6, 0.0, 3.0), d, 0.5, 0.5).is_none());
    }

    #[test]
    fn frustum_side_and_cap() {
        // straight down onto the top cap
        let t = ray_frustum(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y, 0.3, 0.5, 4.0).unwrap();
        assert!((t - 3.0).abs() < 1e-5);
        // horizontally into the side at y = 0, radius 0.4 there
        let t = ray_frustum(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, 0.3, 0.5, 4.0).unwrap();
        assert!((t - 4.6).abs() < 1e-4);
        // above the top
        assert!(ray_frustum(Vec3::new(-5.0, 2.5, 0.0), Vec3::X, 0.3, 0.5, 4.0).is_none());
    }

    #[test]
    fn sphere_from_inside_reports_exit() {
        let t = ray_sphere(Vec3::ZERO, Vec3::X, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }
}
