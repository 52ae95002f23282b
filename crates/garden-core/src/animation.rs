use crate::constants::*;
use crate::garden::Garden;
use glam::Vec3;

/// Per-frame motion: swaying flowers and leaves, breathing bushes, drifting
/// clouds, rising hearts, bobbing fireflies and a flickering sun.
///
/// `t` is seconds since start, `dt` seconds since the previous frame.
pub fn tick(garden: &mut Garden, t: f32, dt: f32, camera_eye: Vec3) {
    let scene = &mut garden.scene;

    for f in &garden.flowers {
        if let Some(n) = scene.node_mut(f.group) {
            n.transform.rotation.y = (t + f.base.x + f.base.z).sin() * SWAY_AMPLITUDE;
        }
    }

    for tree in &garden.trees {
        if let Some(n) = scene.node_mut(tree.leaves) {
            n.transform.translation.x = (t + tree.base.x + tree.base.z).sin() * SWAY_AMPLITUDE;
        }
    }

    for &(id, base) in &garden.bushes {
        if let Some(n) = scene.node_mut(id) {
            n.transform.scale.y = 1.0 + (t + base.x).sin() * BUSH_BREATH_AMPLITUDE;
        }
    }

    for &id in &garden.clouds {
        if let Some(n) = scene.node_mut(id) {
            let p = &mut n.transform.translation;
            p.x += CLOUD_DRIFT_PER_SEC * dt;
            if p.x > CLOUD_WRAP_X {
                p.x = -CLOUD_WRAP_X;
            }
            let to_eye = camera_eye - *p;
            n.transform.rotation.y = to_eye.x.atan2(to_eye.z);
        }
    }

    for &id in &garden.hearts {
        if let Some(n) = scene.node_mut(id) {
            let y = &mut n.transform.translation.y;
            *y += HEART_RISE_PER_SEC * dt;
            if *y > HEART_CEILING {
                *y = HEART_FLOOR;
            }
        }
    }

    if let Some(n) = scene.node_mut(garden.fireflies) {
        n.transform.translation.y = (t * 2.0).sin() * FIREFLY_BOB_AMPLITUDE;
    }

    garden.lighting.sun = SUN_BASE_INTENSITY + (t * 2.0).sin() * SUN_FLICKER;
}
