//! Read-only view of the running garden for the page that draws it.
//!
//! The page renders; this crate picks. Both read the same scene: the seed it
//! was built from, every visible shape with its animated world matrix, the
//! firefly swarm, the lighting and the orbit camera. Matrices are column-major
//! `Float32Array`s, ready for WebGL uniforms.

use garden_core::{DrawItem, Garden, OrbitCamera};
use js_sys::{Array, Float32Array, Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub struct HostView {
    pub garden: Rc<RefCell<Garden>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
}

thread_local! {
    static VIEW: RefCell<Option<HostView>> = const { RefCell::new(None) };
}

pub fn publish(view: HostView) {
    VIEW.with(|v| *v.borrow_mut() = Some(view));
}

fn with_garden<R>(f: impl FnOnce(&Garden) -> R) -> Option<R> {
    VIEW.with(|v| {
        let v = v.borrow();
        let garden = v.as_ref()?.garden.try_borrow().ok()?;
        Some(f(&garden))
    })
}

fn with_orbit<R>(f: impl FnOnce(&OrbitCamera) -> R) -> Option<R> {
    VIEW.with(|v| {
        let v = v.borrow();
        let orbit = v.as_ref()?.orbit.try_borrow().ok()?;
        Some(f(&orbit))
    })
}

fn set(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn draw_item_to_js(item: &DrawItem) -> Object {
    let obj = Object::new();
    set(&obj, "node", &JsValue::from(item.node.index() as u32));
    set(&obj, "name", &JsValue::from_str(item.name));
    set(&obj, "kind", &JsValue::from_str(item.shape.kind()));
    set(
        &obj,
        "dimensions",
        &Float32Array::from(&item.shape.dimensions()[..]).into(),
    );
    set(
        &obj,
        "world",
        &Float32Array::from(&item.world.to_cols_array()[..]).into(),
    );
    obj
}

/// Seed the garden was generated from. `undefined` until startup finishes.
#[wasm_bindgen(js_name = gardenSeed)]
pub fn garden_seed() -> Option<u32> {
    with_garden(|g| g.seed as u32)
}

/// `[{ node, name, kind, dimensions, world }]` for every visible shape.
#[wasm_bindgen(js_name = sceneDrawList)]
pub fn scene_draw_list() -> Array {
    with_garden(|g| g.scene.draw_list().iter().map(draw_item_to_js).collect())
        .unwrap_or_else(Array::new)
}

/// Firefly positions as packed `xyz` triples.
#[wasm_bindgen(js_name = fireflyPositions)]
pub fn firefly_positions() -> Vec<f32> {
    with_garden(|g| {
        g.firefly_positions()
            .iter()
            .flat_map(|p| p.to_array())
            .collect()
    })
    .unwrap_or_default()
}

/// `[ambient, sun]` intensities.
#[wasm_bindgen(js_name = sceneLighting)]
pub fn scene_lighting() -> Vec<f32> {
    with_garden(|g| vec![g.lighting.ambient, g.lighting.sun]).unwrap_or_default()
}

#[wasm_bindgen(js_name = cameraEye)]
pub fn camera_eye() -> Vec<f32> {
    with_orbit(|o| o.eye().to_array().to_vec()).unwrap_or_default()
}

#[wasm_bindgen(js_name = cameraTarget)]
pub fn camera_target() -> Vec<f32> {
    with_orbit(|o| o.target.to_array().to_vec()).unwrap_or_default()
}

/// View-projection matrix the click handlers pick with, for a canvas of the
/// given aspect ratio.
#[wasm_bindgen(js_name = cameraViewProjection)]
pub fn camera_view_projection(aspect: f32) -> Vec<f32> {
    with_orbit(|o| o.camera(aspect).view_projection().to_cols_array().to_vec())
        .unwrap_or_default()
}
