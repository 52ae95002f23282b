use crate::dom;
use crate::input::{self, DragState};
use crate::popup::DomPresenter;
use garden_core::{select, Garden, OrbitCamera, PointerInput};
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub garden: Rc<RefCell<Garden>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub presenter: Rc<RefCell<DomPresenter>>,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_click(&w);
    wire_touchstart(&w);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

/// Run the pick pipeline for one input event and show whatever it finds.
fn pick_and_show(w: &InputWiring, input: &PointerInput) {
    let viewport = dom::viewport();
    let camera = w.orbit.borrow().camera(viewport.aspect());
    let selection = {
        let garden = w.garden.borrow();
        select(&garden.scene, &camera, viewport, input)
    };
    let Some(sel) = selection else { return };
    log::info!(
        "[click] {:?} via {:?} at ({:.0},{:.0})",
        sel.entity,
        sel.hit_node,
        sel.anchor.x,
        sel.anchor.y
    );
    w.presenter
        .borrow_mut()
        .show(&sel.payload, sel.anchor, viewport);
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("click", move |ev: web::MouseEvent| {
        if w.drag.borrow_mut().take_click_suppression() {
            log::debug!("[click] ignored after orbit drag");
            return;
        }
        let input = PointerInput::mouse(ev.client_x() as f32, ev.client_y() as f32);
        pick_and_show(&w, &input);
    });
}

fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("touchstart", move |ev: web::TouchEvent| {
        let list = ev.touches();
        let touches: SmallVec<[Vec2; 2]> = (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
            .collect();
        pick_and_show(&w, &PointerInput::Touch { touches });
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("pointerdown", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w.drag.borrow_mut().begin(ev.pointer_id(), at);
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let Some(delta) = w.drag.borrow_mut().move_to(ev.pointer_id(), at) else {
            return;
        };
        let angles = input::orbit_angles(delta, dom::viewport().height);
        w.orbit.borrow_mut().rotate(angles.x, angles.y);
    });
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        dom::add_window_listener(event, move |ev: web::PointerEvent| {
            let mut drag = w.drag.borrow_mut();
            let was_active = drag.active;
            drag.end(ev.pointer_id());
            if was_active && !drag.active {
                log::debug!("[mouse] orbit drag {:.0}px", drag.travel);
            }
        });
    }
}
