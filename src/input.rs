use crate::constants::{CLICK_DRAG_THRESHOLD_PX, ORBIT_ROTATE_SPEED};
use glam::Vec2;

/// Pointer drag that orbits the camera. A drag that travels far enough
/// swallows the click the browser fires when the button comes back up.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
    pub travel: f32,
    suppress_click: bool,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
        self.travel = 0.0;
        self.suppress_click = false;
    }

    /// Movement since the last call, if this pointer is dragging.
    pub fn move_to(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        self.travel += delta.length();
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            self.suppress_click = self.travel > CLICK_DRAG_THRESHOLD_PX;
        }
    }

    /// True once after a real drag; the click that follows should be ignored.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}

/// Pixel drag to `(d_azimuth, d_polar)` radians: one viewport height of drag
/// is a full turn. Dragging right or down moves the camera the other way.
#[inline]
pub fn orbit_angles(delta_px: Vec2, viewport_height: f32) -> Vec2 {
    let k = std::f32::consts::TAU * ORBIT_ROTATE_SPEED / viewport_height.max(1.0);
    Vec2::new(-delta_px.x * k, -delta_px.y * k)
}

/// Garden seed from a page attribute. Blank or non-numeric text yields `None`.
pub fn parse_seed(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
