//! Memory popup: content, placement and timed dismissal.

pub mod layout;
pub mod metrics;
pub mod presenter;

pub use layout::{clamp_anchor, place};
pub use metrics::{MeasuredSurface, TextMetrics};
pub use presenter::{PopupPresenter, PopupState, ShownPopup};

use crate::memory::MemoryPayload;
use glam::Vec2;
use std::time::Duration;

/// Where and how long a popup is shown. All lengths are viewport pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupConfig {
    /// Minimum distance kept from every viewport edge.
    pub margin: f32,
    /// Gap between the click point and the popup's bottom edge.
    pub gap: f32,
    pub max_image_width: f32,
    pub timeout: Duration,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            gap: 20.0,
            max_image_width: 200.0,
            timeout: Duration::from_secs(6),
        }
    }
}

impl PopupConfig {
    /// Text-only flavour with a shorter lifetime.
    pub fn simple() -> Self {
        Self {
            timeout: Duration::from_secs(3),
            ..Self::default()
        }
    }
}

/// The single on-screen element the presenter drives.
pub trait PopupSurface {
    /// Replace the content: text first, then the image (if any) below it,
    /// scaled down to `max_image_width`.
    fn set_content(&mut self, payload: &MemoryPayload, max_image_width: f32);
    /// Rendered size of the current content.
    fn measure(&self) -> Vec2;
    fn set_position(&mut self, top_left: Vec2);
    fn set_visible(&mut self, visible: bool);
}
