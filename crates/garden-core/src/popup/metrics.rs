//! Size estimation for targets without a layout engine.
//!
//! Browsers measure the popup after the DOM is updated. Elsewhere the size is
//! approximated from a fixed character advance and a fixed image aspect.

use super::PopupSurface;
use crate::memory::MemoryPayload;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct TextMetrics {
    pub char_advance: f32,
    pub line_height: f32,
    pub max_text_width: f32,
    pub padding: f32,
    /// Height over width assumed for images.
    pub image_aspect: f32,
    pub image_gap: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_advance: 7.5,
            line_height: 18.0,
            max_text_width: 240.0,
            padding: 12.0,
            image_aspect: 0.75,
            image_gap: 8.0,
        }
    }
}

impl TextMetrics {
    /// Greedy word wrap. Returns `(line_count, widest_line_in_chars)`.
    pub fn wrap(&self, text: &str) -> (usize, usize) {
        let per_line = ((self.max_text_width / self.char_advance).floor() as usize).max(1);
        let mut lines = 0usize;
        let mut current = 0usize;
        let mut widest = 0usize;
        for word in text.split_whitespace() {
            let mut len = word.chars().count();
            if current > 0 && current + 1 + len <= per_line {
                current += 1 + len;
                continue;
            }
            if current > 0 {
                lines += 1;
                widest = widest.max(current);
            }
            // words longer than a line break mid-word
            while len > per_line {
                lines += 1;
                widest = per_line;
                len -= per_line;
            }
            current = len;
        }
        if current > 0 {
            lines += 1;
            widest = widest.max(current);
        }
        (lines, widest)
    }

    pub fn measure(&self, payload: &MemoryPayload, max_image_width: f32) -> Vec2 {
        let (lines, widest) = self.wrap(payload.text());
        let mut width = widest as f32 * self.char_advance;
        let mut height = lines as f32 * self.line_height;
        if payload.image().is_some() {
            width = width.max(max_image_width);
            height += self.image_gap + max_image_width * self.image_aspect;
        }
        Vec2::new(width + 2.0 * self.padding, height + 2.0 * self.padding)
    }
}

/// In-memory popup used by the headless driver and tests.
#[derive(Clone, Debug, Default)]
pub struct MeasuredSurface {
    pub metrics: TextMetrics,
    pub content: Option<MemoryPayload>,
    pub size: Vec2,
    pub position: Vec2,
    pub visible: bool,
}

impl MeasuredSurface {
    pub fn new(metrics: TextMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }
}

impl PopupSurface for MeasuredSurface {
    fn set_content(&mut self, payload: &MemoryPayload, max_image_width: f32) {
        self.size = self.metrics.measure(payload, max_image_width);
        self.content = Some(payload.clone());
    }

    fn measure(&self) -> Vec2 {
        self.size
    }

    fn set_position(&mut self, top_left: Vec2) {
        self.position = top_left;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
