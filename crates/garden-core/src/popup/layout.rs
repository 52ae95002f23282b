use super::PopupConfig;
use crate::input::Viewport;
use glam::Vec2;

/// Pull `anchor` inside the viewport, `margin` pixels from every edge.
#[inline]
pub fn clamp_anchor(anchor: Vec2, viewport: Viewport, margin: f32) -> Vec2 {
    Vec2::new(
        anchor.x.max(margin).min(viewport.width - margin),
        anchor.y.max(margin).min(viewport.height - margin),
    )
}

/// Top-left corner for a popup of `size` shown for a click at `anchor`.
///
/// The box is centred horizontally on the (clamped) anchor and sits `gap`
/// pixels above it, then clamped again so it stays inside the margins. When
/// the box is bigger than the space between the margins the left/top margin
/// wins.
pub fn place(anchor: Vec2, size: Vec2, viewport: Viewport, config: &PopupConfig) -> Vec2 {
    let m = config.margin;
    let a = clamp_anchor(anchor, viewport, m);
    let left = a.x - size.x / 2.0;
    let top = a.y - size.y - config.gap;
    Vec2::new(
        left.min(viewport.width - size.x - m).max(m),
        top.min(viewport.height - size.y - m).max(m),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_above_click() {
        let vp = Viewport::new(1000.0, 800.0);
        let pos = place(Vec2::new(500.0, 400.0), Vec2::new(200.0, 100.0), vp, &PopupConfig::default());
        assert_eq!(pos, Vec2::new(400.0, 280.0));
    }

    #[test]
    fn right_edge_pushes_left() {
        let vp = Viewport::new(1000.0, 800.0);
        let pos = place(Vec2::new(990.0, 50.0), Vec2::new(240.0, 100.0), vp, &PopupConfig::default());
        assert_eq!(pos.x, 750.0);
        // not enough room above, so it hugs the top margin
        assert_eq!(pos.y, 10.0);
    }

    #[test]
    fn oversized_popup_starts_at_margin() {
        let vp = Viewport::new(300.0, 200.0);
        let pos = place(Vec2::new(150.0, 100.0), Vec2::new(400.0, 300.0), vp, &PopupConfig::default());
        assert_eq!(pos, Vec2::new(10.0, 10.0));
    }
}
