use glam::Vec2;
use smallvec::SmallVec;

/// Platform pointer event reduced to what picking needs.
#[derive(Clone, Debug)]
pub enum PointerInput {
    Mouse { client: Vec2 },
    Touch { touches: SmallVec<[Vec2; 2]> },
}

impl PointerInput {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self::Mouse {
            client: Vec2::new(x, y),
        }
    }

    pub fn touch(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self::Touch {
            touches: points.into_iter().collect(),
        }
    }

    /// Client position in viewport pixels. Touches use the first point only;
    /// an empty touch list yields `None`.
    #[inline]
    pub fn client_point(&self) -> Option<Vec2> {
        match self {
            Self::Mouse { client } => Some(*client),
            Self::Touch { touches } => touches.first().copied(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }

    /// Viewport pixels to normalized device coordinates, y pointing up.
    #[inline]
    pub fn to_ndc(&self, client: Vec2) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new((client.x / w) * 2.0 - 1.0, -(client.y / h) * 2.0 + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        let vp = Viewport::new(1000.0, 800.0);
        assert_eq!(vp.to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(1000.0, 800.0)), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(Vec2::new(500.0, 400.0)), Vec2::ZERO);
    }

    #[test]
    fn first_touch_wins() {
        let input = PointerInput::touch([Vec2::new(3.0, 4.0), Vec2::new(9.0, 9.0)]);
        assert_eq!(input.client_point(), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn empty_touch_has_no_point() {
        assert_eq!(PointerInput::touch(Vec::<Vec2>::new()).client_point(), None);
    }
}
