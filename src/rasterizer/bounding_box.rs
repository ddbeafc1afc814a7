use crate::math::vec2::Vec2;

use super::ViewportBounds;

/// Screen-aligned float bounding box of a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

/// Inclusive pixel coordinates covered by a clipped bounding box.
///
/// The range can be empty after clipping (`min_x > max_x` or
/// `min_y > max_y`), in which case traversal loops run zero iterations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelRange {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn of_triangle(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self {
            min: v0.min(v1).min(v2),
            max: v0.max(v1).max(v2),
        }
    }

    /// Clip against the viewport rectangle, in float.
    ///
    /// Clipping only ever raises `min` and lowers `max`, so a box disjoint
    /// from the viewport ends up inverted and its pixel range empty.
    pub fn clip(&mut self, bounds: &ViewportBounds) {
        self.min = self.min.max(Vec2::new(bounds.min_x as f32, bounds.min_y as f32));
        self.max = self.max.min(Vec2::new(bounds.max_x as f32, bounds.max_y as f32));
    }

    /// Round outward to the inclusive pixel range covering the box.
    pub fn pixel_range(&self) -> PixelRange {
        PixelRange {
            min_x: self.min.x.floor() as i32,
            min_y: self.min.y.floor() as i32,
            max_x: self.max.x.ceil() as i32,
            max_y: self.max.y.ceil() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_triangle() {
        let bb = BoundingBox::of_triangle(
            Vec2::new(50.0, 200.0),
            Vec2::new(100.0, 200.0),
            Vec2::new(75.0, 100.0),
        );
        assert_eq!(bb.min, Vec2::new(50.0, 100.0));
        assert_eq!(bb.max, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn pixel_range_rounds_outward() {
        let bb = BoundingBox {
            min: Vec2::new(50.9, -1.5),
            max: Vec2::new(100.1, 200.9),
        };
        let range = bb.pixel_range();
        assert_eq!(range.min_x, 50);
        assert_eq!(range.min_y, -2);
        assert_eq!(range.max_x, 101);
        assert_eq!(range.max_y, 201);
    }

    #[test]
    fn clip_shrinks_to_viewport() {
        let mut bb = BoundingBox {
            min: Vec2::new(-20.0, 30.0),
            max: Vec2::new(700.0, 500.0),
        };
        bb.clip(&ViewportBounds::new(0, 0, 639, 479));
        assert_eq!(bb.min, Vec2::new(0.0, 30.0));
        assert_eq!(bb.max, Vec2::new(639.0, 479.0));
    }

    #[test]
    fn clip_disjoint_is_empty() {
        let mut bb = BoundingBox {
            min: Vec2::new(-30.0, 10.0),
            max: Vec2::new(-5.0, 20.0),
        };
        bb.clip(&ViewportBounds::new(0, 0, 639, 479));
        let range = bb.pixel_range();
        assert!(range.min_x > range.max_x);
    }
}
