//! Rectangle helpers shared by every interactive region.

use kurbo::{Point, Rect, Size};

/// Half-open containment test: `x0 <= x < x1` and `y0 <= y < y1`.
///
/// Rectangles are normalized first, so a rect built with a negative size
/// still hit-tests over the area it covers.
pub fn contains(rect: Rect, point: Point) -> bool {
    rect.abs().contains(point)
}

/// Raise negative width/height to zero.
pub fn non_negative(size: Size) -> Size {
    Size::new(size.width.max(0.0), size.height.max(0.0))
}

/// Build a rect from an origin and size, clamping the size to be non-negative.
pub fn rect_at(origin: Point, size: Size) -> Rect {
    Rect::from_origin_size(origin, non_negative(size))
}

/// Smallest size a resizable region may shrink to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinSize {
    pub width: f64,
    pub height: f64,
}

impl Default for MinSize {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 50.0,
        }
    }
}

impl MinSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Raise each dimension of `size` to at least the minimum.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(size.width.max(self.width), size.height.max(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(contains(rect, Point::new(10.0, 10.0)));
        assert!(contains(rect, Point::new(19.9, 19.9)));
        assert!(!contains(rect, Point::new(20.0, 15.0)));
        assert!(!contains(rect, Point::new(15.0, 20.0)));
        assert!(!contains(rect, Point::new(9.9, 15.0)));
    }

    #[test]
    fn test_contains_flipped_rect() {
        let rect = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(contains(rect, Point::new(15.0, 15.0)));
    }

    #[test]
    fn test_rect_at_clamps_negative_size() {
        let rect = rect_at(Point::new(5.0, 5.0), Size::new(-10.0, 4.0));
        assert!(rect.width().abs() < f64::EPSILON);
        assert!((rect.height() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_min_size_clamp() {
        let min = MinSize::default();
        let clamped = min.clamp(Size::new(40.0, 40.0));
        assert_eq!(clamped, Size::new(100.0, 50.0));

        let untouched = min.clamp(Size::new(300.0, 200.0));
        assert_eq!(untouched, Size::new(300.0, 200.0));
    }
}
