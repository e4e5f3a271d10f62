// BSL 1.0 License

use super::{Box2D, Point, Scalar};

/// An axis-aligned rectangle, used as the window that segments are clipped against.
///
/// The corners are always stored in canonical order:
///
/// ```text
/// 0 (min_x, min_y) ---- 1 (max_x, min_y)
///        |                     |
/// 3 (min_x, max_y) ---- 2 (max_x, max_y)
/// ```
///
/// With the Y axis pointing downward this is clockwise, starting from the top left. A rectangle with
/// zero width or height is valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle<T> {
    corners: [Point<T>; 4],
}

/// Compute the canonical rectangle spanned by two opposite corners, given in any order.
#[inline]
#[must_use]
pub fn normalize<T: Scalar>(corner_a: Point<T>, corner_b: Point<T>) -> Rectangle<T> {
    Rectangle::normalize(corner_a, corner_b)
}

impl<T: Scalar> Rectangle<T> {
    /// Compute the canonical rectangle spanned by two opposite corners, given in any order.
    #[must_use]
    pub fn normalize(corner_a: Point<T>, corner_b: Point<T>) -> Self {
        let mut bounds = Bounds::new(corner_a);
        bounds.accomodate(corner_b);
        bounds.into_rectangle()
    }

    /// The smallest rectangle containing every point in `points`, or `None` if there are no points.
    ///
    /// NaN coordinates are skipped as long as at least one point has a number on that axis.
    pub fn bounding<I: IntoIterator<Item = Point<T>>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Bounds::new(points.next()?);
        points.for_each(|pt| bounds.accomodate(pt));
        Some(bounds.into_rectangle())
    }

    /// The width of the rectangle.
    #[inline]
    #[must_use]
    pub fn width(&self) -> T {
        self.max_x() - self.min_x()
    }

    /// The height of the rectangle.
    #[inline]
    #[must_use]
    pub fn height(&self) -> T {
        self.max_y() - self.min_y()
    }

    /// Whether this rectangle has no area.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == T::ZERO || self.height() == T::ZERO
    }

    /// Tell if a point lies inside this rectangle. The boundary counts as inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, pt: Point<T>) -> bool {
        pt.x >= self.min_x() && pt.x <= self.max_x() && pt.y >= self.min_y() && pt.y <= self.max_y()
    }
}

impl<T: Copy> Rectangle<T> {
    /// The four corners, in canonical order.
    #[inline]
    #[must_use]
    pub fn corners(&self) -> [Point<T>; 4] {
        self.corners
    }

    /// The corner with the smallest coordinates.
    #[inline]
    #[must_use]
    pub fn min(&self) -> Point<T> {
        self.corners[0]
    }

    /// The corner with the largest coordinates.
    #[inline]
    #[must_use]
    pub fn max(&self) -> Point<T> {
        self.corners[2]
    }

    #[inline]
    #[must_use]
    pub fn min_x(&self) -> T {
        self.corners[0].x
    }

    #[inline]
    #[must_use]
    pub fn min_y(&self) -> T {
        self.corners[0].y
    }

    #[inline]
    #[must_use]
    pub fn max_x(&self) -> T {
        self.corners[2].x
    }

    #[inline]
    #[must_use]
    pub fn max_y(&self) -> T {
        self.corners[2].y
    }

    /// Convert this rectangle into a `Box2D`.
    #[inline]
    #[must_use]
    pub fn to_box(&self) -> Box2D<T> {
        Box2D::new(self.min(), self.max())
    }
}

impl<T: Scalar> From<Box2D<T>> for Rectangle<T> {
    /// The box's corners are normalized again, so an inverted box still produces a valid rectangle.
    #[inline]
    fn from(b: Box2D<T>) -> Self {
        Self::normalize(b.min, b.max)
    }
}

impl<T: Copy> From<Rectangle<T>> for Box2D<T> {
    #[inline]
    fn from(rect: Rectangle<T>) -> Self {
        rect.to_box()
    }
}

/// Running extremes of a set of points.
struct Bounds<T> {
    min: Point<T>,
    max: Point<T>,
}

impl<T: Scalar> Bounds<T> {
    fn new(first: Point<T>) -> Self {
        Self {
            min: first,
            max: first,
        }
    }

    /// Grow the bounds to include `pt`.
    fn accomodate(&mut self, pt: Point<T>) {
        // Float::min and Float::max prefer the operand that is not NaN
        self.min.x = self.min.x.min(pt.x);
        self.min.y = self.min.y.min(pt.y);
        self.max.x = self.max.x.max(pt.x);
        self.max.y = self.max.y.max(pt.y);
    }

    fn into_rectangle(self) -> Rectangle<T> {
        let Self { min, max } = self;
        Rectangle {
            corners: [
                min,
                Point::new(max.x, min.y),
                max,
                Point::new(min.x, max.y),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn test_normalize_any_order() {
        let expected = [
            point(0.0f32, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0),
        ];

        let pairs = [
            (point(0.0, 0.0), point(10.0, 10.0)),
            (point(10.0, 10.0), point(0.0, 0.0)),
            (point(10.0, 0.0), point(0.0, 10.0)),
            (point(0.0, 10.0), point(10.0, 0.0)),
        ];

        for (a, b) in pairs.iter().copied() {
            assert_eq!(normalize(a, b).corners(), expected);
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let rect = normalize(point(7.5f64, -3.0), point(-2.0, 4.25));
        let corners = rect.corners();
        assert_eq!(normalize(corners[0], corners[2]), rect);
        assert_eq!(normalize(corners[1], corners[3]), rect);
        assert_eq!(normalize(point(-2.0, 4.25), point(7.5, -3.0)), rect);
    }

    #[test]
    fn test_degenerate_rectangle() {
        let rect = normalize(point(5.0f32, 5.0), point(5.0, 5.0));
        assert_eq!(rect.corners(), [point(5.0, 5.0); 4]);
        assert!(rect.is_degenerate());
        assert!(rect.contains(point(5.0, 5.0)));
        assert!(!rect.contains(point(5.0, 5.5)));

        let flat = normalize(point(0.0f32, 3.0), point(8.0, 3.0));
        assert!(flat.is_degenerate());
        assert_eq!(flat.width(), 8.0);
        assert_eq!(flat.height(), 0.0);
    }

    #[test]
    fn test_bounding() {
        assert_eq!(Rectangle::<f32>::bounding(core::iter::empty()), None);

        let rect = Rectangle::bounding([
            point(3.0f32, 1.0),
            point(-1.0, 4.0),
            point(2.0, -6.0),
            point(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(rect.min(), point(-1.0, -6.0));
        assert_eq!(rect.max(), point(3.0, 4.0));

        // matches the two-point case
        let a = point(9.0f32, 2.0);
        let b = point(1.0, 8.0);
        assert_eq!(Rectangle::bounding([a, b]), Some(normalize(a, b)));
    }

    #[test]
    fn test_bounding_skips_nan() {
        let rect = Rectangle::bounding([
            point(f64::NAN, 1.0),
            point(2.0, 3.0),
            point(4.0, f64::NAN),
        ])
        .unwrap();
        assert_eq!(rect.min(), point(2.0, 1.0));
        assert_eq!(rect.max(), point(4.0, 3.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = normalize(point(0.0f32, 0.0), point(10.0, 10.0));
        for corner in rect.corners().iter().copied() {
            assert!(rect.contains(corner));
        }
        assert!(rect.contains(point(5.0, 0.0)));
        assert!(!rect.contains(point(-0.001, 5.0)));
        assert!(!rect.contains(point(5.0, 10.001)));
    }

    #[test]
    fn test_box_conversion() {
        let b = Box2D::new(point(4.0f32, 6.0), point(1.0, 2.0));
        let rect: Rectangle<f32> = b.into();
        assert_eq!(rect.min(), point(1.0, 2.0));
        assert_eq!(rect.max(), point(4.0, 6.0));

        let back: Box2D<f32> = rect.into();
        assert_eq!(back.min, rect.min());
        assert_eq!(back.max, rect.max());
    }
}
