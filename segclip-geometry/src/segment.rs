// BSL 1.0 License

use super::{LineSegment, Point, Scalar};

/// A straight line between two points in two-dimensional space.
///
/// The order of the endpoints only matters for the direction of the result when the segment is clipped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment<T> {
    /// The point the segment starts at.
    pub start: Point<T>,
    /// The point the segment ends at.
    pub end: Point<T>,
}

impl<T> Segment<T> {
    /// Create a segment from its two endpoints.
    #[inline]
    #[must_use]
    pub const fn new(start: Point<T>, end: Point<T>) -> Self {
        Self { start, end }
    }

    /// The same segment, running in the opposite direction.
    #[inline]
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl<T: Scalar> Segment<T> {
    /// Evaluate `start + t * (end - start)`.
    ///
    /// `t = 0` and `t = 1` return the endpoints exactly, without any rounding introduced by the
    /// interpolation.
    #[inline]
    #[must_use]
    pub fn point_at(self, t: T) -> Point<T> {
        if t == T::ZERO {
            self.start
        } else if t == T::ONE {
            self.end
        } else {
            Point::new(
                lerp(self.start.x, self.end.x, t),
                lerp(self.start.y, self.end.y, t),
            )
        }
    }

    /// Whether both endpoints are the same point.
    #[inline]
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

#[inline]
fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    let delta = b - a;
    if delta.is_finite() {
        a + t * delta
    } else {
        // endpoints too far apart to subtract
        a * (T::ONE - t) + b * t
    }
}

impl<T> From<LineSegment<T>> for Segment<T> {
    #[inline]
    fn from(ls: LineSegment<T>) -> Self {
        Self::new(ls.from, ls.to)
    }
}

impl<T> From<Segment<T>> for LineSegment<T> {
    #[inline]
    fn from(seg: Segment<T>) -> Self {
        LineSegment {
            from: seg.start,
            to: seg.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn test_point_at() {
        let seg = Segment::new(point(-5.0f64, 5.0), point(15.0, 5.0));
        assert_eq!(seg.point_at(0.0), seg.start);
        assert_eq!(seg.point_at(1.0), seg.end);
        assert_eq!(seg.point_at(0.25), point(0.0, 5.0));
        assert_eq!(seg.point_at(0.75), point(10.0, 5.0));
    }

    #[test]
    fn test_point_at_endpoints_are_exact() {
        // 0.1 + (0.7 - 0.1) does not round-trip to 0.7
        let seg = Segment::new(point(0.1f64, 0.1), point(0.7, 0.7));
        assert_eq!(seg.point_at(1.0), point(0.7, 0.7));
    }

    #[test]
    fn test_point_at_far_apart() {
        let seg = Segment::new(point(-f64::MAX, 1.0), point(f64::MAX, 3.0));
        assert_eq!(seg.point_at(0.5), point(0.0, 2.0));
        let quarter = seg.point_at(0.25);
        approx::assert_relative_eq!(quarter.x, -f64::MAX * 0.5, max_relative = 1e-12);
        assert_eq!(quarter.y, 1.5);
    }

    #[test]
    fn test_reversed() {
        let seg = Segment::new(point(1.0f32, 2.0), point(3.0, 4.0));
        let rev = seg.reversed();
        assert_eq!(rev.start, seg.end);
        assert_eq!(rev.end, seg.start);
        assert_eq!(rev.reversed(), seg);
    }

    #[test]
    fn test_degenerate() {
        assert!(Segment::new(point(2.0f32, 2.0), point(2.0, 2.0)).is_degenerate());
        assert!(!Segment::new(point(2.0f32, 2.0), point(2.0, 3.0)).is_degenerate());
    }

    #[test]
    fn test_line_segment_conversion() {
        let ls = LineSegment {
            from: point(0.0f32, 1.0),
            to: point(2.0, 3.0),
        };
        let seg: Segment<f32> = ls.into();
        assert_eq!(seg.start, ls.from);
        assert_eq!(seg.end, ls.to);

        let back: LineSegment<f32> = seg.into();
        assert_eq!(back.from, ls.from);
        assert_eq!(back.to, ls.to);
    }
}
