// BSL 1.0 License

//! Liang-Barsky parametric line clipping.
//!
//! The segment is parametrized as `P(t) = start + t * (end - start)` for `t` in `[0, 1]`. Each side of the
//! window contributes a half-plane constraint `p * t <= q`; intersecting all four gives the range of `t`
//! that stays inside the window. Boundaries are inclusive throughout.

use super::{Point, Rectangle, Scalar, Segment};

/// One of the four sides of a clipping window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Boundary {
    /// The side at `min_x`.
    Left,
    /// The side at `max_x`.
    Right,
    /// The side at `min_y`.
    Top,
    /// The side at `max_y`.
    Bottom,
}

impl Boundary {
    /// Every boundary, in the order they are tested.
    pub const ALL: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Top,
        Boundary::Bottom,
    ];

    /// Get the `(p, q)` pair for this boundary.
    ///
    /// `p` is the rate at which the segment moves towards the outside of this boundary as `t` increases,
    /// and `q` is how far inside the boundary the segment's start point is. A negative `q` means the start
    /// point is outside.
    ///
    /// Either value may overflow to infinity for coordinates near the limits of `T`. Clipping itself works
    /// on halved values and is not affected.
    #[inline]
    #[must_use]
    pub fn constraint<T: Scalar>(self, segment: Segment<T>, window: &Rectangle<T>) -> (T, T) {
        let (p, q) = self.half_constraint(segment, window);
        (p + p, q + q)
    }

    /// The `(p, q)` pair scaled by one half, so the subtractions cannot overflow for finite input.
    #[inline]
    fn half_constraint<T: Scalar>(self, segment: Segment<T>, window: &Rectangle<T>) -> (T, T) {
        let Segment { start, end } = segment;
        let half = |v: T| v * T::HALF;

        match self {
            Boundary::Left => (
                half(start.x) - half(end.x),
                half(start.x) - half(window.min_x()),
            ),
            Boundary::Right => (
                half(end.x) - half(start.x),
                half(window.max_x()) - half(start.x),
            ),
            Boundary::Top => (
                half(start.y) - half(end.y),
                half(start.y) - half(window.min_y()),
            ),
            Boundary::Bottom => (
                half(end.y) - half(start.y),
                half(window.max_y()) - half(start.y),
            ),
        }
    }

    /// The coordinate of the window's edge on this side.
    #[inline]
    #[must_use]
    pub fn edge<T: Copy>(self, window: &Rectangle<T>) -> T {
        match self {
            Boundary::Left => window.min_x(),
            Boundary::Right => window.max_x(),
            Boundary::Top => window.min_y(),
            Boundary::Bottom => window.max_y(),
        }
    }
}

/// The parameter at which the clipped part of a segment begins or ends, along with the edges it lies on.
#[derive(Debug, Copy, Clone)]
struct Crossing<T> {
    t: T,
    x: Option<T>,
    y: Option<T>,
}

impl<T: Scalar> Crossing<T> {
    fn new(t: T) -> Self {
        Self { t, x: None, y: None }
    }

    /// Move the crossing to `t`, on `boundary`. A crossing at the same `t` keeps the edges it already
    /// lies on, so a segment through a corner ends up on both.
    fn hit(&mut self, t: T, boundary: Boundary, window: &Rectangle<T>) {
        if t != self.t {
            *self = Self::new(t);
        }

        let edge = Some(boundary.edge(window));
        match boundary {
            Boundary::Left | Boundary::Right => self.x = edge,
            Boundary::Top | Boundary::Bottom => self.y = edge,
        }
    }

    /// The point of `segment` at this crossing.
    ///
    /// Coordinates on an edge are taken from the edge itself, and the rest are clamped into the window, so
    /// interpolation error can never place the point outside.
    fn point(self, segment: Segment<T>, window: &Rectangle<T>) -> Point<T> {
        let mut pt = segment.point_at(self.t);
        if let Some(x) = self.x {
            pt.x = x;
        }
        if let Some(y) = self.y {
            pt.y = y;
        }

        Point::new(
            pt.x.max(window.min_x()).min(window.max_x()),
            pt.y.max(window.min_y()).min(window.max_y()),
        )
    }
}

/// Run Liang-Barsky, returning where the visible part of the segment begins and ends.
fn crossings<T: Scalar>(
    segment: Segment<T>,
    window: &Rectangle<T>,
) -> Option<(Crossing<T>, Crossing<T>)> {
    let mut enter = Crossing::new(T::ZERO);
    let mut leave = Crossing::new(T::ONE);

    for boundary in Boundary::ALL.iter().copied() {
        let (p, q) = boundary.half_constraint(segment, window);

        if p.is_nan() || q.is_nan() {
            return None;
        }

        // a segment parallel to the boundary never crosses it, and a tiny p can overflow the
        // division; in both cases only the side the start point lies on matters
        let t = q / p;
        if p == T::ZERO || !t.is_finite() {
            if q < T::ZERO {
                return None;
            }
            continue;
        }

        if p < T::ZERO {
            if t >= enter.t {
                enter.hit(t, boundary, window);
            }
        } else if t <= leave.t {
            leave.hit(t, boundary, window);
        }
    }

    if enter.t <= leave.t {
        Some((enter, leave))
    } else {
        None
    }
}

/// Find the range `(t_min, t_max)` of the segment's parameter that lies inside `window`.
///
/// Returns `None` if no part of the segment is inside. A NaN coordinate in either the segment or the
/// window also produces `None`.
#[must_use]
pub fn clip_parameters<T: Scalar>(segment: Segment<T>, window: &Rectangle<T>) -> Option<(T, T)> {
    crossings(segment, window).map(|(enter, leave)| (enter.t, leave.t))
}

/// Clip `segment` to the part of it that lies inside `window`.
///
/// The result runs in the same direction as the input. A segment entirely inside the window is returned
/// unchanged, and a segment that only touches the window in one point is clipped to a zero-length segment
/// at that point. An endpoint that was moved lies exactly on the edge it was clipped against.
#[inline]
#[must_use]
pub fn clip<T: Scalar>(segment: Segment<T>, window: &Rectangle<T>) -> Option<Segment<T>> {
    let (enter, leave) = crossings(segment, window)?;
    Some(Segment::new(
        enter.point(segment, window),
        leave.point(segment, window),
    ))
}

/// Clip every segment in `segments` against the same window, yielding the visible parts in order.
///
/// Segments that are entirely outside the window are skipped.
pub fn clip_all<'a, T, I>(segments: I, window: &'a Rectangle<T>) -> impl Iterator<Item = Segment<T>> + 'a
where
    T: Scalar + 'a,
    I: IntoIterator<Item = Segment<T>>,
    I::IntoIter: 'a,
{
    segments
        .into_iter()
        .filter_map(move |segment| clip(segment, window))
}
