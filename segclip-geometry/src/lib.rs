// BSL 1.0 License

//! Geometry primitives for clipping line segments against an axis-aligned window.
//!
//! The two entry points are [`normalize`], which turns any two opposite corners into a canonical
//! [`Rectangle`], and [`clip`], which runs the Liang-Barsky parametric algorithm to find the part of a
//! [`Segment`] that lies inside that rectangle. Both are pure functions over `Copy` values.
//!
//! All types are generic over [`Scalar`], which is implemented for `f32` and `f64`. The Y axis may point in
//! either direction, as long as the same convention is used for the window and the segments.

#![no_std]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod clip;
pub use clip::*;

mod rectangle;
pub use rectangle::*;

mod segment;
pub use segment::*;

pub use euclid::default::Box2D;
pub use lyon_geom::{point, LineSegment, Point, Scalar};
