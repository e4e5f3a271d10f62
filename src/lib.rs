// MIT/Apache2 License

//! Interactive clipping of line segments against a rectangular window.
//!
//! The geometry lives in [`segclip_geometry`], re-exported here as [`geometry`]. This crate adds the part
//! of an interactive front-end that does not depend on any windowing toolkit: a [`Scene`] of drawn segments
//! and an [`Interaction`] state machine that turns pointer events into segments and clipping windows.
//!
//! All coordinates here are `f32`, in drawing-surface space with the Y axis pointing down.

#![forbid(unsafe_code)]

mod error;
mod interaction;
mod scene;

pub use error::*;
pub use interaction::*;
pub use scene::*;

#[doc(inline)]
pub use segclip_geometry as geometry;
#[doc(inline)]
pub use segclip_geometry::{clip, clip_all, clip_parameters, normalize, point, Boundary};

/// A point on the drawing surface.
pub type Point = segclip_geometry::Point<f32>;
/// A line segment on the drawing surface.
pub type Segment = segclip_geometry::Segment<f32>;
/// A clipping window on the drawing surface.
pub type Rectangle = segclip_geometry::Rectangle<f32>;
