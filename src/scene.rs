// MIT/Apache2 License

use crate::{Rectangle, Segment};
use segclip_geometry::{clip, clip_all};

/// The segments a user has drawn, and the clipping window they are viewed through.
///
/// Clipped results are never stored. They are recomputed from the segments every time the window changes,
/// so the scene never holds stale geometry.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    segments: Vec<Segment>,
    window: Option<Rectangle>,
}

impl Scene {
    /// Create a new, empty scene.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment to the end of the scene.
    ///
    /// The segment is not clipped against the current window until the window is set again.
    pub fn add_segment(&mut self, segment: Segment) {
        log::debug!(
            "Adding segment #{}: {:?} -> {:?}",
            self.segments.len(),
            segment.start,
            segment.end
        );
        self.segments.push(segment);
    }

    /// The segments in this scene, in the order they were drawn.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The current clipping window, if one has been defined.
    #[inline]
    #[must_use]
    pub fn window(&self) -> Option<Rectangle> {
        self.window
    }

    /// Replace the clipping window and clip every segment against it.
    ///
    /// Returns the visible parts of the segments, in drawing order.
    pub fn set_window(&mut self, window: Rectangle) -> Vec<Segment> {
        log::debug!(
            "Setting clipping window to {:?} -> {:?}",
            window.min(),
            window.max()
        );
        self.window = Some(window);
        self.clipped()
    }

    /// Clip every segment against the current window.
    ///
    /// Returns an empty list if there is no window.
    #[must_use]
    pub fn clipped(&self) -> Vec<Segment> {
        let window = match self.window {
            Some(ref window) => window,
            None => return Vec::new(),
        };

        let clipped: Vec<Segment> = clip_all(self.segments.iter().copied(), window).collect();
        log::trace!(
            "{} of {} segments are visible through the window",
            clipped.len(),
            self.segments.len()
        );
        clipped
    }

    /// Clip a single stored segment against the current window.
    ///
    /// Returns `None` if the index is out of bounds, if there is no window, or if the segment is entirely
    /// outside of the window.
    #[must_use]
    pub fn clip_segment(&self, index: usize) -> Option<Segment> {
        let segment = *self.segments.get(index)?;
        clip(segment, self.window.as_ref()?)
    }

    /// Remove every segment and the clipping window.
    pub fn clear(&mut self) {
        log::debug!("Clearing {} segments", self.segments.len());
        self.segments.clear();
        self.window = None;
    }

    /// The number of segments in the scene.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the scene contains no segments.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
