// MIT/Apache2 License

//! The state machine that turns pointer events into segments and clipping windows.
//!
//! A front-end forwards its press, drag and release events here, along with the [`Scene`] it is editing,
//! and renders whatever [`Response`] comes back. Geometry is only computed when a gesture completes: a
//! segment when its second point is pressed, and a window when the pointer is released.

use crate::{normalize, Error, Point, Rectangle, Result, Scene, Segment};

/// What the pointer currently draws.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Two presses define the endpoints of a new segment.
    Segment,
    /// Pressing, dragging and releasing defines the clipping window.
    Window,
}

impl Default for Mode {
    #[inline]
    fn default() -> Mode {
        Mode::Segment
    }
}

/// An event from the pointing device, in drawing-surface coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    /// The button was pressed at this point.
    Press(Point),
    /// The pointer moved to this point while the button was held.
    Drag(Point),
    /// The button was released at this point.
    Release(Point),
}

impl PointerEvent {
    /// The position this event happened at.
    #[inline]
    #[must_use]
    pub fn position(self) -> Point {
        match self {
            PointerEvent::Press(pt) | PointerEvent::Drag(pt) | PointerEvent::Release(pt) => pt,
        }
    }
}

/// The gesture that is currently in progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum State {
    /// Nothing is being drawn.
    Idle,
    /// The first endpoint of a segment has been placed.
    DrawingSegment { start: Point },
    /// A clipping window is being dragged out from `anchor`.
    DrawingWindow { anchor: Point, current: Point },
}

impl Default for State {
    #[inline]
    fn default() -> State {
        State::Idle
    }
}

/// What the front-end should show after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Nothing changed.
    Nothing,
    /// The first endpoint of a segment was placed.
    SegmentStarted(Point),
    /// A segment was completed and added to the scene.
    SegmentAdded(Segment),
    /// The window being dragged out now covers this rectangle.
    WindowPreview(Rectangle),
    /// The clipping window was finalized. `clipped` holds the visible part of every segment in the scene,
    /// in drawing order; it replaces any previously displayed clipping result.
    WindowClipped {
        window: Rectangle,
        clipped: Vec<Segment>,
    },
}

/// Drives a [`Scene`] from pointer events.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    mode: Mode,
    state: State,
}

impl Interaction {
    /// Create a new `Interaction` that starts out idle in the given mode.
    #[inline]
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            state: State::Idle,
        }
    }

    /// The current drawing mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The gesture currently in progress.
    #[inline]
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Switch to another drawing mode. Any gesture in progress is abandoned, even if the mode is the same.
    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("Switching to {:?} mode", mode);
        self.mode = mode;
        self.cancel();
    }

    /// Abandon the gesture in progress, if any.
    pub fn cancel(&mut self) {
        if self.state != State::Idle {
            log::trace!("Abandoning {:?}", self.state);
        }
        self.state = State::Idle;
    }

    /// Handle a pointer event, updating `scene` if it completes a segment or a window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinitePoint`] if the event's position is not finite, or
    /// [`Error::NoGestureInProgress`] if the pointer is released in window mode while no window is being
    /// drawn. The state is left untouched in both cases.
    pub fn handle(&mut self, scene: &mut Scene, event: PointerEvent) -> Result<Response> {
        let pt = event.position();
        if !(pt.x.is_finite() && pt.y.is_finite()) {
            log::warn!("Rejecting {:?}", event);
            return Err(Error::non_finite(pt));
        }

        match self.mode {
            Mode::Segment => Ok(self.handle_segment(scene, event)),
            Mode::Window => self.handle_window(scene, event),
        }
    }

    fn handle_segment(&mut self, scene: &mut Scene, event: PointerEvent) -> Response {
        let pt = match event {
            PointerEvent::Press(pt) => pt,
            _ => {
                log::trace!("Ignoring {:?} while drawing segments", event);
                return Response::Nothing;
            }
        };

        match self.state {
            State::DrawingSegment { start } => {
                let segment = Segment::new(start, pt);
                scene.add_segment(segment);
                self.state = State::Idle;
                Response::SegmentAdded(segment)
            }
            _ => {
                self.state = State::DrawingSegment { start: pt };
                Response::SegmentStarted(pt)
            }
        }
    }

    fn handle_window(&mut self, scene: &mut Scene, event: PointerEvent) -> Result<Response> {
        match (event, self.state) {
            (PointerEvent::Press(pt), _) => {
                self.state = State::DrawingWindow {
                    anchor: pt,
                    current: pt,
                };
                Ok(Response::Nothing)
            }
            (PointerEvent::Drag(pt), State::DrawingWindow { anchor, .. }) => {
                self.state = State::DrawingWindow {
                    anchor,
                    current: pt,
                };
                let preview = normalize(anchor, pt);
                log::trace!("Previewing window {:?} -> {:?}", preview.min(), preview.max());
                Ok(Response::WindowPreview(preview))
            }
            (PointerEvent::Drag(_), _) => {
                log::trace!("Ignoring drag with no window in progress");
                Ok(Response::Nothing)
            }
            (PointerEvent::Release(pt), State::DrawingWindow { anchor, .. }) => {
                let window = normalize(anchor, pt);
                let clipped = scene.set_window(window);
                self.state = State::Idle;
                Ok(Response::WindowClipped { window, clipped })
            }
            (PointerEvent::Release(_), _) => {
                log::warn!("Pointer released with no window in progress");
                Err(Error::NoGestureInProgress)
            }
        }
    }
}
