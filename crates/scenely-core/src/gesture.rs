//! Swipe recognition over raw touch coordinates.

/// Minimum travel along the tracked axis for a motion to count as a swipe.
pub const SWIPE_THRESHOLD_PX: i32 = 50;

/// Travel along the tracked axis before an in-flight motion should be
/// captured away from the platform's own scrolling.
const CAPTURE_SLOP_PX: i32 = 10;

/// Axis a recognizer tracks: horizontal for paged flow, vertical for
/// scrolling flow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeAxis {
    Horizontal,
    Vertical,
}

/// Travel direction of a completed swipe, in deck order.
///
/// `Forward` is a swipe toward the next scene: leftward on the horizontal
/// axis, upward on the vertical one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeDirection {
    Forward,
    Backward,
}

/// One-shot recognizer for a single in-flight touch.
///
/// `touch_end` consumes the gesture origin, so one completed gesture
/// yields at most one direction no matter how often the platform reports
/// the release.
#[derive(Clone, Copy, Debug)]
pub struct GestureRecognizer {
    axis: SwipeAxis,
    origin: Option<(i32, i32)>,
}

impl GestureRecognizer {
    pub const fn new(axis: SwipeAxis) -> Self {
        Self { axis, origin: None }
    }

    pub const fn axis(&self) -> SwipeAxis {
        self.axis
    }

    pub fn touch_start(&mut self, x: i32, y: i32) {
        self.origin = Some((x, y));
    }

    /// Report whether an in-flight sample is already dominantly along the
    /// tracked axis, in which case the platform should stop treating the
    /// motion as a scroll or tap.
    pub fn touch_move(&mut self, x: i32, y: i32) -> bool {
        let Some((ox, oy)) = self.origin else {
            return false;
        };

        let (along, cross) = self.split(ox - x, oy - y);
        along.abs() > cross.abs() && along.abs() > CAPTURE_SLOP_PX
    }

    /// Complete the gesture, yielding at most one swipe direction.
    ///
    /// Motions below [`SWIPE_THRESHOLD_PX`] or dominated by the cross
    /// axis are taps or scrolls and yield `None`.
    pub fn touch_end(&mut self, x: i32, y: i32) -> Option<SwipeDirection> {
        let (ox, oy) = self.origin.take()?;

        let (along, cross) = self.split(ox - x, oy - y);
        if along.abs() > SWIPE_THRESHOLD_PX && along.abs() > cross.abs() {
            if along > 0 {
                Some(SwipeDirection::Forward)
            } else {
                Some(SwipeDirection::Backward)
            }
        } else {
            None
        }
    }

    /// Abandon the in-flight gesture without emitting anything.
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    fn split(&self, dx: i32, dy: i32) -> (i32, i32) {
        match self.axis {
            SwipeAxis::Horizontal => (dx, dy),
            SwipeAxis::Vertical => (dy, dx),
        }
    }
}
