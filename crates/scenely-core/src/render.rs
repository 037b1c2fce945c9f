//! App-level view models consumed by the platform renderer.

use crate::gesture::SwipeDirection;

/// How scenes are laid out and traversed: one visible panel at a time, or
/// a vertically scrollable stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlowMode {
    Paged,
    Scrolling,
}

/// Presentation state of the current scene.
///
/// `Entering` covers the short window between a transition and its
/// activation deadline, so a platform transition effect can engage before
/// the scene is styled as active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScenePhase {
    Entering,
    Active,
}

/// Progress through the deck.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressView {
    /// 0..=100, empty on the first scene and full on the last.
    pub rail_pct: u8,
    /// 1-based position label, `current / total`.
    pub counter: (u16, u16),
}

/// Prev/next control enablement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlsView {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Transient badge shown on the edge that triggered a swipe.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwipeFeedback {
    pub direction: SwipeDirection,
    /// 0..=100
    pub progress_pct: u8,
}

/// Loading overlay shown while the presentation settles in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadingOverlay {
    Solid,
    Fading {
        /// 0..=100
        progress_pct: u8,
    },
}

/// One rendered frame of the presentation.
pub struct Frame<'a> {
    pub deck_title: &'a str,
    pub flow: FlowMode,
    pub scene_index: u16,
    pub scene_count: u16,
    pub scene_title: &'a str,
    pub scene_body: &'a str,
    pub phase: ScenePhase,
    pub progress: ProgressView,
    /// Index of the single highlighted indicator dot.
    pub active_dot: u16,
    pub controls: ControlsView,
    /// Currently visible ticker item of the scene, when it carries any.
    pub ticker_line: Option<&'a str>,
    pub hint_visible: bool,
    pub feedback: Option<SwipeFeedback>,
    pub loading: Option<LoadingOverlay>,
}
