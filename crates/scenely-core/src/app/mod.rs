//! Application state machine for the scene-stepping presentation.
//!
//! Every entry surface (buttons, keys, swipes, dots, fragment changes,
//! scroll reports) funnels into the one transition authority here, so the
//! visible scene, the indicator row, the controls, and the queued fragment
//! can never disagree.

use heapless::Vec;
use log::{debug, warn};

use crate::{
    deck::SceneSource,
    gesture::{GestureRecognizer, SwipeAxis, SwipeDirection},
    input::{InputEvent, InputProvider},
    location::{self, FragmentBuf},
    render::{
        ControlsView, FlowMode, Frame, LoadingOverlay, ProgressView, ScenePhase, SwipeFeedback,
    },
    scroll::{self, SceneExtent},
};

/// Upper bound on the deck size the app tracks scroll extents for.
pub const MAX_SCENES: usize = 64;

const SCENE_ACTIVATE_DELAY_MS: u64 = 50;
const LOADING_SOLID_MS: u64 = 2_500;
const LOADING_FADE_MS: u64 = 500;
const HINT_PERIOD_MS: u64 = 10_000;
const HINT_VISIBLE_MS: u64 = 3_000;
const TICKER_ROTATE_MS: u64 = 3_000;
const SWIPE_FEEDBACK_MS: u64 = 500;
const RESETTLE_DELAY_MS: u64 = 300;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Presentation tuning knobs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlowConfig {
    pub flow: FlowMode,
    pub show_hint: bool,
    pub show_loading: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            flow: FlowMode::Paged,
            show_hint: false,
            show_loading: true,
        }
    }
}

/// Surface state recomputed on every transition, in a fixed order:
/// progress first, then the dot row, then the prev/next controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct SyncState {
    progress: ProgressView,
    active_dot: u16,
    controls: ControlsView,
}

pub struct SceneApp<DS, IN>
where
    DS: SceneSource,
    IN: InputProvider,
{
    deck: DS,
    input: IN,
    config: FlowConfig,
    deck_title: &'static str,
    current: u16,
    activate_at: Option<u64>,
    sync: SyncState,
    pending_fragment: Option<FragmentBuf>,
    pending_scroll: Option<u16>,
    gesture: GestureRecognizer,
    feedback: Option<(SwipeDirection, u64)>,
    epoch_ms: Option<u64>,
    viewport_height: i32,
    extents: Vec<SceneExtent, MAX_SCENES>,
    ticker_slot: u16,
    next_ticker_at: Option<u64>,
    resettle_at: Option<u64>,
    pending_redraw: bool,
    last_overlay: Option<LoadingOverlay>,
    last_hint_visible: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
