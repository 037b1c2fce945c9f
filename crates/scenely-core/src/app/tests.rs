use super::*;
use crate::{
    deck::{StaticDeck, StaticScene},
    render::{FlowMode, LoadingOverlay, ScenePhase},
    scroll::SceneExtent,
};

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

const SCENES: [StaticScene<'static>; 13] = [StaticScene::new("Scene", "Body"); 13];

const TICKER_ITEMS: [&str; 3] = ["first", "second", "third"];
const TICKER_SCENES: [StaticScene<'static>; 3] = [
    StaticScene::new("Opening", "Body"),
    StaticScene::new("Newsroom", "Body").with_ticker(&TICKER_ITEMS),
    StaticScene::new("Closing", "Body"),
];

const STACK_SCENES: [StaticScene<'static>; 4] = [StaticScene::new("Scene", "Body"); 4];

fn make_app<'a>(
    events: &'a [InputEvent],
    config: FlowConfig,
) -> SceneApp<StaticDeck<'static>, ScriptedInput<'a>> {
    SceneApp::new(
        StaticDeck::new(&SCENES),
        ScriptedInput::new(events),
        config,
        "Test",
    )
}

fn frame_snapshot<DS, IN>(app: &SceneApp<DS, IN>, now_ms: u64) -> (u16, u16, ScenePhase)
where
    DS: SceneSource,
    IN: InputProvider,
{
    let mut snapshot = (0, 0, ScenePhase::Active);
    app.with_frame(now_ms, |frame| {
        snapshot = (frame.scene_index, frame.active_dot, frame.phase);
    });
    snapshot
}

#[test]
fn goto_updates_index_and_queues_one_fragment() {
    let mut app = make_app(&[], FlowConfig::default());

    assert!(app.go_to(4, 0));
    assert_eq!(app.current_scene(), 4);

    let fragment = app.take_fragment_write().expect("fragment queued");
    assert_eq!(fragment.as_str(), "scene-4");
    assert_eq!(app.take_fragment_write(), None);
}

#[test]
fn goto_out_of_range_changes_nothing() {
    let mut app = make_app(&[], FlowConfig::default());

    assert!(!app.go_to(13, 0));
    assert!(!app.go_to(u16::MAX, 0));
    assert_eq!(app.current_scene(), 0);
    assert_eq!(app.take_fragment_write(), None);
}

#[test]
fn stepping_stops_at_the_deck_boundaries() {
    let mut app = make_app(&[], FlowConfig::default());

    assert!(!app.previous_scene(0));
    assert_eq!(app.current_scene(), 0);

    assert!(app.go_to(12, 0));
    let _ = app.take_fragment_write();

    assert!(!app.next_scene(10));
    assert_eq!(app.current_scene(), 12);
    assert_eq!(app.take_fragment_write(), None);
}

#[test]
fn restore_accepts_valid_fragments_and_falls_back_to_zero() {
    let mut app = make_app(&[], FlowConfig::default());

    app.restore_from_location("scene-5", 0);
    assert_eq!(app.current_scene(), 5);

    app.restore_from_location("scene-99", 0);
    assert_eq!(app.current_scene(), 0);

    app.restore_from_location("#scene-3", 0);
    assert_eq!(app.current_scene(), 3);

    app.restore_from_location("garbage", 0);
    assert_eq!(app.current_scene(), 0);
}

#[test]
fn own_fragment_echo_does_not_retrigger_navigation() {
    let mut app = make_app(&[], FlowConfig::default());

    assert!(app.go_to(5, 0));
    let fragment = app.take_fragment_write().expect("fragment queued");

    app.handle_location_change(&fragment, 10);
    assert_eq!(app.current_scene(), 5);
    assert_eq!(app.take_fragment_write(), None);

    app.handle_location_change("scene-2", 20);
    assert_eq!(app.current_scene(), 2);
    assert_eq!(app.take_fragment_write().unwrap().as_str(), "scene-2");
}

#[test]
fn long_swipe_advances_exactly_one_scene() {
    let events = [
        InputEvent::TouchStart { x: 200, y: 40 },
        InputEvent::TouchEnd { x: 120, y: 44 },
    ];
    let mut app = make_app(&events, FlowConfig::default());
    assert!(app.go_to(3, 0));
    let _ = app.take_fragment_write();

    let _ = app.tick(10);

    assert_eq!(app.current_scene(), 4);
    let mut feedback = None;
    app.with_frame(10, |frame| feedback = frame.feedback);
    assert!(feedback.is_some());
}

#[test]
fn short_swipe_is_ignored() {
    let events = [
        InputEvent::TouchStart { x: 200, y: 40 },
        InputEvent::TouchEnd { x: 170, y: 40 },
    ];
    let mut app = make_app(&events, FlowConfig::default());
    assert!(app.go_to(3, 0));
    let _ = app.take_fragment_write();

    let _ = app.tick(10);

    assert_eq!(app.current_scene(), 3);
    assert_eq!(app.take_fragment_write(), None);
}

#[test]
fn swipe_at_the_last_scene_moves_nothing_and_shows_no_feedback() {
    let events = [
        InputEvent::TouchStart { x: 200, y: 40 },
        InputEvent::TouchEnd { x: 100, y: 40 },
    ];
    let mut app = make_app(&events, FlowConfig::default());
    assert!(app.go_to(12, 0));
    let _ = app.take_fragment_write();

    let _ = app.tick(10);

    assert_eq!(app.current_scene(), 12);
    let mut feedback = None;
    app.with_frame(10, |frame| feedback = frame.feedback);
    assert_eq!(feedback, None);
}

#[test]
fn controls_follow_the_deck_boundaries() {
    let mut app = make_app(&[], FlowConfig::default());

    let mut controls = None;
    app.with_frame(0, |frame| controls = Some(frame.controls));
    let controls = controls.unwrap();
    assert!(!controls.prev_enabled);
    assert!(controls.next_enabled);

    assert!(app.go_to(12, 0));
    let mut controls = None;
    app.with_frame(0, |frame| controls = Some(frame.controls));
    let controls = controls.unwrap();
    assert!(controls.prev_enabled);
    assert!(!controls.next_enabled);
}

#[test]
fn surface_recompute_is_idempotent() {
    assert_eq!(progress_view(6, 13), progress_view(6, 13));
    assert_eq!(controls_view(6, 13), controls_view(6, 13));

    let mut app = make_app(&[], FlowConfig::default());
    assert!(app.go_to(6, 0));

    let first = frame_snapshot(&app, 100);
    let second = frame_snapshot(&app, 100);
    assert_eq!(first, second);
}

#[test]
fn progress_rail_is_empty_first_and_full_last() {
    assert_eq!(progress_view(0, 13).rail_pct, 0);
    assert_eq!(progress_view(6, 13).rail_pct, 50);
    assert_eq!(progress_view(12, 13).rail_pct, 100);
    assert_eq!(progress_view(6, 13).counter, (7, 13));
    assert_eq!(progress_view(0, 1).rail_pct, 100);
}

#[test]
fn activation_is_deferred_and_last_transition_wins() {
    let mut app = make_app(&[], FlowConfig::default());
    let _ = app.tick(1_000);

    assert!(app.go_to(2, 1_000));
    assert!(app.go_to(3, 1_020));

    let _ = app.tick(1_055);
    let (index, dot, phase) = frame_snapshot(&app, 1_055);
    assert_eq!((index, dot), (3, 3));
    assert_eq!(phase, ScenePhase::Entering);

    let _ = app.tick(1_075);
    let (index, dot, phase) = frame_snapshot(&app, 1_075);
    assert_eq!((index, dot), (3, 3));
    assert_eq!(phase, ScenePhase::Active);
}

#[test]
fn dot_selection_and_journey_shortcuts_route_through_goto() {
    let events = [InputEvent::SelectScene(7)];
    let mut app = make_app(&events, FlowConfig::default());
    let _ = app.tick(0);
    assert_eq!(app.current_scene(), 7);

    let events = [InputEvent::StartJourney];
    let mut app = make_app(&events, FlowConfig::default());
    let _ = app.tick(0);
    assert_eq!(app.current_scene(), 1);

    let events = [InputEvent::Replay];
    let mut app = make_app(&events, FlowConfig::default());
    assert!(app.go_to(9, 0));
    let _ = app.tick(10);
    assert_eq!(app.current_scene(), 0);
}

#[test]
fn keyboard_first_and_last_jump_to_the_deck_edges() {
    let events = [InputEvent::Last, InputEvent::First];
    let mut app = make_app(&events, FlowConfig::default());

    // Both events land in one poll round; the later one wins.
    let _ = app.tick(0);
    assert_eq!(app.current_scene(), 0);

    let events = [InputEvent::Last];
    let mut app = make_app(&events, FlowConfig::default());
    let _ = app.tick(0);
    assert_eq!(app.current_scene(), 12);
}

#[test]
fn scrolling_flow_queues_scroll_requests_instead_of_flipping_panels() {
    let config = FlowConfig {
        flow: FlowMode::Scrolling,
        ..FlowConfig::default()
    };
    let mut app = SceneApp::new(
        StaticDeck::new(&STACK_SCENES),
        ScriptedInput::new(&[]),
        config,
        "Test",
    );

    assert!(app.go_to(2, 0));
    assert_eq!(app.take_scroll_request(), Some(2));
    assert_eq!(app.take_fragment_write().unwrap().as_str(), "scene-2");
}

#[test]
fn scroll_reports_drive_the_indicator_only() {
    let config = FlowConfig {
        flow: FlowMode::Scrolling,
        ..FlowConfig::default()
    };
    let events = [InputEvent::ScrollChanged { offset: 300 }];
    let mut app = SceneApp::new(
        StaticDeck::new(&STACK_SCENES),
        ScriptedInput::new(&events),
        config,
        "Test",
    );
    app.set_viewport_height(100);
    app.set_scene_extents(&[
        SceneExtent { top: 0, height: 100 },
        SceneExtent {
            top: 100,
            height: 100,
        },
        SceneExtent {
            top: 200,
            height: 100,
        },
        SceneExtent {
            top: 300,
            height: 100,
        },
    ]);

    let _ = app.tick(0);

    assert_eq!(app.current_scene(), 3);
    let (index, dot, _) = frame_snapshot(&app, 0);
    assert_eq!((index, dot), (3, 3));
    assert_eq!(app.take_fragment_write(), None);
    assert_eq!(app.take_scroll_request(), None);
}

#[test]
fn resize_resettles_the_scroll_position_after_a_delay() {
    let config = FlowConfig {
        flow: FlowMode::Scrolling,
        ..FlowConfig::default()
    };
    let events = [InputEvent::ViewportResized {
        width: 80,
        height: 50,
    }];
    let mut app = SceneApp::new(
        StaticDeck::new(&STACK_SCENES),
        ScriptedInput::new(&events),
        config,
        "Test",
    );
    assert!(app.go_to(2, 0));
    let _ = app.take_scroll_request();

    let _ = app.tick(1_000);
    assert_eq!(app.take_scroll_request(), None);

    let _ = app.tick(1_250);
    assert_eq!(app.take_scroll_request(), None);

    let _ = app.tick(1_350);
    assert_eq!(app.take_scroll_request(), Some(2));
}

#[test]
fn ticker_rotates_while_its_scene_is_current() {
    let mut app = SceneApp::new(
        StaticDeck::new(&TICKER_SCENES),
        ScriptedInput::new(&[]),
        FlowConfig::default(),
        "Test",
    );
    let _ = app.tick(0);
    assert!(app.go_to(1, 0));

    let mut line = None;
    app.with_frame(0, |frame| line = frame.ticker_line.map(str::to_owned));
    assert_eq!(line.as_deref(), Some("first"));

    let _ = app.tick(3_000);
    let mut line = None;
    app.with_frame(3_000, |frame| line = frame.ticker_line.map(str::to_owned));
    assert_eq!(line.as_deref(), Some("second"));

    let _ = app.tick(6_100);
    let mut line = None;
    app.with_frame(6_100, |frame| line = frame.ticker_line.map(str::to_owned));
    assert_eq!(line.as_deref(), Some("third"));

    let _ = app.tick(9_100);
    let mut line = None;
    app.with_frame(9_100, |frame| line = frame.ticker_line.map(str::to_owned));
    assert_eq!(line.as_deref(), Some("first"));
}

#[test]
fn loading_overlay_runs_solid_then_fades_then_disappears() {
    let mut app = make_app(&[], FlowConfig::default());
    let _ = app.tick(0);

    let mut overlay = None;
    app.with_frame(0, |frame| overlay = frame.loading);
    assert_eq!(overlay, Some(LoadingOverlay::Solid));

    let mut overlay = None;
    app.with_frame(2_600, |frame| overlay = frame.loading);
    assert!(matches!(overlay, Some(LoadingOverlay::Fading { .. })));

    let mut overlay = None;
    app.with_frame(3_100, |frame| overlay = frame.loading);
    assert_eq!(overlay, None);
}

#[test]
fn hint_windows_follow_the_free_running_cycle() {
    let config = FlowConfig {
        show_hint: true,
        ..FlowConfig::default()
    };
    let mut app = make_app(&[], config);
    let _ = app.tick(0);

    let mut visible = false;
    app.with_frame(1_000, |frame| visible = frame.hint_visible);
    assert!(visible);

    app.with_frame(5_000, |frame| visible = frame.hint_visible);
    assert!(!visible);

    app.with_frame(10_500, |frame| visible = frame.hint_visible);
    assert!(visible);
}
