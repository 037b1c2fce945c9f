impl<DS, IN> SceneApp<DS, IN>
where
    DS: SceneSource,
    IN: InputProvider,
{
    pub fn new(deck: DS, input: IN, config: FlowConfig, deck_title: &'static str) -> Self {
        let axis = match config.flow {
            FlowMode::Paged => SwipeAxis::Horizontal,
            FlowMode::Scrolling => SwipeAxis::Vertical,
        };

        let mut app = Self {
            deck,
            input,
            config,
            deck_title,
            current: 0,
            activate_at: None,
            sync: SyncState {
                progress: ProgressView {
                    rail_pct: 0,
                    counter: (1, 0),
                },
                active_dot: 0,
                controls: ControlsView {
                    prev_enabled: false,
                    next_enabled: false,
                },
            },
            pending_fragment: None,
            pending_scroll: None,
            gesture: GestureRecognizer::new(axis),
            feedback: None,
            epoch_ms: None,
            viewport_height: 0,
            extents: Vec::new(),
            ticker_slot: 0,
            next_ticker_at: None,
            resettle_at: None,
            pending_redraw: true,
            last_overlay: None,
            last_hint_visible: false,
        };
        app.resync_surfaces();
        app
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.epoch_ms.is_none() {
            self.epoch_ms = Some(now_ms);
        }
        self.process_inputs(now_ms);
        self.tick_deadlines(now_ms)
    }

    pub fn with_frame<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Frame<'_>),
    {
        let index = self.current;
        f(Frame {
            deck_title: self.deck_title,
            flow: self.config.flow,
            scene_index: index,
            scene_count: self.deck.scene_count(),
            scene_title: self.deck.title_at(index).unwrap_or("Untitled"),
            scene_body: self.deck.body_at(index).unwrap_or(""),
            phase: self.scene_phase(),
            progress: self.sync.progress,
            active_dot: self.sync.active_dot,
            controls: self.sync.controls,
            ticker_line: self.deck.ticker_at(index, self.ticker_slot),
            hint_visible: self.hint_visible(now_ms),
            feedback: self.feedback_view(now_ms),
            loading: self.loading_view(now_ms),
        });
    }

    pub fn current_scene(&self) -> u16 {
        self.current
    }

    pub fn deck(&self) -> &DS {
        &self.deck
    }

    pub fn input(&self) -> &IN {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    /// Fragment queued by the last successful transition, if any.
    ///
    /// Draining is what makes the write a pure output: the platform
    /// applies it to the address surface, and an echo coming back through
    /// [`Self::handle_location_change`] is recognized and dropped there.
    pub fn take_fragment_write(&mut self) -> Option<FragmentBuf> {
        self.pending_fragment.take()
    }

    /// Scroll target queued by dot presses and swipes in scrolling flow.
    pub fn take_scroll_request(&mut self) -> Option<u16> {
        self.pending_scroll.take()
    }

    /// Per-scene vertical extents, in the same content coordinates the
    /// platform reports scroll offsets in. Extents beyond the deck or
    /// [`MAX_SCENES`] are ignored.
    pub fn set_scene_extents(&mut self, extents: &[SceneExtent]) {
        self.extents.clear();
        let keep = extents
            .len()
            .min(self.deck.scene_count() as usize)
            .min(MAX_SCENES);
        let _ = self.extents.extend_from_slice(&extents[..keep]);
    }

    pub fn set_viewport_height(&mut self, rows: i32) {
        self.viewport_height = rows;
    }
}
