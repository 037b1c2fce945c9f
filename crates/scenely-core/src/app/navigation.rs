impl<DS, IN> SceneApp<DS, IN>
where
    DS: SceneSource,
    IN: InputProvider,
{
    /// Move the presentation to `index`.
    ///
    /// Out-of-range indices are rejected without touching any state; the
    /// caller learns of it from the return value and nothing else. On
    /// success the target scene enters with a deferred activation, the
    /// auxiliary surfaces are resynced, and the fragment write is queued
    /// as a pure output for the platform to drain.
    pub fn go_to(&mut self, index: u16, now_ms: u64) -> bool {
        let total = self.deck.scene_count();
        if index >= total {
            debug!("scene-nav: rejected index={} total={}", index, total);
            return false;
        }

        let from = self.current;
        self.current = index;
        self.activate_at = Some(now_ms + SCENE_ACTIVATE_DELAY_MS);
        self.resync_surfaces();
        self.pending_fragment = Some(location::format_fragment(index));
        if self.config.flow == FlowMode::Scrolling {
            self.pending_scroll = Some(index);
        }
        self.reset_ticker(now_ms);
        self.pending_redraw = true;
        debug!("scene-nav: goto from={} to={} total={}", from, index, total);
        true
    }

    /// Advance one scene; a no-op on the last scene.
    pub fn next_scene(&mut self, now_ms: u64) -> bool {
        if self.current.saturating_add(1) >= self.deck.scene_count() {
            return false;
        }
        self.go_to(self.current + 1, now_ms)
    }

    /// Step back one scene; a no-op on the first scene.
    pub fn previous_scene(&mut self, now_ms: u64) -> bool {
        if self.current == 0 {
            return false;
        }
        self.go_to(self.current - 1, now_ms)
    }

    /// Restore position from a location fragment, falling back to scene 0
    /// for anything malformed or out of range.
    pub fn restore_from_location(&mut self, fragment: &str, now_ms: u64) {
        let target = location::parse_fragment(fragment)
            .filter(|index| *index < self.deck.scene_count())
            .unwrap_or(0);
        debug!("scene-nav: restore fragment={:?} target={}", fragment, target);
        let _ = self.go_to(target, now_ms);
    }

    /// External fragment change (back/forward navigation).
    ///
    /// The echo of a fragment this app just wrote parses to the current
    /// index and is ignored, which keeps write -> change -> write loops
    /// from forming.
    pub fn handle_location_change(&mut self, fragment: &str, now_ms: u64) {
        if location::parse_fragment(fragment) == Some(self.current) {
            return;
        }
        self.restore_from_location(fragment, now_ms);
    }

    fn apply_swipe(&mut self, direction: SwipeDirection, now_ms: u64) {
        let moved = match direction {
            SwipeDirection::Forward => self.next_scene(now_ms),
            SwipeDirection::Backward => self.previous_scene(now_ms),
        };
        if moved {
            self.feedback = Some((direction, now_ms));
        }
    }

    /// Read-only inference from a scroll report: the dot row follows the
    /// scroll position, never the other way around. No fragment write, no
    /// scroll request, no activation cycle.
    fn apply_scroll_report(&mut self, offset: i32, now_ms: u64) {
        if self.config.flow != FlowMode::Scrolling {
            return;
        }

        if let Some(index) = scroll::scene_in_focus(&self.extents, self.viewport_height, offset)
            && index != self.current
            && index < self.deck.scene_count()
        {
            self.current = index;
            self.resync_surfaces();
            self.reset_ticker(now_ms);
            self.pending_redraw = true;
            debug!("scene-scroll: focus index={} offset={}", index, offset);
        }
    }

    fn resync_surfaces(&mut self) {
        let total = self.deck.scene_count();
        self.sync.progress = progress_view(self.current, total);
        self.sync.active_dot = self.current;
        self.sync.controls = controls_view(self.current, total);
    }

    fn reset_ticker(&mut self, now_ms: u64) {
        self.ticker_slot = 0;
        self.next_ticker_at = (self.deck.ticker_count(self.current) > 1)
            .then(|| now_ms + TICKER_ROTATE_MS);
    }
}

fn progress_view(index: u16, total: u16) -> ProgressView {
    let rail_pct = if total > 1 {
        (index as u32 * 100 / (total as u32 - 1)).min(100) as u8
    } else {
        100
    };
    ProgressView {
        rail_pct,
        counter: (index.saturating_add(1), total),
    }
}

fn controls_view(index: u16, total: u16) -> ControlsView {
    ControlsView {
        prev_enabled: index > 0,
        next_enabled: index.saturating_add(1) < total,
    }
}
