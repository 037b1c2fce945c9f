impl<DS, IN> SceneApp<DS, IN>
where
    DS: SceneSource,
    IN: InputProvider,
{
    fn tick_deadlines(&mut self, now_ms: u64) -> TickResult {
        let mut render = self.pending_redraw;
        self.pending_redraw = false;

        if let Some(at) = self.activate_at
            && now_ms >= at
        {
            // Whatever index is current by now is the one that activates;
            // stale deadlines from superseded transitions are gone already
            // because the field is overwritten on every transition.
            self.activate_at = None;
            render = true;
        }

        if let Some(at) = self.resettle_at
            && now_ms >= at
        {
            self.resettle_at = None;
            self.resync_surfaces();
            if self.config.flow == FlowMode::Scrolling {
                self.pending_scroll = Some(self.current);
            }
            render = true;
        }

        if let Some(at) = self.next_ticker_at
            && now_ms >= at
        {
            let count = self.deck.ticker_count(self.current).max(1);
            self.ticker_slot = (self.ticker_slot + 1) % count;
            self.next_ticker_at = Some(at + TICKER_ROTATE_MS);
            render = true;
        }

        if let Some((_, shown_at)) = self.feedback {
            if now_ms.saturating_sub(shown_at) >= SWIPE_FEEDBACK_MS {
                self.feedback = None;
            }
            render = true;
        }

        let overlay = self.loading_view(now_ms);
        if overlay != self.last_overlay {
            self.last_overlay = overlay;
            render = true;
        }

        let hint = self.hint_visible(now_ms);
        if hint != self.last_hint_visible {
            self.last_hint_visible = hint;
            render = true;
        }

        if render {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.epoch_ms.unwrap_or(now_ms))
    }

    fn loading_view(&self, now_ms: u64) -> Option<LoadingOverlay> {
        if !self.config.show_loading {
            return None;
        }

        let elapsed = self.elapsed_ms(now_ms);
        if elapsed < LOADING_SOLID_MS {
            return Some(LoadingOverlay::Solid);
        }

        let fade = elapsed - LOADING_SOLID_MS;
        if fade < LOADING_FADE_MS {
            return Some(LoadingOverlay::Fading {
                progress_pct: (fade * 100 / LOADING_FADE_MS).min(100) as u8,
            });
        }

        None
    }

    fn hint_visible(&self, now_ms: u64) -> bool {
        self.config.show_hint && self.elapsed_ms(now_ms) % HINT_PERIOD_MS < HINT_VISIBLE_MS
    }

    fn feedback_view(&self, now_ms: u64) -> Option<SwipeFeedback> {
        self.feedback.map(|(direction, shown_at)| SwipeFeedback {
            direction,
            progress_pct: (now_ms.saturating_sub(shown_at) * 100 / SWIPE_FEEDBACK_MS).min(100)
                as u8,
        })
    }

    fn scene_phase(&self) -> ScenePhase {
        if self.activate_at.is_some() {
            ScenePhase::Entering
        } else {
            ScenePhase::Active
        }
    }
}
