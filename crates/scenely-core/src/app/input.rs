impl<DS, IN> SceneApp<DS, IN>
where
    DS: SceneSource,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("scene-input: provider error, dropping poll round");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Next => {
                let _ = self.next_scene(now_ms);
            }
            InputEvent::Previous => {
                let _ = self.previous_scene(now_ms);
            }
            InputEvent::First => {
                let _ = self.go_to(0, now_ms);
            }
            InputEvent::Last => {
                let total = self.deck.scene_count();
                if total > 0 {
                    let _ = self.go_to(total - 1, now_ms);
                }
            }
            InputEvent::SelectScene(index) => {
                let _ = self.go_to(index, now_ms);
            }
            InputEvent::StartJourney => {
                let _ = self.go_to(1, now_ms);
            }
            InputEvent::Replay => {
                let _ = self.go_to(0, now_ms);
            }
            InputEvent::TouchStart { x, y } => self.gesture.touch_start(x, y),
            InputEvent::TouchMove { x, y } => {
                self.gesture.touch_move(x, y);
            }
            InputEvent::TouchEnd { x, y } => {
                if let Some(direction) = self.gesture.touch_end(x, y) {
                    self.apply_swipe(direction, now_ms);
                }
            }
            InputEvent::ScrollChanged { offset } => self.apply_scroll_report(offset, now_ms),
            InputEvent::ViewportResized { width: _, height } => {
                self.viewport_height = i32::from(height);
                self.resettle_at = Some(now_ms + RESETTLE_DELAY_MS);
            }
        }
    }
}
