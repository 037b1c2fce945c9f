//! Crossterm-backed input provider.
//!
//! Keyboard maps straight to logical navigation events. Mouse drags are
//! synthesized into the touch sequences the core's swipe recognizer
//! expects, plain clicks are hit-tested against the chrome layout, and the
//! wheel drives the scroll offset this layer owns in scrolling flow.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::trace;
use scenely_core::{
    input::{InputEvent, InputProvider},
    render::FlowMode,
    scroll::SceneExtent,
};

use crate::render::layout::{Hit, Layout};

/// Nominal cell size used to map the cell grid onto the pixel coordinates
/// the swipe recognizer thresholds are defined in.
const CELL_PX_W: i32 = 8;
const CELL_PX_H: i32 = 16;

/// Rows moved per wheel notch or arrow step in scrolling flow.
const SCROLL_STEP_ROWS: i32 = 2;

#[derive(Clone, Copy, Debug)]
struct DragState {
    origin: (u16, u16),
    moved: bool,
}

pub struct TermInput {
    scene_count: u16,
    flow: FlowMode,
    term_size: (u16, u16),
    scroll_offset: i32,
    drag: Option<DragState>,
    queue: VecDeque<InputEvent>,
    quit: bool,
}

impl TermInput {
    pub fn new(scene_count: u16, flow: FlowMode) -> io::Result<Self> {
        let term_size = crossterm::terminal::size()?;
        Ok(Self {
            scene_count,
            flow,
            term_size,
            scroll_offset: 0,
            drag: None,
            queue: VecDeque::new(),
            quit: false,
        })
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Viewport height in rows; one scene occupies one viewport in
    /// scrolling flow.
    pub fn viewport_rows(&self) -> i32 {
        i32::from(self.term_size.1)
    }

    /// Scene extents matching the scrolling-flow layout, in content rows.
    pub fn scene_extents(&self) -> Vec<SceneExtent> {
        let height = self.viewport_rows();
        (0..i32::from(self.scene_count))
            .map(|index| SceneExtent {
                top: index * height,
                height,
            })
            .collect()
    }

    /// Platform side of a scroll request: jump the offset to a scene and
    /// report the move back, the way a scrolled document fires a scroll
    /// event after a programmatic scroll.
    pub fn scroll_to_scene(&mut self, index: u16) {
        let target = i32::from(index.min(self.scene_count.saturating_sub(1))) * self.viewport_rows();
        self.scroll_offset = self.clamp_offset(target);
        self.queue.push_back(InputEvent::ScrollChanged {
            offset: self.scroll_offset,
        });
    }

    fn clamp_offset(&self, offset: i32) -> i32 {
        let max = (i32::from(self.scene_count) - 1).max(0) * self.viewport_rows();
        offset.clamp(0, max)
    }

    fn scroll_by(&mut self, rows: i32) {
        let next = self.clamp_offset(self.scroll_offset + rows);
        if next != self.scroll_offset {
            self.scroll_offset = next;
            self.queue.push_back(InputEvent::ScrollChanged { offset: next });
        }
    }

    fn translate(&mut self, raw: Event) {
        match raw {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.translate_key(key.code, key.modifiers)
            }
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            Event::Resize(width, height) => {
                self.term_size = (width, height);
                self.scroll_offset = self.clamp_offset(self.scroll_offset);
                self.queue
                    .push_back(InputEvent::ViewportResized { width, height });
            }
            _ => {}
        }
    }

    fn translate_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Left | KeyCode::PageUp => self.queue.push_back(InputEvent::Previous),
            KeyCode::Right | KeyCode::PageDown => self.queue.push_back(InputEvent::Next),
            KeyCode::Home => self.queue.push_back(InputEvent::First),
            KeyCode::End => self.queue.push_back(InputEvent::Last),
            KeyCode::Enter => self.queue.push_back(InputEvent::StartJourney),
            KeyCode::Char('r') => self.queue.push_back(InputEvent::Replay),
            KeyCode::Up if self.flow == FlowMode::Scrolling => self.scroll_by(-SCROLL_STEP_ROWS),
            KeyCode::Down if self.flow == FlowMode::Scrolling => self.scroll_by(SCROLL_STEP_ROWS),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as u16 - '1' as u16;
                self.queue.push_back(InputEvent::SelectScene(index));
            }
            _ => {}
        }
    }

    fn translate_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        let (x, y) = (i32::from(col) * CELL_PX_W, i32::from(row) * CELL_PX_H);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag = Some(DragState {
                    origin: (col, row),
                    moved: false,
                });
                self.queue.push_back(InputEvent::TouchStart { x, y });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = &mut self.drag
                    && drag.origin != (col, row)
                {
                    drag.moved = true;
                }
                self.queue.push_back(InputEvent::TouchMove { x, y });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.queue.push_back(InputEvent::TouchEnd { x, y });
                if let Some(drag) = self.drag.take()
                    && !drag.moved
                {
                    self.click(col, row);
                }
            }
            MouseEventKind::ScrollDown if self.flow == FlowMode::Scrolling => {
                self.scroll_by(SCROLL_STEP_ROWS)
            }
            MouseEventKind::ScrollUp if self.flow == FlowMode::Scrolling => {
                self.scroll_by(-SCROLL_STEP_ROWS)
            }
            _ => {}
        }
    }

    fn click(&mut self, col: u16, row: u16) {
        let layout = Layout::compute(self.term_size.0, self.term_size.1, self.scene_count);
        let Some(hit) = layout.hit_test(col, row) else {
            return;
        };
        trace!("term-input: click col={} row={} hit={:?}", col, row, hit);

        let event = match hit {
            Hit::Dot(index) => InputEvent::SelectScene(index),
            Hit::Prev => InputEvent::Previous,
            Hit::Next => InputEvent::Next,
        };
        self.queue.push_back(event);
    }
}

impl InputProvider for TermInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Ok(Some(event));
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(None);
            }
            let raw = event::read()?;
            self.translate(raw);
        }
    }
}
