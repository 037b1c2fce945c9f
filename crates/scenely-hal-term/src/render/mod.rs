//! Frame renderer over crossterm.

pub mod layout;

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use scenely_core::{
    deck::SceneSource,
    gesture::SwipeDirection,
    render::{FlowMode, Frame, LoadingOverlay, ScenePhase},
};
use unicode_width::UnicodeWidthStr;

use self::layout::{Layout, NEXT_LABEL, PREV_LABEL};

const RAIL_FILLED: &str = "=";
const RAIL_EMPTY: &str = "-";
const DOT_ACTIVE: &str = "*";
const DOT_IDLE: &str = "o";
const HINT_TEXT: &str = "< swipe or use arrow keys to navigate >";

pub struct TermRenderer {
    out: Stdout,
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    pub fn draw<DS>(&mut self, frame: &Frame<'_>, deck: &DS, scroll_offset: i32) -> io::Result<()>
    where
        DS: SceneSource,
    {
        let (width, height) = crossterm::terminal::size()?;
        let layout = Layout::compute(width, height, frame.scene_count);

        queue!(self.out, Clear(ClearType::All))?;

        if let Some(overlay) = frame.loading {
            self.draw_loading(&layout, frame, overlay)?;
            return self.out.flush();
        }

        match frame.flow {
            FlowMode::Paged => self.draw_paged(&layout, frame)?,
            FlowMode::Scrolling => self.draw_scrolling(&layout, frame, deck, scroll_offset)?,
        }
        self.draw_chrome(&layout, frame)?;

        self.out.flush()
    }

    fn draw_loading(
        &mut self,
        layout: &Layout,
        frame: &Frame<'_>,
        overlay: LoadingOverlay,
    ) -> io::Result<()> {
        let mid = layout.height / 2;
        self.print_centered(mid.saturating_sub(1), layout.width, frame.deck_title)?;

        let notice = match overlay {
            LoadingOverlay::Solid => "loading...",
            LoadingOverlay::Fading { .. } => "loading... done",
        };
        self.print_centered(mid.saturating_add(1), layout.width, notice)
    }

    fn draw_paged(&mut self, layout: &Layout, frame: &Frame<'_>) -> io::Result<()> {
        let panel = layout.panel;
        if panel.width < 4 || panel.height < 4 {
            return Ok(());
        }

        // The title stays dim until the activation deadline marks the
        // scene as fully entered.
        match frame.phase {
            ScenePhase::Entering => queue!(self.out, SetAttribute(Attribute::Dim))?,
            ScenePhase::Active => queue!(self.out, SetAttribute(Attribute::Bold))?,
        }
        self.print_centered(panel.y, layout.width, frame.scene_title)?;
        queue!(self.out, SetAttribute(Attribute::Reset))?;

        let text_width = usize::from(panel.width);
        let mut row = panel.y + 2;
        let last_row = panel.y + panel.height.saturating_sub(1);
        'body: for paragraph in frame.scene_body.lines() {
            for line in wrap(paragraph, text_width) {
                if row > last_row {
                    break 'body;
                }
                queue!(self.out, MoveTo(panel.x, row), Print(line))?;
                row += 1;
            }
            row += 1;
        }

        if let Some(ticker) = frame.ticker_line {
            let mut line = String::from("> ");
            line.push_str(ticker);
            queue!(
                self.out,
                MoveTo(panel.x, last_row),
                SetAttribute(Attribute::Reverse),
                Print(line),
                SetAttribute(Attribute::Reset)
            )?;
        }

        Ok(())
    }

    fn draw_scrolling<DS>(
        &mut self,
        layout: &Layout,
        frame: &Frame<'_>,
        deck: &DS,
        scroll_offset: i32,
    ) -> io::Result<()>
    where
        DS: SceneSource,
    {
        let viewport = i32::from(layout.height);
        let visible_rows = i32::from(layout.height.saturating_sub(3));
        let text_width = usize::from(layout.width.saturating_sub(4));

        for index in 0..frame.scene_count {
            let top = i32::from(index) * viewport - scroll_offset;
            if top >= visible_rows || top + viewport <= 0 {
                continue;
            }

            let title = deck.title_at(index).unwrap_or("Untitled");
            let attribute = if index == frame.scene_index {
                Attribute::Bold
            } else {
                Attribute::Dim
            };
            let mut row = top;
            if (0..visible_rows).contains(&row) {
                queue!(
                    self.out,
                    MoveTo(2, row as u16),
                    SetAttribute(attribute),
                    Print(title),
                    SetAttribute(Attribute::Reset)
                )?;
            }
            row += 2;

            let body = deck.body_at(index).unwrap_or("");
            'body: for paragraph in body.lines() {
                for line in wrap(paragraph, text_width) {
                    if row >= top + viewport {
                        break 'body;
                    }
                    if (0..visible_rows).contains(&row) {
                        queue!(self.out, MoveTo(2, row as u16), Print(line))?;
                    }
                    row += 1;
                }
                row += 1;
            }
        }

        Ok(())
    }

    fn draw_chrome(&mut self, layout: &Layout, frame: &Frame<'_>) -> io::Result<()> {
        // Progress rail, leaving room for the counter on the right.
        let counter = format!("{} / {}", frame.progress.counter.0, frame.progress.counter.1);
        let counter_width = counter.width() as u16;
        let rail_width = layout.width.saturating_sub(counter_width + 3);
        let filled = u16::from(frame.progress.rail_pct).saturating_mul(rail_width) / 100;
        let mut rail = RAIL_FILLED.repeat(usize::from(filled));
        rail.push_str(&RAIL_EMPTY.repeat(usize::from(rail_width.saturating_sub(filled))));
        queue!(self.out, MoveTo(0, layout.rail_y), Print(rail))?;
        queue!(
            self.out,
            MoveTo(layout.width.saturating_sub(counter_width + 1), layout.rail_y),
            Print(counter)
        )?;

        // Dot row.
        for index in 0..layout.scene_count {
            let dot = if index == frame.active_dot {
                DOT_ACTIVE
            } else {
                DOT_IDLE
            };
            queue!(self.out, MoveTo(layout.dot_x(index), layout.dots_y), Print(dot))?;
        }

        // Prev/next controls, dimmed at the deck boundaries.
        self.print_control(layout.prev.x, layout.dots_y, PREV_LABEL, frame.controls.prev_enabled)?;
        self.print_control(layout.next.x, layout.dots_y, NEXT_LABEL, frame.controls.next_enabled)?;

        if frame.hint_visible {
            self.print_centered(layout.hint_y, layout.width, HINT_TEXT)?;
        }

        if let Some(feedback) = frame.feedback {
            let mid = layout.height / 2;
            match feedback.direction {
                SwipeDirection::Forward => {
                    queue!(
                        self.out,
                        MoveTo(layout.width.saturating_sub(2), mid),
                        Print(">")
                    )?;
                }
                SwipeDirection::Backward => {
                    queue!(self.out, MoveTo(1, mid), Print("<"))?;
                }
            }
        }

        Ok(())
    }

    fn print_control(&mut self, x: u16, y: u16, label: &str, enabled: bool) -> io::Result<()> {
        if enabled {
            queue!(self.out, MoveTo(x, y), Print(label))
        } else {
            queue!(
                self.out,
                MoveTo(x, y),
                SetAttribute(Attribute::Dim),
                Print(label),
                SetAttribute(Attribute::Reset)
            )
        }
    }

    fn print_centered(&mut self, y: u16, width: u16, text: &str) -> io::Result<()> {
        let x = width.saturating_sub(text.width() as u16) / 2;
        queue!(self.out, MoveTo(x, y), Print(text))
    }
}

/// Greedy word wrap by display width. Words wider than the line are kept
/// whole and overflow.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut line = String::new();
    let mut line_width = 0usize;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(core::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
