//! Screen layout shared by the renderer and mouse hit-testing.

/// Cell-grid rectangle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && col < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// Control under a mouse click.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Hit {
    Dot(u16),
    Prev,
    Next,
}

pub const PREV_LABEL: &str = "< Prev";
pub const NEXT_LABEL: &str = "Next >";

/// Chrome placement for a given terminal size and deck.
///
/// A pure function of its inputs, so the renderer and the input layer can
/// each compute it without sharing state.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub scene_count: u16,
    /// Progress rail row.
    pub rail_y: u16,
    /// Scene panel in paged flow.
    pub panel: Rect,
    /// Hint toast row.
    pub hint_y: u16,
    /// Dot row: one dot every other column starting at `dots_x0`.
    pub dots_y: u16,
    pub dots_x0: u16,
    pub prev: Rect,
    pub next: Rect,
}

impl Layout {
    pub fn compute(width: u16, height: u16, scene_count: u16) -> Self {
        let dots_width = scene_count.saturating_mul(2).saturating_sub(1);
        let dots_y = height.saturating_sub(2);
        let next_width = NEXT_LABEL.len() as u16;

        Self {
            width,
            height,
            scene_count,
            rail_y: 0,
            panel: Rect {
                x: 2,
                y: 2,
                width: width.saturating_sub(4),
                height: height.saturating_sub(6),
            },
            hint_y: height.saturating_sub(3),
            dots_y,
            dots_x0: width.saturating_sub(dots_width) / 2,
            prev: Rect {
                x: 1,
                y: dots_y,
                width: PREV_LABEL.len() as u16,
                height: 1,
            },
            next: Rect {
                x: width.saturating_sub(next_width.saturating_add(1)),
                y: dots_y,
                width: next_width,
                height: 1,
            },
        }
    }

    pub fn dot_x(&self, index: u16) -> u16 {
        self.dots_x0.saturating_add(index.saturating_mul(2))
    }

    pub fn hit_test(&self, col: u16, row: u16) -> Option<Hit> {
        if self.prev.contains(col, row) {
            return Some(Hit::Prev);
        }
        if self.next.contains(col, row) {
            return Some(Hit::Next);
        }

        if row == self.dots_y && col >= self.dots_x0 {
            let offset = col - self.dots_x0;
            if offset % 2 == 0 {
                let index = offset / 2;
                if index < self.scene_count {
                    return Some(Hit::Dot(index));
                }
            }
        }

        None
    }
}
