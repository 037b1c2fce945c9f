//! Scroll-position inference for scrolling-flow decks.
//!
//! In scrolling flow the platform owns the scroll position; the core only
//! reads it back. A scene becomes current for indicator purposes when it
//! crosses the central band of the viewport, and nothing here ever moves
//! the scroll position in return.

/// Vertical extent of one scene in content coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SceneExtent {
    pub top: i32,
    pub height: i32,
}

/// Viewport fraction excluded from the focus band on each side, leaving
/// the middle 20 %.
const BAND_MARGIN_PCT: i32 = 40;

/// First scene, in document order, whose extent crosses the central focus
/// band of the viewport.
pub fn scene_in_focus(
    extents: &[SceneExtent],
    viewport_height: i32,
    scroll_offset: i32,
) -> Option<u16> {
    if viewport_height <= 0 {
        return None;
    }

    let band_top = scroll_offset + viewport_height * BAND_MARGIN_PCT / 100;
    let band_bottom = scroll_offset + viewport_height * (100 - BAND_MARGIN_PCT) / 100;

    for (index, extent) in extents.iter().enumerate() {
        let top = extent.top;
        let bottom = extent.top + extent.height.max(0);
        if top < band_bottom && bottom > band_top {
            return Some(index.min(u16::MAX as usize) as u16);
        }
    }

    None
}
