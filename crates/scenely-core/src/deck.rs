//! Scene decks: fixed, ordered collections of presentation scenes.

/// Read-only, index-addressed deck of scenes.
///
/// A deck is fixed at construction; scenes are never added or removed
/// while the presentation runs.
pub trait SceneSource {
    /// Number of scenes in the deck.
    fn scene_count(&self) -> u16;

    /// Scene title by zero-based index.
    fn title_at(&self, index: u16) -> Option<&str>;

    /// Scene body text by zero-based index.
    fn body_at(&self, index: u16) -> Option<&str>;

    /// Number of rotating ticker items carried by a scene.
    fn ticker_count(&self, _index: u16) -> u16 {
        0
    }

    /// Ticker item by scene index and slot.
    fn ticker_at(&self, _index: u16, _slot: u16) -> Option<&str> {
        None
    }
}

/// One scene of a [`StaticDeck`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StaticScene<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub ticker: &'a [&'a str],
}

impl<'a> StaticScene<'a> {
    pub const fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            ticker: &[],
        }
    }

    pub const fn with_ticker(mut self, ticker: &'a [&'a str]) -> Self {
        self.ticker = ticker;
        self
    }
}

/// Static in-memory deck used during bring-up and in tests.
#[derive(Clone, Copy, Debug)]
pub struct StaticDeck<'a> {
    scenes: &'a [StaticScene<'a>],
}

impl<'a> StaticDeck<'a> {
    pub const fn new(scenes: &'a [StaticScene<'a>]) -> Self {
        Self { scenes }
    }

    fn scene(&self, index: u16) -> Option<&StaticScene<'a>> {
        self.scenes.get(index as usize)
    }
}

impl SceneSource for StaticDeck<'_> {
    fn scene_count(&self) -> u16 {
        self.scenes.len().min(u16::MAX as usize) as u16
    }

    fn title_at(&self, index: u16) -> Option<&str> {
        self.scene(index).map(|scene| scene.title)
    }

    fn body_at(&self, index: u16) -> Option<&str> {
        self.scene(index).map(|scene| scene.body)
    }

    fn ticker_count(&self, index: u16) -> u16 {
        self.scene(index)
            .map(|scene| scene.ticker.len().min(u16::MAX as usize) as u16)
            .unwrap_or(0)
    }

    fn ticker_at(&self, index: u16, slot: u16) -> Option<&str> {
        self.scene(index)
            .and_then(|scene| scene.ticker.get(slot as usize))
            .copied()
    }
}
