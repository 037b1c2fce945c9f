//! Applied-fragment bookkeeping for the session.
//!
//! The terminal has no address bar, so the "address" is this record: the
//! last fragment the navigator wrote, echoed on exit as a `--at` resume
//! hint.

use log::info;

pub struct LocationSync {
    current: Option<String>,
    writes: u32,
}

impl LocationSync {
    pub fn new() -> Self {
        Self {
            current: None,
            writes: 0,
        }
    }

    /// Apply a drained fragment write. Rewrites of the already-applied
    /// fragment are absorbed silently, like an address bar keeping the
    /// same hash.
    pub fn apply(&mut self, fragment: &str, now_ms: u64) {
        if self.current.as_deref() == Some(fragment) {
            return;
        }
        info!("location: apply fragment={} at_ms={}", fragment, now_ms);
        self.current = Some(fragment.to_owned());
        self.writes = self.writes.saturating_add(1);
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn writes(&self) -> u32 {
        self.writes
    }
}
