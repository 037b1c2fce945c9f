//! Location fragments: the shareable encoding of the active scene.
//!
//! The fragment is the only state that survives a session; everything else
//! is rebuilt from the deck and the fragment on startup.

use core::fmt::Write as _;

use heapless::String;

/// Rendered fragment capacity: `scene-` plus the widest `u16`.
pub const FRAGMENT_BYTES: usize = 12;

pub type FragmentBuf = String<FRAGMENT_BYTES>;

const FRAGMENT_PREFIX: &str = "scene-";

/// Render the fragment for a scene index.
pub fn format_fragment(index: u16) -> FragmentBuf {
    let mut out = FragmentBuf::new();
    // "scene-65535" is 11 bytes and always fits.
    let _ = write!(out, "{FRAGMENT_PREFIX}{index}");
    out
}

/// Parse a fragment of the form `scene-<digits>`, with or without the
/// leading `#` an address bar carries.
///
/// Anything else is `None`; range checking against the deck is the
/// navigator's job.
pub fn parse_fragment(fragment: &str) -> Option<u16> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let digits = fragment.strip_prefix(FRAGMENT_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_an_index() {
        let fragment = format_fragment(7);

        assert_eq!(fragment.as_str(), "scene-7");
        assert_eq!(parse_fragment(&fragment), Some(7));
    }

    #[test]
    fn accepts_a_hash_prefix() {
        assert_eq!(parse_fragment("#scene-3"), Some(3));
    }

    #[test]
    fn rejects_malformed_fragments() {
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("garbage"), None);
        assert_eq!(parse_fragment("scene-"), None);
        assert_eq!(parse_fragment("scene-5x"), None);
        assert_eq!(parse_fragment("scene--1"), None);
        assert_eq!(parse_fragment("xscene-5"), None);
    }

    #[test]
    fn rejects_indices_wider_than_u16() {
        assert_eq!(parse_fragment("scene-65535"), Some(65535));
        assert_eq!(parse_fragment("scene-65536"), None);
        assert_eq!(parse_fragment("scene-99999999999"), None);
    }
}
