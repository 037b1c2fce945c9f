//! Terminal platform adapter for the scenely presentation core.
//!
//! Implements the core's provider seams on top of crossterm: keyboard and
//! mouse input (with drags synthesized into touch sequences for the swipe
//! recognizer), a frame renderer for paged and scrolling flows, and TOML
//! deck loading.

pub mod deck;
pub mod input;
pub mod render;
pub mod terminal;
