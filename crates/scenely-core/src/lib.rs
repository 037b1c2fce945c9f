//! Platform-independent core of the scenely presentation player.
//!
//! The crate owns the scene-navigation state machine and everything that
//! feeds it: the input abstraction, swipe recognition, the location
//! fragment codec, scroll-band inference, and the view models a platform
//! renderer consumes. Platform crates supply an [`input::InputProvider`]
//! and a [`deck::SceneSource`] and drive [`app::SceneApp::tick`] from
//! their event loop.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod deck;
pub mod gesture;
pub mod input;
pub mod location;
pub mod render;
pub mod scroll;
