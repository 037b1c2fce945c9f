//! TOML deck loading.
//!
//! A deck file is a title plus `[[scene]]` tables:
//!
//! ```toml
//! title = "Field Notes"
//!
//! [[scene]]
//! title = "Departure"
//! body = "We left at dawn."
//! ticker = ["06:00 clear skies", "06:10 wind rising"]
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use scenely_core::deck::SceneSource;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse deck: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("deck has no scenes")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct TomlScene {
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    ticker: Vec<String>,
}

/// Deck loaded from a TOML file.
#[derive(Debug, Deserialize)]
pub struct TomlDeck {
    #[serde(default = "default_title")]
    title: String,
    #[serde(rename = "scene", default)]
    scenes: Vec<TomlScene>,
}

fn default_title() -> String {
    "Scenely".to_owned()
}

impl TomlDeck {
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, DeckError> {
        let deck: Self = toml::from_str(text)?;
        if deck.scenes.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(deck)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn scene(&self, index: u16) -> Option<&TomlScene> {
        self.scenes.get(usize::from(index))
    }
}

impl SceneSource for TomlDeck {
    fn scene_count(&self) -> u16 {
        self.scenes.len().min(u16::MAX as usize) as u16
    }

    fn title_at(&self, index: u16) -> Option<&str> {
        self.scene(index).map(|scene| scene.title.as_str())
    }

    fn body_at(&self, index: u16) -> Option<&str> {
        self.scene(index).map(|scene| scene.body.as_str())
    }

    fn ticker_count(&self, index: u16) -> u16 {
        self.scene(index)
            .map(|scene| scene.ticker.len().min(u16::MAX as usize) as u16)
            .unwrap_or(0)
    }

    fn ticker_at(&self, index: u16, slot: u16) -> Option<&str> {
        self.scene(index)
            .and_then(|scene| scene.ticker.get(usize::from(slot)))
            .map(String::as_str)
    }
}
