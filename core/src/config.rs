//! Display preferences.
//!
//! One integer selector per dialect that offers a choice of display style.
//! The values are resolved once by the caller and threaded into each render;
//! nothing in the engine reads them ambiently.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::displayer::Dialect;
use crate::error::Result;
use crate::transform::Selector;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Preferences {
    /// Pinyin style (tone marks, tone numbers, ...)
    pub mandarin_display: Selector,
    /// Cantonese romanization system
    pub cantonese_romanization: Selector,
    /// Hangul or romanized Korean
    pub korean_display: Selector,
    /// Old or new tone mark placement
    pub vietnamese_tone_position: Selector,
    /// Kana or romaji
    pub japanese_display: Selector,
}

impl Preferences {
    /// Selector for `dialect`; dialects without a preference always get 0.
    pub fn selector(&self, dialect: Dialect) -> Selector {
        match dialect {
            Dialect::Mandarin => self.mandarin_display,
            Dialect::Cantonese => self.cantonese_romanization,
            Dialect::Korean => self.korean_display,
            Dialect::Vietnamese => self.vietnamese_tone_position,
            Dialect::Japanese => self.japanese_display,
            Dialect::MiddleChinese | Dialect::Shanghai | Dialect::Minnan => 0,
        }
    }

    /// Override the selector for `dialect`. Ignored for dialects without one.
    pub fn set_selector(&mut self, dialect: Dialect, selector: Selector) {
        match dialect {
            Dialect::Mandarin => self.mandarin_display = selector,
            Dialect::Cantonese => self.cantonese_romanization = selector,
            Dialect::Korean => self.korean_display = selector,
            Dialect::Vietnamese => self.vietnamese_tone_position = selector,
            Dialect::Japanese => self.japanese_display = selector,
            Dialect::MiddleChinese | Dialect::Shanghai | Dialect::Minnan => {}
        }
    }

    /// Load preferences from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let prefs = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?prefs, "loaded preferences");
        Ok(prefs)
    }

    /// Save preferences to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
