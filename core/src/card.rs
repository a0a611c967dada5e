//! Rendering a whole entry.
//!
//! `Renderer` holds one displayer per dialect plus the Middle Chinese detail
//! displayer and produces a `Card`: every reading as styled text, the Japanese
//! extra slots, and the presence mask. Rendering one entry touches nothing
//! outside its own buffers, so a shared `Renderer` can serve many threads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::Preferences;
use crate::displayer::{Dialect, Displayer};
use crate::entry::Entry;
use crate::error::Result;
use crate::line_break::break_at_commas;
use crate::mask::{Field, PresenceMask};
use crate::markup::StyledText;
use crate::transform::{Selector, TokenConverter};

/// At most this many of tou-on, kwan'you-on and other readings are shown.
pub const JAPANESE_EXTRA_SLOTS: usize = 3;

/// One rendered reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub field: Field,
    /// Whether the entry had a value; the text is the placeholder otherwise.
    pub present: bool,
    pub styled: StyledText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// `U+` followed by the hex code point.
    pub unicode: String,
    pub hanzi: char,
    /// Variant characters wrapped in parentheses; `None` hides the line.
    pub variants: Option<String>,
    /// Main readings in display order (Japanese tou/kwan/other excluded).
    pub readings: Vec<Reading>,
    /// Middle Chinese detail line, empty when there is no Middle Chinese reading.
    pub mc_detail: String,
    /// Present Japanese extra readings, packed into the first slots.
    pub japanese_extras: Vec<Reading>,
    pub favorite: bool,
    pub comment: Option<String>,
    pub mask: PresenceMask,
}

impl Card {
    pub fn reading(&self, field: Field) -> Option<&Reading> {
        self.readings
            .iter()
            .chain(self.japanese_extras.iter())
            .find(|r| r.field == field)
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    displayers: HashMap<Dialect, Displayer>,
    mc_detail: Displayer,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Default Middle Chinese detail: the token itself in parentheses.
fn parenthesize(token: &str, _selector: Selector) -> Option<String> {
    Some(format!("({})", token))
}

impl Renderer {
    /// Identity converters for every dialect.
    pub fn new() -> Self {
        let displayers = Dialect::ALL
            .into_iter()
            .map(|d| (d, Displayer::for_dialect(d)))
            .collect();
        Self {
            displayers,
            mc_detail: Displayer::new(parenthesize, break_at_commas).with_lead(" "),
        }
    }

    /// Replace the converter for one dialect, keeping its hook and markup mode.
    pub fn with_converter<C>(mut self, dialect: Dialect, converter: C) -> Self
    where
        C: TokenConverter + 'static,
    {
        let displayer = self.displayer(dialect).clone().with_converter(converter);
        self.displayers.insert(dialect, displayer);
        self
    }

    /// Replace a dialect's displayer wholesale.
    pub fn with_displayer(mut self, dialect: Dialect, displayer: Displayer) -> Self {
        self.displayers.insert(dialect, displayer);
        self
    }

    /// Converter producing the Middle Chinese detail for one token.
    ///
    /// The result is wrapped in parentheses; when `detail` returns `None`
    /// the token itself is wrapped.
    pub fn with_detail_converter<F>(mut self, detail: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.mc_detail = self.mc_detail.with_converter(move |token: &str, _: Selector| {
            let detail = detail(token).unwrap_or_else(|| token.to_string());
            Some(format!("({})", detail))
        });
        self
    }

    pub fn displayer(&self, dialect: Dialect) -> &Displayer {
        // every dialect is inserted in new()
        &self.displayers[&dialect]
    }

    /// Styled text for one reading field.
    pub fn render_field(&self, entry: &Entry, field: Field, prefs: &Preferences) -> Option<Reading> {
        let dialect = field.dialect()?;
        let raw = entry.reading(field);
        let styled = self
            .displayer(dialect)
            .styled(raw, prefs.selector(dialect));
        trace!(?field, ?raw, text = %styled.text, "rendered field");
        Some(Reading {
            field,
            present: raw.is_some(),
            styled,
        })
    }

    pub fn render_entry(&self, entry: &Entry, prefs: &Preferences) -> Result<Card> {
        let hanzi = entry.character()?;
        let variants = entry.variant_chars()?.map(|v| format!("({})", v));
        let mut mask = PresenceMask::empty() | Field::Unicode | Field::Hanzi;

        let mut readings = Vec::new();
        let mut japanese_extras = Vec::with_capacity(JAPANESE_EXTRA_SLOTS);
        for field in Field::READINGS {
            let Some(reading) = self.render_field(entry, field, prefs) else {
                continue;
            };
            if reading.present {
                mask |= field;
            }
            if field.is_japanese_extra() {
                if reading.present && japanese_extras.len() < JAPANESE_EXTRA_SLOTS {
                    japanese_extras.push(reading);
                }
            } else {
                readings.push(reading);
            }
        }

        let mc_detail = match entry.mc.as_deref() {
            Some(mc) => self.mc_detail.display(Some(mc), 0),
            None => String::new(),
        };

        mask.set_favorite(entry.is_favorite);

        debug!(unicode = %entry.unicode, mask = mask.bits(), "rendered entry");
        Ok(Card {
            unicode: format!("U+{}", entry.unicode.trim().to_uppercase()),
            hanzi,
            variants,
            readings,
            mc_detail,
            japanese_extras,
            favorite: entry.is_favorite,
            comment: entry.comment.clone(),
            mask,
        })
    }

    /// Presence mask alone, without building styled text.
    pub fn presence(entry: &Entry) -> PresenceMask {
        let mut mask = PresenceMask::empty() | Field::Unicode | Field::Hanzi;
        for field in Field::READINGS {
            if entry.reading(field).is_some() {
                mask |= field;
            }
        }
        mask.set_favorite(entry.is_favorite);
        mask
    }
}
