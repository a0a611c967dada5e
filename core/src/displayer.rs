//! Per-dialect displayers.
//!
//! A `Displayer` pairs a token converter with a line-break hook. Dialects are
//! values, not subtypes: swapping a dialect's orthography means handing the
//! renderer a different converter.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::line_break::{break_at_commas, break_before_brackets, no_break, LineBreakHook};
use crate::markup::{compile, StyledText};
use crate::transform::{identity, render, Selector, TokenConverter};

/// Readings a dictionary entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    MiddleChinese,
    Mandarin,
    Cantonese,
    Shanghai,
    Minnan,
    Korean,
    Vietnamese,
    Japanese,
}

impl Dialect {
    pub const ALL: [Dialect; 8] = [
        Dialect::MiddleChinese,
        Dialect::Mandarin,
        Dialect::Cantonese,
        Dialect::Shanghai,
        Dialect::Minnan,
        Dialect::Korean,
        Dialect::Vietnamese,
        Dialect::Japanese,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dialect::MiddleChinese => "Middle Chinese",
            Dialect::Mandarin => "Mandarin",
            Dialect::Cantonese => "Cantonese",
            Dialect::Shanghai => "Shanghainese",
            Dialect::Minnan => "Minnan",
            Dialect::Korean => "Korean",
            Dialect::Vietnamese => "Vietnamese",
            Dialect::Japanese => "Japanese",
        }
    }

    /// Hook applied before tokenization.
    pub fn line_break(self) -> LineBreakHook {
        match self {
            Dialect::MiddleChinese => break_at_commas,
            Dialect::Japanese => break_before_brackets,
            _ => no_break,
        }
    }

    /// Whether `*`/`|` in this dialect's output are styling markup.
    pub fn is_rich(self) -> bool {
        matches!(self, Dialect::Shanghai | Dialect::Minnan | Dialect::Japanese)
    }

    /// Whether a user preference selects among display styles.
    pub fn has_selector(self) -> bool {
        matches!(
            self,
            Dialect::Mandarin
                | Dialect::Cantonese
                | Dialect::Korean
                | Dialect::Vietnamese
                | Dialect::Japanese
        )
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converter, hook and presentation options for one line of output.
#[derive(Clone)]
pub struct Displayer {
    converter: Arc<dyn TokenConverter>,
    line_break: LineBreakHook,
    lead: &'static str,
    rich: bool,
}

impl fmt::Debug for Displayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Displayer")
            .field("lead", &self.lead)
            .field("rich", &self.rich)
            .finish_non_exhaustive()
    }
}

impl Displayer {
    pub fn new<C>(converter: C, line_break: LineBreakHook) -> Self
    where
        C: TokenConverter + 'static,
    {
        Self {
            converter: Arc::new(converter),
            line_break,
            lead: "",
            rich: false,
        }
    }

    /// Identity converter with the dialect's own hook and markup handling.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(identity, dialect.line_break()).rich(dialect.is_rich())
    }

    /// Text prepended to every present reading.
    pub fn with_lead(mut self, lead: &'static str) -> Self {
        self.lead = lead;
        self
    }

    pub fn rich(mut self, rich: bool) -> Self {
        self.rich = rich;
        self
    }

    pub fn with_converter<C>(mut self, converter: C) -> Self
    where
        C: TokenConverter + 'static,
    {
        self.converter = Arc::new(converter);
        self
    }

    /// Marked-up display string; the placeholder when `raw` is absent.
    pub fn display(&self, raw: Option<&str>, selector: Selector) -> String {
        let rendered = render(raw, self.converter.as_ref(), selector, self.line_break);
        if raw.is_some() && !self.lead.is_empty() {
            format!("{}{}", self.lead, rendered)
        } else {
            rendered
        }
    }

    /// Display string compiled into styled text when this displayer is rich.
    pub fn styled(&self, raw: Option<&str>, selector: Selector) -> StyledText {
        let marked_up = self.display(raw, selector);
        if self.rich {
            compile(&marked_up)
        } else {
            StyledText::plain(marked_up)
        }
    }
}

impl Default for Displayer {
    fn default() -> Self {
        Self::new(identity, no_break)
    }
}
