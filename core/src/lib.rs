//! mcpdict-core
//!
//! Transcription rendering engine for dictionary entries. Raw phonological
//! notation (Middle Chinese, Mandarin, Cantonese, Shanghainese, Minnan,
//! Korean, Vietnamese, Japanese) goes through a per-dialect token converter,
//! gets wrap-friendly spacing, and is compiled into plain text with bold and
//! dim style ranges.
//!
//! Public API:
//! - `render` / `Displayer` - Token Transformer with a pluggable converter and line-break hook
//! - `compile` / `StyledText` - Markup Compiler (`*` bold, `|` dim)
//! - `Renderer` / `Card` - whole-entry rendering with presence flags
//! - `Entry` - input record
//! - `PresenceMask` / `Field` - fixed-bit presence mask
//! - `Preferences` - per-dialect style selectors

pub mod card;
pub use card::{Card, Reading, Renderer, JAPANESE_EXTRA_SLOTS};

pub mod config;
pub use config::Preferences;

pub mod displayer;
pub use displayer::{Dialect, Displayer};

pub mod entry;
pub use entry::{parse_code_point, Entry};

pub mod error;
pub use error::{Error, Result};

pub mod line_break;
pub use line_break::{break_at_commas, break_before_brackets, no_break, LineBreakHook};

pub mod markup;
pub use markup::{compile, StyleKind, StyleRange, StyledText};

pub mod mask;
pub use mask::{Field, PresenceMask};

pub mod transform;
pub use transform::{
    convert_tokens, identity, normalize_spacing, render, Selector, TokenConverter, NULL_STRING,
};
