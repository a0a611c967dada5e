//! mcpdict-orthography
//!
//! Concrete token converters for the rendering engine. Only Mandarin pinyin
//! is implemented; every other dialect keeps the engine's identity converter
//! and shows the stored notation unchanged.
//!
//! Public API:
//! - `mandarin::display` - pinyin converter keyed by `MandarinStyle`
//! - `register` - wire the converters into a `Renderer`

pub mod mandarin;

pub use mandarin::MandarinStyle;

use mcpdict_core::{Dialect, Renderer};
use tracing::debug;

/// Install every available converter into `renderer`.
pub fn register(renderer: Renderer) -> Renderer {
    debug!("registering Mandarin converter");
    renderer.with_converter(Dialect::Mandarin, mandarin::display)
}

/// A renderer with all available converters installed.
pub fn renderer() -> Renderer {
    register(Renderer::new())
}
