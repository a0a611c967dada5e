//! Markup Compiler.
//!
//! Compiles a marked-up string into plain text plus style ranges. `*`
//! toggles bold and `|` toggles dim; each control character records the
//! current output length and is dropped from the output. Toggle positions
//! are paired in order, `[p0, p1)`, `[p2, p3)` and so on. A trailing
//! unpaired toggle is discarded rather than closed at end of text.
//!
//! Offsets are byte offsets into `StyledText::text`, so every range can be
//! used to slice it directly.

use serde::{Deserialize, Serialize};

pub const BOLD_TOGGLE: char = '*';
pub const DIM_TOGGLE: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Bold,
    Dim,
}

/// Half-open range `[start, end)` into the plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    pub kind: StyleKind,
}

impl StyleRange {
    pub fn new(start: usize, end: usize, kind: StyleKind) -> Self {
        Self { start, end, kind }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Display text with its style ranges; bold ranges come before dim ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    pub ranges: Vec<StyleRange>,
}

impl StyledText {
    /// Text shown as-is, with no markup interpretation.
    pub fn plain<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            ranges: Vec::new(),
        }
    }

    /// Ranges of one kind, in order.
    pub fn ranges_of(&self, kind: StyleKind) -> impl Iterator<Item = &StyleRange> + '_ {
        self.ranges.iter().filter(move |r| r.kind == kind)
    }

    /// Slice of the text covered by `range`.
    pub fn slice(&self, range: &StyleRange) -> &str {
        &self.text[range.start..range.end]
    }
}

/// Compile `marked_up` into plain text and style ranges. Never fails.
pub fn compile(marked_up: &str) -> StyledText {
    let mut text = String::with_capacity(marked_up.len());
    let mut bolds = Vec::new();
    let mut dims = Vec::new();

    for c in marked_up.chars() {
        match c {
            BOLD_TOGGLE => bolds.push(text.len()),
            DIM_TOGGLE => dims.push(text.len()),
            _ => text.push(c),
        }
    }

    let mut ranges = Vec::with_capacity(bolds.len() / 2 + dims.len() / 2);
    ranges.extend(pair_up(&bolds, StyleKind::Bold));
    ranges.extend(pair_up(&dims, StyleKind::Dim));

    StyledText { text, ranges }
}

fn pair_up(positions: &[usize], kind: StyleKind) -> impl Iterator<Item = StyleRange> + '_ {
    // chunks_exact drops the unpaired remainder
    positions
        .chunks_exact(2)
        .map(move |pair| StyleRange::new(pair[0], pair[1], kind))
}
