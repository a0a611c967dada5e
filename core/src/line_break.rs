//! Line-break hooks applied to raw notation before tokenization.
//!
//! A hook may only insert or substitute line-break characters; it runs once
//! per render, ahead of token conversion and spacing normalization.

use std::borrow::Cow;

/// A dialect-specific pre-tokenization pass.
pub type LineBreakHook = for<'a> fn(&'a str) -> Cow<'a, str>;

/// Leave the notation untouched.
pub fn no_break(s: &str) -> Cow<'_, str> {
    Cow::Borrowed(s)
}

/// Put every reading on its own line by turning commas into newlines.
///
/// The replaced commas are gone before spacing normalization runs, so they
/// never receive the comma-space treatment.
pub fn break_at_commas(s: &str) -> Cow<'_, str> {
    if s.contains(',') {
        Cow::Owned(s.replace(',', "\n"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Start a new line before every `[` except a leading one.
///
/// Only applies when the notation itself opens with `[`; otherwise the input
/// is returned unchanged.
pub fn break_before_brackets(s: &str) -> Cow<'_, str> {
    match s.strip_prefix('[') {
        Some(rest) if rest.contains('[') => {
            let mut out = String::with_capacity(s.len() + 4);
            out.push('[');
            out.push_str(&rest.replace('[', "\n["));
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(s),
    }
}
