//! Token Transformer.
//!
//! Turns raw notation into a marked-up string:
//! 1. the dialect's line-break hook runs on the raw text,
//! 2. every maximal run of letters and digits (a token) goes through the converter,
//!    every other run is copied verbatim,
//! 3. the reassembled text gets a fixed spacing pass that gives the
//!    presentation layer wrap points.
//!
//! Markup control characters (`*`, `|`) produced by a converter are opaque
//! here; the markup compiler interprets them later.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::line_break::LineBreakHook;

/// Placeholder shown when a dialect has no recorded reading.
pub const NULL_STRING: &str = "-";

/// Per-dialect display preference. Fixed for the duration of one render.
pub type Selector = i32;

/// Converts one token into its display form.
///
/// Returning `None` keeps the original token. Implemented for any
/// `Fn(&str, Selector) -> Option<String>`, so closures and plain functions
/// can be passed directly.
pub trait TokenConverter: Send + Sync {
    fn convert(&self, token: &str, selector: Selector) -> Option<String>;
}

impl<F> TokenConverter for F
where
    F: Fn(&str, Selector) -> Option<String> + Send + Sync,
{
    fn convert(&self, token: &str, selector: Selector) -> Option<String> {
        self(token, selector)
    }
}

/// Converter that never changes anything.
pub fn identity(_token: &str, _selector: Selector) -> Option<String> {
    None
}

static MULTI_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(" {2,}").expect("static regex is valid"));

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{Nd}]+").expect("static regex is valid"));

/// Render raw notation into a marked-up string.
///
/// An absent notation short-circuits to [`NULL_STRING`]; no hook, conversion
/// or spacing is applied in that case.
pub fn render(
    raw: Option<&str>,
    converter: &dyn TokenConverter,
    selector: Selector,
    line_break: LineBreakHook,
) -> String {
    let Some(raw) = raw else {
        return NULL_STRING.to_string();
    };
    let broken = line_break(raw);
    let converted = convert_tokens(&broken, converter, selector);
    normalize_spacing(&converted)
}

/// Alternate between token runs and separator runs, converting the former.
///
/// A token is a maximal run of letters (any `L` category) and decimal digits
/// (`Nd`). Other numerals such as `²` or `①` are separators.
pub fn convert_tokens(s: &str, converter: &dyn TokenConverter, selector: Selector) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for token in TOKEN.find_iter(s) {
        out.push_str(&s[last..token.start()]);
        match converter.convert(token.as_str(), selector) {
            Some(converted) => out.push_str(&converted),
            None => out.push_str(token.as_str()),
        }
        last = token.end();
    }
    out.push_str(&s[last..]);
    out
}

/// Insert wrap hints around punctuation.
///
/// Order matters: the comma rule can leave `" ,"` behind, which the later
/// step removes after runs of spaces have been collapsed.
pub fn normalize_spacing(s: &str) -> String {
    let spaced = s
        .replace(',', ", ")
        .replace('(', " (")
        .replace(']', "] ");
    let collapsed = MULTI_SPACE.replace_all(&spaced, " ");
    collapsed
        .replace(" ,", ",")
        .trim_matches(|c: char| c <= ' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_break::{break_at_commas, no_break};

    fn upper(token: &str, _selector: Selector) -> Option<String> {
        Some(token.to_uppercase())
    }

    #[test]
    fn absent_renders_placeholder() {
        assert_eq!(render(None, &upper, 0, no_break), NULL_STRING);
    }

    #[test]
    fn tokens_are_converted_and_separators_kept() {
        assert_eq!(convert_tokens("ab-cd", &upper, 0), "AB-CD");
        assert_eq!(convert_tokens("[ab]", &upper, 0), "[AB]");
        assert_eq!(convert_tokens("", &upper, 0), "");
    }

    #[test]
    fn none_keeps_original_token() {
        let only_digits = |t: &str, _: Selector| -> Option<String> {
            t.parse::<u32>().ok().map(|n| format!("<{}>", n))
        };
        assert_eq!(convert_tokens("ab 12 cd", &only_digits, 0), "ab <12> cd");
    }

    #[test]
    fn selector_reaches_converter() {
        let tag = |t: &str, s: Selector| Some(format!("{}{}", t, s));
        assert_eq!(render(Some("x,y"), &tag, 7, no_break), "x7, y7");
    }

    #[test]
    fn spacing_rules() {
        assert_eq!(normalize_spacing("a,b"), "a, b");
        assert_eq!(normalize_spacing("a(b)"), "a (b)");
        assert_eq!(normalize_spacing("[a]b"), "[a] b");
        assert_eq!(normalize_spacing("a ,b"), "a, b");
        assert_eq!(normalize_spacing("  a   b  "), "a b");
        assert_eq!(normalize_spacing("(a)"), "(a)");
    }

    #[test]
    fn superscripts_and_circled_numbers_are_separators() {
        let angle = |t: &str, _: Selector| Some(format!("<{}>", t));
        assert_eq!(render(Some("ka²①"), &angle, 0, no_break), "<ka>²①");
        assert_eq!(convert_tokens("Ⅻ中文3", &angle, 0), "Ⅻ<中文3>");
    }

    #[test]
    fn trim_only_strips_ascii_space_and_controls() {
        assert_eq!(normalize_spacing("\u{3000}ka\u{3000}"), "\u{3000}ka\u{3000}");
        assert_eq!(normalize_spacing("\n ka \t"), "ka");
    }

    #[test]
    fn comma_hook_skips_comma_spacing() {
        assert_eq!(render(Some("a1,b2"), &identity, 0, break_at_commas), "a1\nb2");
    }

    #[test]
    fn converter_markup_passes_through() {
        let forty_two = |t: &str, _: Selector| (t == "42").then(|| "*forty-two*".to_string());
        assert_eq!(render(Some("42"), &forty_two, 0, no_break), "*forty-two*");
    }
}
