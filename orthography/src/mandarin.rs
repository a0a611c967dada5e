// mcpdict/orthography/src/mandarin.rs
//
// Mandarin pinyin display.
//
// Dictionary data stores pinyin with a trailing tone digit and `v` for ü
// (e.g. `lv3`, `zhong1`, `ma5`). Two display styles are supported:
// - tone marks: `lǚ`, `zhōng`, `ma`
// - tone numbers: `lü3`, `zhong1`, `ma5`
//
// Tokens that do not look like pinyin are left to the caller (None).

use mcpdict_core::Selector;
use once_cell::sync::Lazy;
use phf::phf_map;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandarinStyle {
    ToneMarks,
    ToneNumbers,
}

impl MandarinStyle {
    pub fn from_selector(selector: Selector) -> Option<Self> {
        match selector {
            0 => Some(MandarinStyle::ToneMarks),
            1 => Some(MandarinStyle::ToneNumbers),
            _ => None,
        }
    }
}

/// Vowel -> marked forms for tones 1 to 4.
static TONE_MARKS: phf::Map<char, [char; 4]> = phf_map! {
    'a' => ['ā', 'á', 'ǎ', 'à'],
    'e' => ['ē', 'é', 'ě', 'è'],
    'i' => ['ī', 'í', 'ǐ', 'ì'],
    'o' => ['ō', 'ó', 'ǒ', 'ò'],
    'u' => ['ū', 'ú', 'ǔ', 'ù'],
    'ü' => ['ǖ', 'ǘ', 'ǚ', 'ǜ'],
};

static SYLLABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zü]+)([0-5])$").expect("static regex is valid"));

/// Token converter for the Mandarin displayer.
pub fn display(token: &str, selector: Selector) -> Option<String> {
    let style = MandarinStyle::from_selector(selector)?;
    let token = token.replace('v', "ü");
    let caps = SYLLABLE.captures(&token)?;
    let base = &caps[1];
    let tone: u32 = caps[2].parse().ok()?;

    match style {
        MandarinStyle::ToneNumbers => Some(token.clone()),
        MandarinStyle::ToneMarks => mark_tone(base, tone),
    }
}

/// Put the tone mark on the vowel that carries it.
///
/// `a` and `e` always take the mark, `ou` marks the `o`, otherwise the last
/// vowel does. Neutral tone (0 or 5) leaves the syllable bare.
pub fn mark_tone(base: &str, tone: u32) -> Option<String> {
    if tone == 0 || tone == 5 {
        return Some(base.to_string());
    }
    let index = (tone - 1) as usize;

    let target = if let Some(i) = base.find('a') {
        i
    } else if let Some(i) = base.find('e') {
        i
    } else if let Some(i) = base.find("ou") {
        i
    } else {
        base.char_indices()
            .filter(|(_, c)| TONE_MARKS.contains_key(c))
            .map(|(i, _)| i)
            .last()?
    };

    let vowel = base[target..].chars().next()?;
    let marked = TONE_MARKS.get(&vowel)?.get(index)?;
    let mut out = String::with_capacity(base.len() + 2);
    out.push_str(&base[..target]);
    out.push(*marked);
    out.push_str(&base[target + vowel.len_utf8()..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_marks() {
        assert_eq!(display("zhong1", 0).as_deref(), Some("zhōng"));
        assert_eq!(display("hao3", 0).as_deref(), Some("hǎo"));
        assert_eq!(display("lv3", 0).as_deref(), Some("lǚ"));
        assert_eq!(display("xue2", 0).as_deref(), Some("xué"));
        assert_eq!(display("gou4", 0).as_deref(), Some("gòu"));
        assert_eq!(display("gui4", 0).as_deref(), Some("guì"));
        assert_eq!(display("liu2", 0).as_deref(), Some("liú"));
    }

    #[test]
    fn test_neutral_tone() {
        assert_eq!(display("ma5", 0).as_deref(), Some("ma"));
        assert_eq!(display("de0", 0).as_deref(), Some("de"));
    }

    #[test]
    fn test_tone_numbers() {
        assert_eq!(display("lv3", 1).as_deref(), Some("lü3"));
        assert_eq!(display("zhong1", 1).as_deref(), Some("zhong1"));
    }

    #[test]
    fn test_unrecognized_tokens_fall_back() {
        assert_eq!(display("zhong", 0), None);
        assert_eq!(display("42", 0), None);
        assert_eq!(display("m2", 0), None);
        assert_eq!(display("zhong1", 9), None);
    }
}
