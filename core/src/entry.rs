//! Dictionary entry record.
//!
//! One row per character, with a nullable string column per reading. The
//! storage layer is external; entries arrive either as JSON objects or as
//! `(column, value)` pairs from a row cursor.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::mask::Field;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Entry {
    /// Code point in hex, e.g. `4E00`.
    pub unicode: String,
    /// Space-separated hex code points of variant characters.
    pub variants: Option<String>,
    pub mc: Option<String>,
    pub pu: Option<String>,
    pub ct: Option<String>,
    pub sh: Option<String>,
    pub mn: Option<String>,
    pub kr: Option<String>,
    pub vn: Option<String>,
    pub jp_go: Option<String>,
    pub jp_kan: Option<String>,
    pub jp_tou: Option<String>,
    pub jp_kwan: Option<String>,
    pub jp_other: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_favorite: bool,
    pub comment: Option<String>,
}

impl Entry {
    pub fn new<T: Into<String>>(unicode: T) -> Self {
        Self {
            unicode: unicode.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build an entry from `(column, value)` pairs.
    ///
    /// Unknown columns are ignored. `is_favorite` is set when its value is
    /// `"1"` or `"true"`.
    pub fn from_columns<'a, I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut entry = Entry::default();
        for (name, value) in columns {
            if name == "is_favorite" {
                entry.is_favorite = matches!(value.map(str::trim), Some("1") | Some("true"));
                continue;
            }
            let value = value.map(str::to_string);
            match name {
                "unicode" => entry.unicode = value.unwrap_or_default(),
                "variants" => entry.variants = value,
                "comment" => entry.comment = value,
                _ => {
                    if let Some(slot) = entry.column_mut(name) {
                        *slot = value;
                    }
                }
            }
        }
        entry
    }

    /// Value of a reading column by name.
    pub fn column(&self, name: &str) -> Option<&str> {
        match name {
            "unicode" => Some(self.unicode.as_str()),
            "variants" => self.variants.as_deref(),
            "mc" => self.mc.as_deref(),
            "pu" => self.pu.as_deref(),
            "ct" => self.ct.as_deref(),
            "sh" => self.sh.as_deref(),
            "mn" => self.mn.as_deref(),
            "kr" => self.kr.as_deref(),
            "vn" => self.vn.as_deref(),
            "jp_go" => self.jp_go.as_deref(),
            "jp_kan" => self.jp_kan.as_deref(),
            "jp_tou" => self.jp_tou.as_deref(),
            "jp_kwan" => self.jp_kwan.as_deref(),
            "jp_other" => self.jp_other.as_deref(),
            "comment" => self.comment.as_deref(),
            _ => None,
        }
    }

    fn column_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        let slot = match name {
            "mc" => &mut self.mc,
            "pu" => &mut self.pu,
            "ct" => &mut self.ct,
            "sh" => &mut self.sh,
            "mn" => &mut self.mn,
            "kr" => &mut self.kr,
            "vn" => &mut self.vn,
            "jp_go" => &mut self.jp_go,
            "jp_kan" => &mut self.jp_kan,
            "jp_tou" => &mut self.jp_tou,
            "jp_kwan" => &mut self.jp_kwan,
            "jp_other" => &mut self.jp_other,
            _ => return None,
        };
        Some(slot)
    }

    /// Raw notation for a reading field.
    pub fn reading(&self, field: Field) -> Option<&str> {
        match field {
            Field::Hanzi | Field::Unicode => None,
            _ => self.column(field.column()),
        }
    }

    /// The character itself.
    pub fn character(&self) -> Result<char> {
        parse_code_point(&self.unicode)
    }

    /// Variant characters, in order; `None` when the column is absent.
    pub fn variant_chars(&self) -> Result<Option<String>> {
        let Some(variants) = self.variants.as_deref() else {
            return Ok(None);
        };
        variants
            .split(' ')
            .filter(|s| !s.is_empty())
            .map(parse_code_point)
            .collect::<Result<String>>()
            .map(Some)
    }
}

/// Parse a hex code point such as `4E00` or `20000`.
pub fn parse_code_point(hex: &str) -> Result<char> {
    let hex = hex.trim();
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::InvalidCodePoint(hex.to_string()))
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Null(()),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n == 1,
        Flag::Null(()) => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_with_nulls_and_int_flag() {
        let entry = Entry::from_json(
            r#"{"unicode":"4E00","pu":"yi1","ct":null,"is_favorite":1,"comment":"one"}"#,
        )
        .unwrap();
        assert_eq!(entry.pu.as_deref(), Some("yi1"));
        assert_eq!(entry.ct, None);
        assert!(entry.is_favorite);
        assert_eq!(entry.character().unwrap(), '一');
    }

    #[test]
    fn bool_and_missing_flag() {
        assert!(Entry::from_json(r#"{"unicode":"4E00","is_favorite":true}"#).unwrap().is_favorite);
        assert!(!Entry::from_json(r#"{"unicode":"4E00"}"#).unwrap().is_favorite);
        assert!(!Entry::from_json(r#"{"unicode":"4E00","is_favorite":0}"#).unwrap().is_favorite);
    }

    #[test]
    fn builds_from_columns() {
        let entry = Entry::from_columns([
            ("unicode", Some("6587")),
            ("pu", Some("wen2")),
            ("jp_go", Some("mon")),
            ("kr", None),
            ("unknown", Some("x")),
            ("is_favorite", Some("1")),
        ]);
        assert_eq!(entry.column("pu"), Some("wen2"));
        assert_eq!(entry.reading(Field::JapaneseGo), Some("mon"));
        assert_eq!(entry.reading(Field::Korean), None);
        assert_eq!(entry.column("unknown"), None);
        assert!(entry.is_favorite);
    }

    #[test]
    fn variants_decode_in_order() {
        let mut entry = Entry::new("4E07");
        entry.variants = Some("842C 4E07".into());
        assert_eq!(entry.variant_chars().unwrap().as_deref(), Some("萬万"));
    }

    #[test]
    fn invalid_code_points_are_errors() {
        assert!(matches!(parse_code_point("XYZ"), Err(Error::InvalidCodePoint(_))));
        assert!(parse_code_point("D800").is_err());
        assert_eq!(parse_code_point("20000").unwrap(), '\u{20000}');
    }
}
