//! Presence bitmask.
//!
//! One bit per entry field in a fixed order, plus the favorite flag. Callers
//! use the mask for layout visibility and for filtering search results.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::displayer::Dialect;

/// Fields that contribute a presence bit. The discriminant is the bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Hanzi = 0,
    Unicode = 1,
    MiddleChinese = 2,
    Mandarin = 3,
    Cantonese = 4,
    Shanghai = 5,
    Minnan = 6,
    Korean = 7,
    Vietnamese = 8,
    JapaneseGo = 9,
    JapaneseKan = 10,
    JapaneseTou = 11,
    JapaneseKwan = 12,
    JapaneseOther = 13,
}

impl Field {
    /// Reading fields in display order.
    pub const READINGS: [Field; 12] = [
        Field::MiddleChinese,
        Field::Mandarin,
        Field::Cantonese,
        Field::Shanghai,
        Field::Minnan,
        Field::Korean,
        Field::Vietnamese,
        Field::JapaneseGo,
        Field::JapaneseKan,
        Field::JapaneseTou,
        Field::JapaneseKwan,
        Field::JapaneseOther,
    ];

    pub fn bit(self) -> u32 {
        1 << self as u32
    }

    /// Column holding this field in an entry record.
    pub fn column(self) -> &'static str {
        match self {
            Field::Hanzi | Field::Unicode => "unicode",
            Field::MiddleChinese => "mc",
            Field::Mandarin => "pu",
            Field::Cantonese => "ct",
            Field::Shanghai => "sh",
            Field::Minnan => "mn",
            Field::Korean => "kr",
            Field::Vietnamese => "vn",
            Field::JapaneseGo => "jp_go",
            Field::JapaneseKan => "jp_kan",
            Field::JapaneseTou => "jp_tou",
            Field::JapaneseKwan => "jp_kwan",
            Field::JapaneseOther => "jp_other",
        }
    }

    /// Dialect whose displayer renders this field.
    pub fn dialect(self) -> Option<Dialect> {
        match self {
            Field::Hanzi | Field::Unicode => None,
            Field::MiddleChinese => Some(Dialect::MiddleChinese),
            Field::Mandarin => Some(Dialect::Mandarin),
            Field::Cantonese => Some(Dialect::Cantonese),
            Field::Shanghai => Some(Dialect::Shanghai),
            Field::Minnan => Some(Dialect::Minnan),
            Field::Korean => Some(Dialect::Korean),
            Field::Vietnamese => Some(Dialect::Vietnamese),
            Field::JapaneseGo
            | Field::JapaneseKan
            | Field::JapaneseTou
            | Field::JapaneseKwan
            | Field::JapaneseOther => Some(Dialect::Japanese),
        }
    }

    /// Japanese readings shown in the extra slots, in slot order.
    pub fn is_japanese_extra(self) -> bool {
        matches!(
            self,
            Field::JapaneseTou | Field::JapaneseKwan | Field::JapaneseOther
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresenceMask(u32);

impl PresenceMask {
    pub const FAVORITE: u32 = 1 << 14;
    pub const JP_ALL: u32 = (1 << Field::JapaneseGo as u32)
        | (1 << Field::JapaneseKan as u32)
        | (1 << Field::JapaneseTou as u32)
        | (1 << Field::JapaneseKwan as u32)
        | (1 << Field::JapaneseOther as u32);

    pub fn empty() -> Self {
        Self(0)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn set(&mut self, field: Field) {
        self.0 |= field.bit();
    }

    pub fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        if favorite {
            self.0 |= Self::FAVORITE;
        } else {
            self.0 &= !Self::FAVORITE;
        }
    }

    pub fn is_favorite(self) -> bool {
        self.0 & Self::FAVORITE != 0
    }

    pub fn has_any_japanese(self) -> bool {
        self.0 & Self::JP_ALL != 0
    }

    /// Present fields in bit order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        [Field::Hanzi, Field::Unicode]
            .into_iter()
            .chain(Field::READINGS)
            .filter(move |f| self.contains(*f))
    }
}

impl From<Field> for PresenceMask {
    fn from(field: Field) -> Self {
        Self(field.bit())
    }
}

impl BitOr<Field> for PresenceMask {
    type Output = PresenceMask;

    fn bitor(mut self, field: Field) -> PresenceMask {
        self.set(field);
        self
    }
}

impl BitOrAssign<Field> for PresenceMask {
    fn bitor_assign(&mut self, field: Field) {
        self.set(field);
    }
}

impl fmt::LowerHex for PresenceMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_positions_are_stable() {
        assert_eq!(Field::Hanzi.bit(), 0x1);
        assert_eq!(Field::Unicode.bit(), 0x2);
        assert_eq!(Field::MiddleChinese.bit(), 0x4);
        assert_eq!(Field::JapaneseOther.bit(), 1 << 13);
        assert_eq!(PresenceMask::FAVORITE, 1 << 14);
        assert_eq!(PresenceMask::JP_ALL, 0b11111 << 9);
    }

    #[test]
    fn set_and_query() {
        let mut mask = PresenceMask::empty() | Field::Mandarin;
        mask |= Field::JapaneseKan;
        assert!(mask.contains(Field::Mandarin));
        assert!(!mask.contains(Field::Cantonese));
        assert!(mask.has_any_japanese());
        assert_eq!(
            mask.fields().collect::<Vec<_>>(),
            vec![Field::Mandarin, Field::JapaneseKan]
        );
    }

    #[test]
    fn favorite_flag_toggles() {
        let mut mask = PresenceMask::from(Field::Hanzi);
        mask.set_favorite(true);
        assert!(mask.is_favorite());
        assert_eq!(mask.bits(), 0x1 | PresenceMask::FAVORITE);
        mask.set_favorite(false);
        assert_eq!(mask.bits(), 0x1);
    }

    #[test]
    fn every_reading_maps_to_a_dialect() {
        for field in Field::READINGS {
            assert!(field.dialect().is_some(), "{:?}", field);
        }
        assert_eq!(Field::Hanzi.dialect(), None);
    }
}
