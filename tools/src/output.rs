use std::fmt::Write;

use mcpdict_core::{Card, Field, Reading, StyleKind, StyledText};

fn label(field: Field) -> &'static str {
    match field {
        Field::Hanzi => "Hanzi",
        Field::Unicode => "Unicode",
        Field::MiddleChinese => "MC",
        Field::Mandarin => "PU",
        Field::Cantonese => "CT",
        Field::Shanghai => "SH",
        Field::Minnan => "MN",
        Field::Korean => "KR",
        Field::Vietnamese => "VN",
        Field::JapaneseGo => "JP go-on",
        Field::JapaneseKan => "JP kan-on",
        Field::JapaneseTou => "JP tou-on",
        Field::JapaneseKwan => "JP kwan'you-on",
        Field::JapaneseOther => "JP other",
    }
}

fn markers(kind: StyleKind) -> (&'static str, &'static str) {
    match kind {
        StyleKind::Bold => ("**", "**"),
        StyleKind::Dim => ("[", "]"),
    }
}

/// Plain text with styled spans shown inline: `**bold**` and `[dim]`.
///
/// At each offset, spans ending there close before spans starting there
/// open; an empty span prints its open and close markers together.
pub fn annotate(styled: &StyledText) -> String {
    let mut out = String::with_capacity(styled.text.len() + 4 * styled.ranges.len());
    let offsets = styled
        .text
        .char_indices()
        .map(Some)
        .chain(std::iter::once(None));
    for next in offsets {
        let at = next.map_or(styled.text.len(), |(i, _)| i);
        for range in styled.ranges.iter().filter(|r| r.end == at && !r.is_empty()) {
            out.push_str(markers(range.kind).1);
        }
        for range in styled.ranges.iter().filter(|r| r.start == at) {
            let (open, close) = markers(range.kind);
            out.push_str(open);
            if range.is_empty() {
                out.push_str(close);
            }
        }
        if let Some((_, c)) = next {
            out.push(c);
        }
    }
    out
}

fn write_reading(out: &mut String, reading: &Reading) {
    let text = annotate(&reading.styled);
    let mut lines = text.lines();
    let _ = writeln!(out, "  {:<15} {}", label(reading.field), lines.next().unwrap_or(""));
    for line in lines {
        let _ = writeln!(out, "  {:<15} {}", "", line);
    }
}

pub fn format_card(card: &Card) -> String {
    let mut out = String::new();
    let _ = write!(out, "{} {}", card.unicode, card.hanzi);
    if let Some(variants) = &card.variants {
        let _ = write!(out, " {}", variants);
    }
    if card.favorite {
        out.push_str(" ★");
    }
    out.push('\n');

    for reading in &card.readings {
        write_reading(&mut out, reading);
        if reading.field == Field::MiddleChinese && !card.mc_detail.is_empty() {
            for line in card.mc_detail.lines() {
                let _ = writeln!(out, "  {:<15} {}", "", line.trim_start());
            }
        }
    }
    for reading in &card.japanese_extras {
        write_reading(&mut out, reading);
    }
    if let Some(comment) = &card.comment {
        let _ = writeln!(out, "  {:<15} {}", "Comment", comment);
    }
    let _ = writeln!(out, "  {:<15} {:#06x}", "Mask", card.mask);
    out
}
