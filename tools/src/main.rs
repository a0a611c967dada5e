//! Render dictionary entries from JSON.
//!
//! Usage:
//!   cargo run -p mcpdict-tools --bin render_entry -- entries.json
//!   cat entries.jsonl | cargo run -p mcpdict-tools --bin render_entry -- --format json
//!   cargo run -p mcpdict-tools --bin render_entry -- entries.json --prefs prefs.toml --mandarin 1

mod output;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mcpdict_core::{Dialect, Entry, Preferences, Selector};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "render_entry")]
#[command(about = "Render dictionary entries into display text with style ranges")]
struct Args {
    /// JSON array or newline-delimited JSON objects (defaults to stdin)
    input: Option<PathBuf>,

    /// Preferences file (TOML)
    #[arg(long)]
    prefs: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Mandarin display style
    #[arg(long)]
    mandarin: Option<Selector>,

    /// Cantonese romanization system
    #[arg(long)]
    cantonese: Option<Selector>,

    /// Korean display style
    #[arg(long)]
    korean: Option<Selector>,

    /// Vietnamese tone mark position
    #[arg(long)]
    vietnamese: Option<Selector>,

    /// Japanese display style
    #[arg(long)]
    japanese: Option<Selector>,
}

impl Args {
    fn preferences(&self) -> Result<Preferences> {
        let mut prefs = match &self.prefs {
            Some(path) => Preferences::load_toml(path)
                .with_context(|| format!("loading preferences from {}", path.display()))?,
            None => Preferences::default(),
        };
        let overrides = [
            (Dialect::Mandarin, self.mandarin),
            (Dialect::Cantonese, self.cantonese),
            (Dialect::Korean, self.korean),
            (Dialect::Vietnamese, self.vietnamese),
            (Dialect::Japanese, self.japanese),
        ];
        for (dialect, selector) in overrides {
            if let Some(selector) = selector {
                prefs.set_selector(dialect, selector);
            }
        }
        Ok(prefs)
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

/// Accept a JSON array of entries or one entry object per line.
fn parse_entries(content: &str) -> Result<Vec<Entry>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("parsing entry array");
    }
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Entry::from_json(line).with_context(|| format!("parsing entry on line {}", i + 1))
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let prefs = args.preferences()?;
    debug!(?prefs, "resolved preferences");

    let entries = parse_entries(&args.read_input()?)?;
    info!(count = entries.len(), "rendering entries");

    let renderer = mcpdict_orthography::renderer();
    let cards = entries
        .iter()
        .map(|entry| {
            renderer
                .render_entry(entry, &prefs)
                .with_context(|| format!("rendering entry U+{}", entry.unicode))
        })
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
        Format::Text => {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", output::format_card(card));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_and_lines() {
        let array = r#"[{"unicode":"4E00"},{"unicode":"4E8C","pu":"er4"}]"#;
        assert_eq!(parse_entries(array).unwrap().len(), 2);

        let lines = "{\"unicode\":\"4E00\"}\n\n{\"unicode\":\"4E8C\"}\n";
        let entries = parse_entries(lines).unwrap();
        assert_eq!(entries[1].unicode, "4E8C");
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = parse_entries("{\"unicode\":\"4E00\"}\nnot json\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let args = Args::parse_from(["render_entry", "--mandarin", "1", "--japanese", "2"]);
        let prefs = args.preferences().unwrap();
        assert_eq!(prefs.mandarin_display, 1);
        assert_eq!(prefs.japanese_display, 2);
        assert_eq!(prefs.korean_display, 0);
    }
}
