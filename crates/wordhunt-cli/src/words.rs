//! Word list sources.

use std::{fs, path::Path};

use wordhunt_core::WordEntry;

use crate::error::CliError;

/// Words used when none are given on the command line.
pub(crate) const DEFAULT_WORDS: &[(&str, &str)] = &[
    ("BEYOND", "Beyond"),
    ("THEHORIZON", "The Horizon"),
    ("TRAVELER", "Traveler"),
    ("GAIA", "Gaia"),
    ("DRIVE", "Drive"),
    ("THEFUTURE", "The Future"),
    ("LAUNCHING", "Launching"),
    ("UNVEIL", "Unveil"),
    ("BEAST", "Beast"),
    ("JOURNEY", "Journey"),
    ("LUXURY", "Luxury"),
    ("COMFORT", "Comfort"),
    ("INTELLIGENCE", "Intelligence"),
    ("SOPHISTICATED", "Sophisticated"),
];

/// Collects the word list from command-line words and an optional file.
///
/// Falls back to [`DEFAULT_WORDS`] when both are empty.
pub(crate) fn load(words: &[String], file: Option<&Path>) -> Result<Vec<WordEntry>, CliError> {
    let mut entries: Vec<_> = words
        .iter()
        .map(|word| WordEntry::from_label(word.as_str()))
        .collect();
    if let Some(path) = file {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_owned(),
            source,
        })?;
        entries.extend(parse(&text).map_err(|(line, message)| CliError::WordFile {
            path: path.to_owned(),
            line,
            message,
        })?);
    }
    if entries.is_empty() {
        log::info!("no words given, using the built-in list");
        entries = DEFAULT_WORDS
            .iter()
            .map(|&(id, label)| WordEntry::new(id, label, label))
            .collect();
    }
    Ok(entries)
}

/// Parses a word file.
///
/// Each line is either a display label, or `id|label|value`. Blank lines and
/// lines starting with `#` are skipped. Errors carry the 1-based line number.
pub(crate) fn parse(text: &str) -> Result<Vec<WordEntry>, (usize, String)> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        let entry = match fields.as_slice() {
            [label] => WordEntry::from_label(*label),
            [id, label, value] => WordEntry::new(*id, *value, *label),
            _ => {
                return Err((
                    i + 1,
                    format!("expected `label` or `id|label|value`, got {line:?}"),
                ));
            }
        };
        entries.push(entry);
    }
    Ok(entries)
}
