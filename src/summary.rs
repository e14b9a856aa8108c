//! Text summary of a settings record, as copied to the clipboard.
//!
//! Layout:
//! ```text
//! 🎮 Configurações de Sensibilidade Free Fire 🎮
//!
//! 📊 Geral: 120
//! 🔴 Ponto Vermelho: 110
//! ...
//!
//! Gerado em: <app title>
//! ```

use crate::{is_in_range, FieldName, SettingsRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub const SUMMARY_HEADER: &str = "🎮 Configurações de Sensibilidade Free Fire 🎮";
pub const SUMMARY_FOOTER_PREFIX: &str = "Gerado em: ";

// "<label>: <value>" on a single line; the value is checked after matching
static VALUE_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(.*?):[ \t]*(.*?)[ \t\r]*$").unwrap());

/// Format `current` into the multi-line summary, ending with a line naming
/// `app_title`.
pub fn serialize(current: &SettingsRecord, app_title: &str) -> String {
    let lines: Vec<String> = FieldName::ALL
        .iter()
        .map(|&field| format!("{} {}: {}", field.glyph(), field.label(), current.get(field)))
        .collect();

    format!(
        "{}\n\n{}\n\n{}{}",
        SUMMARY_HEADER,
        lines.join("\n"),
        SUMMARY_FOOTER_PREFIX,
        app_title
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryParseError {
    MissingField(FieldName),
    InvalidValue { field: FieldName, value: String },
}

impl fmt::Display for SummaryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryParseError::MissingField(field) => {
                write!(f, "Summary has no line for '{}'", field.label())
            }
            SummaryParseError::InvalidValue { field, value } => write!(
                f,
                "Invalid value '{}' for '{}' (must be {}-{})",
                value,
                field.label(),
                crate::defaults::MIN_SENSITIVITY,
                crate::defaults::MAX_SENSITIVITY
            ),
        }
    }
}

impl std::error::Error for SummaryParseError {}

/// Which field a summary line belongs to, judged by the text before the colon.
/// The glyph in front of the label is optional.
fn field_for_prefix(prefix: &str) -> Option<FieldName> {
    let prefix = prefix.trim_end();
    FieldName::ALL
        .into_iter()
        .find(|field| prefix.ends_with(field.label()))
}

/// Recover the six values from text produced by [`serialize`].
///
/// The first line found for each label wins; lines that don't name a field
/// (header, footer, blank lines) are skipped.
pub fn parse_summary(text: &str) -> Result<SettingsRecord, SummaryParseError> {
    let mut found: [Option<u32>; 6] = [None; 6];

    for captures in VALUE_LINE_REGEX.captures_iter(text) {
        let Some(field) = field_for_prefix(&captures[1]) else {
            continue;
        };
        let slot = field as usize;
        if found[slot].is_some() {
            continue;
        }

        let raw = &captures[2];
        let value = match raw.parse::<i64>() {
            Ok(v) if (0..=u32::MAX as i64).contains(&v) && is_in_range(v as u32) => v as u32,
            _ => {
                return Err(SummaryParseError::InvalidValue {
                    field,
                    value: raw.to_string(),
                })
            }
        };
        found[slot] = Some(value);
    }

    let value_of = |field: FieldName| -> Result<u32, SummaryParseError> {
        found[field as usize].ok_or(SummaryParseError::MissingField(field))
    };

    Ok(SettingsRecord {
        overall: value_of(FieldName::Overall)?,
        red_dot: value_of(FieldName::RedDot)?,
        scope_2x: value_of(FieldName::Scope2x)?,
        scope_4x: value_of(FieldName::Scope4x)?,
        scope_awm: value_of(FieldName::ScopeAwm)?,
        free_look: value_of(FieldName::FreeLook)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{update, PresetId};

    #[test]
    fn serialize_matches_the_copied_layout() {
        let text = serialize(&PresetId::Balanced.settings(), "Sensi FF");
        let expected = "🎮 Configurações de Sensibilidade Free Fire 🎮\n\
                        \n\
                        📊 Geral: 120\n\
                        🔴 Ponto Vermelho: 110\n\
                        🔍 Mira 2x: 100\n\
                        🎯 Mira 4x: 90\n\
                        ⚡ Mira AWM: 70\n\
                        👀 Olhadinha: 80\n\
                        \n\
                        Gerado em: Sensi FF";
        assert_eq!(text, expected);
    }

    #[test]
    fn serialize_is_deterministic() {
        let record = PresetId::Aggressive.settings();
        assert_eq!(serialize(&record, "x"), serialize(&record, "x"));
    }

    #[test]
    fn every_preset_survives_a_summary_round_trip() {
        for preset in PresetId::ALL {
            let record = preset.settings();
            let text = serialize(&record, "Round Trip");
            assert_eq!(parse_summary(&text), Ok(record), "{}", preset);
        }
    }

    #[test]
    fn edited_values_survive_a_round_trip() {
        let mut record = PresetId::Beginner.settings();
        for (field, value) in FieldName::ALL.into_iter().zip([1, 200, 33, 4, 155, 99]) {
            record = update(&record, field, value).unwrap();
        }
        assert_eq!(parse_summary(&serialize(&record, "t")), Ok(record));
    }

    #[test]
    fn numeric_app_title_is_not_mistaken_for_a_field() {
        let record = PresetId::ProPlayer.settings();
        assert_eq!(parse_summary(&serialize(&record, "2024")), Ok(record));
    }

    #[test]
    fn glyphs_are_optional_when_parsing() {
        let text = "Geral: 10\nPonto Vermelho: 20\nMira 2x: 30\r\nMira 4x: 40\nMira AWM: 50\nOlhadinha: 60";
        let record = parse_summary(text).unwrap();
        assert_eq!(FieldName::ALL.map(|f| record.get(f)), [10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn missing_line_is_reported() {
        let text = serialize(&SettingsRecord::default(), "t").replace("👀 Olhadinha: 80\n", "");
        assert_eq!(
            parse_summary(&text),
            Err(SummaryParseError::MissingField(FieldName::FreeLook))
        );
    }

    #[test]
    fn out_of_range_value_is_reported() {
        let text = serialize(&SettingsRecord::default(), "t").replace("Mira 4x: 90", "Mira 4x: 250");
        assert_eq!(
            parse_summary(&text),
            Err(SummaryParseError::InvalidValue {
                field: FieldName::Scope4x,
                value: "250".to_string()
            })
        );

        let text = serialize(&SettingsRecord::default(), "t").replace("Geral: 120", "Geral: 0");
        assert!(matches!(
            parse_summary(&text),
            Err(SummaryParseError::InvalidValue { field: FieldName::Overall, .. })
        ));
    }

    #[test]
    fn non_numeric_value_is_reported() {
        let text = serialize(&SettingsRecord::default(), "t").replace("Geral: 120", "Geral: abc");
        assert_eq!(
            parse_summary(&text),
            Err(SummaryParseError::InvalidValue {
                field: FieldName::Overall,
                value: "abc".to_string()
            })
        );

        let text = serialize(&SettingsRecord::default(), "t").replace("Olhadinha: 80", "Olhadinha:");
        assert_eq!(
            parse_summary(&text),
            Err(SummaryParseError::InvalidValue {
                field: FieldName::FreeLook,
                value: String::new()
            })
        );

        let text = serialize(&SettingsRecord::default(), "t").replace("Mira 2x: 100", "Mira 2x: 1 00");
        assert_eq!(
            parse_summary(&text),
            Err(SummaryParseError::InvalidValue {
                field: FieldName::Scope2x,
                value: "1 00".to_string()
            })
        );
    }
}
