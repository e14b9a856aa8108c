//! Built-in sensitivity presets.
//!
//! The table is fixed at compile time; presets are never added or edited at
//! runtime. [`PresetId`] is the typed, infallible way in, [`lookup`] the
//! string boundary used by callers that only have an identifier.

use crate::{SettingsError, SettingsRecord};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetId {
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "aggressive")]
    Aggressive,
    #[serde(rename = "proPlayer")]
    ProPlayer,
}

/// A named, complete settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetEntry {
    pub id: PresetId,
    pub settings: SettingsRecord,
}

/// Presets in button order.
pub static PRESETS: [PresetEntry; 4] = [
    PresetEntry {
        id: PresetId::Beginner,
        settings: SettingsRecord {
            overall: 90,
            red_dot: 85,
            scope_2x: 80,
            scope_4x: 75,
            scope_awm: 50,
            free_look: 70,
        },
    },
    PresetEntry {
        id: PresetId::Balanced,
        settings: SettingsRecord {
            overall: 120,
            red_dot: 110,
            scope_2x: 100,
            scope_4x: 90,
            scope_awm: 70,
            free_look: 80,
        },
    },
    PresetEntry {
        id: PresetId::Aggressive,
        settings: SettingsRecord {
            overall: 180,
            red_dot: 165,
            scope_2x: 150,
            scope_4x: 145,
            scope_awm: 100,
            free_look: 90,
        },
    },
    PresetEntry {
        id: PresetId::ProPlayer,
        settings: SettingsRecord {
            overall: 195,
            red_dot: 190,
            scope_2x: 180,
            scope_4x: 170,
            scope_awm: 120,
            free_look: 100,
        },
    },
];

impl PresetId {
    pub const ALL: [PresetId; 4] = [
        PresetId::Beginner,
        PresetId::Balanced,
        PresetId::Aggressive,
        PresetId::ProPlayer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PresetId::Beginner => "beginner",
            PresetId::Balanced => "balanced",
            PresetId::Aggressive => "aggressive",
            PresetId::ProPlayer => "proPlayer",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            PresetId::Beginner => "Iniciante",
            PresetId::Balanced => "Balanceado",
            PresetId::Aggressive => "Agressivo",
            PresetId::ProPlayer => "Pro Player",
        }
    }

    /// Short line shown under the caption.
    pub fn tagline(self) -> &'static str {
        match self {
            PresetId::Beginner => "Controle e precisão",
            PresetId::Balanced => "Equilíbrio ideal",
            PresetId::Aggressive => "Alta velocidade",
            PresetId::ProPlayer => "Máxima agilidade",
        }
    }

    fn index(self) -> usize {
        match self {
            PresetId::Beginner => 0,
            PresetId::Balanced => 1,
            PresetId::Aggressive => 2,
            PresetId::ProPlayer => 3,
        }
    }

    pub fn entry(self) -> &'static PresetEntry {
        &PRESETS[self.index()]
    }

    pub fn settings(self) -> SettingsRecord {
        self.entry().settings
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PresetId {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetId::ALL
            .into_iter()
            .find(|preset| preset.id() == s)
            .ok_or_else(|| SettingsError::UnknownPreset(s.to_string()))
    }
}

/// Settings of the preset named `identifier`.
pub fn lookup(identifier: &str) -> Result<SettingsRecord, SettingsError> {
    let preset: PresetId = identifier.parse()?;
    debug!("Preset lookup: {}", preset);
    Ok(preset.settings())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_in_range, FieldName};

    #[test]
    fn table_order_matches_ids() {
        for preset in PresetId::ALL {
            assert_eq!(preset.entry().id, preset);
        }
    }

    #[test]
    fn every_preset_is_complete_and_in_range() {
        for id in ["beginner", "balanced", "aggressive", "proPlayer"] {
            let record = lookup(id).unwrap();
            for field in FieldName::ALL {
                assert!(is_in_range(record.get(field)), "{}.{}", id, field);
            }
            assert!(record.validate().is_ok());
        }
    }

    #[test]
    fn lookup_is_stable() {
        assert_eq!(lookup("aggressive"), lookup("aggressive"));
        assert_eq!(lookup("beginner").unwrap().scope_awm, 50);
        assert_eq!(lookup("proPlayer").unwrap().overall, 195);
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(
            lookup("balanceado"),
            Err(SettingsError::UnknownPreset("balanceado".to_string()))
        );
        assert!(lookup("ProPlayer").is_err());
        assert!(lookup("").is_err());
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for preset in PresetId::ALL {
            assert_eq!(preset.to_string().parse::<PresetId>(), Ok(preset));
        }
    }
}
