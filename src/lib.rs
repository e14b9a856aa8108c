use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

pub mod presets;
pub mod summary;

pub use presets::{lookup, PresetEntry, PresetId, PRESETS};
pub use summary::{parse_summary, serialize, SummaryParseError};

/// Bounds shared by the settings model and the slider widgets
pub mod defaults {
    pub const MIN_SENSITIVITY: u32 = 1;
    pub const MAX_SENSITIVITY: u32 = 200;
}

/// One of the six in-game sensitivity settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "overall")]
    Overall,
    #[serde(rename = "redDot")]
    RedDot,
    #[serde(rename = "scope2x")]
    Scope2x,
    #[serde(rename = "scope4x")]
    Scope4x,
    #[serde(rename = "scopeAWM")]
    ScopeAwm,
    #[serde(rename = "freeLook")]
    FreeLook,
}

impl FieldName {
    /// Display order, also the order of the lines in the copied summary.
    pub const ALL: [FieldName; 6] = [
        FieldName::Overall,
        FieldName::RedDot,
        FieldName::Scope2x,
        FieldName::Scope4x,
        FieldName::ScopeAwm,
        FieldName::FreeLook,
    ];

    /// Stable camelCase key, identical to the serde name.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Overall => "overall",
            FieldName::RedDot => "redDot",
            FieldName::Scope2x => "scope2x",
            FieldName::Scope4x => "scope4x",
            FieldName::ScopeAwm => "scopeAWM",
            FieldName::FreeLook => "freeLook",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Overall => "Geral",
            FieldName::RedDot => "Ponto Vermelho",
            FieldName::Scope2x => "Mira 2x",
            FieldName::Scope4x => "Mira 4x",
            FieldName::ScopeAwm => "Mira AWM",
            FieldName::FreeLook => "Olhadinha",
        }
    }

    /// Emoji printed in front of the label in the copied summary.
    pub fn glyph(self) -> &'static str {
        match self {
            FieldName::Overall => "📊",
            FieldName::RedDot => "🔴",
            FieldName::Scope2x => "🔍",
            FieldName::Scope4x => "🎯",
            FieldName::ScopeAwm => "⚡",
            FieldName::FreeLook => "👀",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FieldName::Overall => "Controla a velocidade da câmera quando você está sem mira aberta. Essencial para movimentação e puxar capa.",
            FieldName::RedDot => "Controla a velocidade da mira simples (Red Dot). Fundamental em combates de curta e média distância.",
            FieldName::Scope2x => "Ajusta a velocidade ao usar mira de 2x. Ideal para confrontos de média distância.",
            FieldName::Scope4x => "Controla a velocidade da mira 4x. Muito usada para tiros de longa distância com mais estabilidade.",
            FieldName::ScopeAwm => "Específica para snipers (AWM, M82B, Kar98k). Ajuda na precisão dos tiros de longo alcance.",
            FieldName::FreeLook => "Ajusta a velocidade ao usar o botão de olhar, permitindo observar sem mover o personagem.",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| SettingsError::UnknownField(s.to_string()))
    }
}

/// A complete set of the six sensitivity values, each in
/// `MIN_SENSITIVITY..=MAX_SENSITIVITY`.
///
/// Records are plain `Copy` values: every change produces a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub overall: u32,
    #[serde(rename = "redDot")]
    pub red_dot: u32,
    #[serde(rename = "scope2x")]
    pub scope_2x: u32,
    #[serde(rename = "scope4x")]
    pub scope_4x: u32,
    #[serde(rename = "scopeAWM")]
    pub scope_awm: u32,
    #[serde(rename = "freeLook")]
    pub free_look: u32,
}

impl SettingsRecord {
    pub fn get(&self, field: FieldName) -> u32 {
        match field {
            FieldName::Overall => self.overall,
            FieldName::RedDot => self.red_dot,
            FieldName::Scope2x => self.scope_2x,
            FieldName::Scope4x => self.scope_4x,
            FieldName::ScopeAwm => self.scope_awm,
            FieldName::FreeLook => self.free_look,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut u32 {
        match field {
            FieldName::Overall => &mut self.overall,
            FieldName::RedDot => &mut self.red_dot,
            FieldName::Scope2x => &mut self.scope_2x,
            FieldName::Scope4x => &mut self.scope_4x,
            FieldName::ScopeAwm => &mut self.scope_awm,
            FieldName::FreeLook => &mut self.free_look,
        }
    }

    /// Check every field against the slider bounds.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for field in FieldName::ALL {
            let value = self.get(field);
            if !is_in_range(value) {
                return Err(SettingsError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

impl Default for SettingsRecord {
    /// A fresh session starts from the balanced preset.
    fn default() -> Self {
        PresetId::Balanced.settings()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    UnknownPreset(String),
    UnknownField(String),
    OutOfRange { field: FieldName, value: u32 },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::UnknownPreset(id) => write!(f, "Unknown preset '{}'", id),
            SettingsError::UnknownField(key) => write!(f, "Unknown sensitivity field '{}'", key),
            SettingsError::OutOfRange { field, value } => write!(
                f,
                "Value {} for {} is out of range ({}-{})",
                value,
                field,
                defaults::MIN_SENSITIVITY,
                defaults::MAX_SENSITIVITY
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

#[inline]
pub fn is_in_range(value: u32) -> bool {
    (defaults::MIN_SENSITIVITY..=defaults::MAX_SENSITIVITY).contains(&value)
}

/// Pull an arbitrary integer into the slider bounds.
#[inline]
pub fn clamp_sensitivity(value: i64) -> u32 {
    value.clamp(
        defaults::MIN_SENSITIVITY as i64,
        defaults::MAX_SENSITIVITY as i64,
    ) as u32
}

/// Return a copy of `current` with `field` set to `value`.
///
/// Values outside the slider bounds are rejected with
/// [`SettingsError::OutOfRange`]; callers that receive raw widget input
/// should run it through [`clamp_sensitivity`] first.
pub fn update(
    current: &SettingsRecord,
    field: FieldName,
    value: u32,
) -> Result<SettingsRecord, SettingsError> {
    if !is_in_range(value) {
        warn!("Rejected {} = {} (outside slider bounds)", field, value);
        return Err(SettingsError::OutOfRange { field, value });
    }

    let mut next = *current;
    *next.slot_mut(field) = value;
    debug!("{} changed from {} to {}", field, current.get(field), value);
    Ok(next)
}

/// Replace the whole record with the preset's values. Prior state is ignored.
pub fn load(preset: &PresetEntry) -> SettingsRecord {
    debug!("Loading preset {}", preset.id);
    preset.settings
}

/// Check `settings` and format it into the copyable summary.
pub fn summarize(settings: &SettingsRecord, app_title: &str) -> Result<String, SettingsError> {
    settings.validate()?;
    Ok(serialize(settings, app_title))
}

/// JS entry point returning the settings of a named preset.
///
/// Unknown identifiers produce an error string instead of a settings object,
/// mirroring how the other exported helpers report failures.
#[wasm_bindgen]
pub fn preset_settings(identifier: &str) -> JsValue {
    match lookup(identifier) {
        Ok(settings) => serde_wasm_bindgen::to_value(&settings).unwrap_or(JsValue::NULL),
        Err(e) => serde_wasm_bindgen::to_value(&format!("Preset lookup failed: {}", e))
            .unwrap_or(JsValue::NULL),
    }
}

/// JS entry point formatting a settings object into the copyable summary.
#[wasm_bindgen]
pub fn summarize_settings(settings_js: JsValue, app_title: &str) -> JsValue {
    let settings: SettingsRecord = match serde_wasm_bindgen::from_value(settings_js) {
        Ok(s) => s,
        Err(e) => {
            return JsValue::from_str(&format!("Failed to deserialize settings: {}", e));
        }
    };

    match summarize(&settings, app_title) {
        Ok(text) => JsValue::from_str(&text),
        Err(e) => JsValue::from_str(&format!("Invalid settings: {}", e)),
    }
}
