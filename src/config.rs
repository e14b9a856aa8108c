//! Application-level configuration constants.

use sensi_generator::PresetId;

// Branding
pub const APP_TITLE: &str = "Gerador de Sensibilidade Free Fire";
pub const APP_SUBTITLE: &str = "Encontre sua sensi perfeita";

// Session start
pub const DEFAULT_PRESET: PresetId = PresetId::Balanced;

// Slider widgets (bounds live in `sensi_generator::defaults`)
pub const SLIDER_STEP: u32 = 1;
pub const SLIDER_MIN_LEGEND: &str = "1 (Lento)";
pub const SLIDER_MAX_LEGEND: &str = "200 (Rápido)";

// Notifications
pub const TOAST_DURATION_MS: u32 = 3_000;
pub const COPY_SUCCESS_MESSAGE: &str = "Configurações copiadas para a área de transferência!";
pub const COPY_FAILURE_MESSAGE: &str = "Não foi possível copiar as configurações.";
