use log::{debug, warn};
use sensi_generator::{clamp_sensitivity, PresetId};
use wasm_bindgen_futures::JsFuture;

/// Parse the raw value of a range input into a sensitivity value.
///
/// The browser already limits range inputs to their min/max, but the value
/// arrives as text, so it is parsed and clamped again here.
pub fn parse_slider_value(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Sensitivity cannot be empty".to_string());
    }

    match trimmed.parse::<i64>() {
        Ok(val) => Ok(clamp_sensitivity(val)),
        Err(_) => Err(format!("Sensitivity must be a whole number, got '{}'", trimmed)),
    }
}

/// Confirmation shown after a preset button is pressed.
pub fn preset_applied_message(preset: PresetId) -> String {
    format!("Preset \"{}\" aplicado!", preset.label())
}

/// Hand `text` to the system clipboard.
///
/// Fire-and-forget: the write promise is awaited in the background and a
/// failure there is only logged. Errors only when there is no window at all.
pub fn copy_to_clipboard(text: String) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No browser window available".to_string())?;
    let promise = window.navigator().clipboard().write_text(&text);

    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => debug!("Copied {} bytes to clipboard", text.len()),
            Err(e) => warn!("Clipboard write failed: {:?}", e),
        }
    });
    Ok(())
}
