//! Main module for the Free Fire sensitivity generator using Yew.
//! Wires the settings model, notifications and clipboard into the page.

use log::{info, warn};
use sensi_generator::{serialize, FieldName, PresetId};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{render_tips, PresetButton, SensitivityCard, ToastHost};
use config::*;
use hooks::{use_sensitivity_settings, use_toasts, ToastKind};
use utils::{copy_to_clipboard, preset_applied_message};

/// Page component: owns the current settings record and the toast list.
#[function_component(Main)]
fn main_component() -> Html {
    let settings = use_sensitivity_settings(DEFAULT_PRESET);
    let toasts = use_toasts();

    let on_preset = {
        let apply_preset = settings.apply_preset.clone();
        let notify = toasts.notify.clone();
        Callback::from(move |preset: PresetId| {
            info!("Applying preset {}", preset);
            apply_preset.emit(preset);
            notify.emit((ToastKind::Success, preset_applied_message(preset)));
        })
    };

    let on_copy = {
        let current = settings.current;
        let notify = toasts.notify.clone();
        Callback::from(move |_: MouseEvent| {
            match copy_to_clipboard(serialize(&current, APP_TITLE)) {
                Ok(()) => notify.emit((ToastKind::Success, COPY_SUCCESS_MESSAGE.to_string())),
                Err(e) => {
                    warn!("Copy failed: {}", e);
                    notify.emit((ToastKind::Error, COPY_FAILURE_MESSAGE.to_string()));
                }
            }
        })
    };

    html! {
        <div class="page">
            <header class="page-header">
                <h1>{ APP_TITLE }</h1>
                <p class="subtitle">{ APP_SUBTITLE }</p>
            </header>

            <main class="container">
                <section class="hero">
                    <h2>{ "Configure sua " }<span class="accent">{ "Sensibilidade" }</span>{ " Ideal" }</h2>
                    <p>
                        { "Ajuste cada parâmetro de sensibilidade do Free Fire e encontre a configuração perfeita para seu estilo de jogo. Use os presets ou personalize manualmente." }
                    </p>
                </section>

                <section class="presets">
                    <h3>{ "Presets Rápidos" }</h3>
                    <div class="preset-grid">
                        { PresetId::ALL.iter().map(|&preset| html! {
                            <PresetButton key={preset.id()} {preset} onclick={on_preset.clone()} />
                        }).collect::<Html>() }
                    </div>
                </section>

                <section class="manual">
                    <div class="manual-header">
                        <h3>{ "Ajuste Manual" }</h3>
                        <button class="btn-primary" onclick={on_copy}>
                            { "Copiar Configurações" }
                        </button>
                    </div>
                    <div class="card-grid">
                        { FieldName::ALL.iter().map(|&field| html! {
                            <SensitivityCard
                                key={field.key()}
                                {field}
                                value={settings.current.get(field)}
                                onchange={settings.set_field.clone()}
                            />
                        }).collect::<Html>() }
                    </div>
                </section>

                { render_tips() }
            </main>

            <footer class="page-footer">
                <p>{ format!("{} - Encontre sua sensi perfeita e domine o jogo! 🎮", APP_TITLE) }</p>
            </footer>

            <ToastHost toasts={toasts.items.clone()} on_dismiss={toasts.dismiss.clone()} />
        </div>
    }
}

/// Root component.
#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: installs the panic hook and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
