//! Yew view components for the sensitivity page.
//!
//! Components render from props and report user actions through callbacks;
//! the page component owns all state.

use crate::config::{SLIDER_MAX_LEGEND, SLIDER_MIN_LEGEND, SLIDER_STEP, TOAST_DURATION_MS};
use crate::hooks::{reconcile_toast_timers, Toast};
use crate::utils::parse_slider_value;
use gloo_timers::callback::Timeout;
use log::warn;
use sensi_generator::defaults::{MAX_SENSITIVITY, MIN_SENSITIVITY};
use sensi_generator::{FieldName, PresetId};
use std::collections::HashMap;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Quick-apply button for one preset.
#[derive(Properties, PartialEq)]
pub struct PresetButtonProps {
    pub preset: PresetId,
    pub onclick: Callback<PresetId>,
}

#[function_component(PresetButton)]
pub fn preset_button(props: &PresetButtonProps) -> Html {
    let preset = props.preset;
    let onclick = props.onclick.reform(move |_: MouseEvent| preset);

    html! {
        <button class={classes!("preset-button", preset.id())} {onclick}>
            <span class="preset-label">{ preset.label() }</span>
            <span class="preset-tagline">{ preset.tagline() }</span>
        </button>
    }
}

/// Card with description, current value and slider for one field.
#[derive(Properties, PartialEq)]
pub struct SensitivityCardProps {
    pub field: FieldName,
    pub value: u32,
    pub onchange: Callback<(FieldName, u32)>,
}

#[function_component(SensitivityCard)]
pub fn sensitivity_card(props: &SensitivityCardProps) -> Html {
    let field = props.field;
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_slider_value(&input.value()) {
                Ok(value) => onchange.emit((field, value)),
                Err(err) => warn!("{}: {}", field, err),
            }
        })
    };

    html! {
        <div class="sensitivity-card">
            <div class="card-header">
                <span class="card-glyph">{ field.glyph() }</span>
                <div>
                    <h4 class="card-title">{ field.label() }</h4>
                    <p class="card-description">{ field.description() }</p>
                </div>
            </div>
            <div class="card-content">
                <div class="value-row">
                    <span class="value-caption">{ "Valor:" }</span>
                    <span class="value-number">{ props.value }</span>
                </div>
                <input type="range"
                    id={field.key()}
                    min={MIN_SENSITIVITY.to_string()}
                    max={MAX_SENSITIVITY.to_string()}
                    step={SLIDER_STEP.to_string()}
                    value={props.value.to_string()}
                    {oninput}
                />
                <div class="slider-legend">
                    <span>{ SLIDER_MIN_LEGEND }</span>
                    <span>{ SLIDER_MAX_LEGEND }</span>
                </div>
            </div>
        </div>
    }
}

/// Stack of notifications; each one removes itself `TOAST_DURATION_MS` after
/// it first appears, regardless of later pushes or dismissals.
#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    // one pending Timeout per toast id; dropping a Timeout cancels it
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toasts.clone(), move |toasts| {
            let mut timers = timers.borrow_mut();
            let scheduled: Vec<u64> = timers.keys().copied().collect();
            let (to_start, to_cancel) = reconcile_toast_timers(&scheduled, toasts);

            for id in to_cancel {
                timers.remove(&id);
            }
            for id in to_start {
                let on_dismiss = on_dismiss.clone();
                timers.insert(id, Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id)));
            }
            || ()
        });
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            { for props.toasts.iter().map(|toast| render_toast(toast, props.on_dismiss.clone())) }
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let id = toast.id;

    html! {
        <div class={classes!("toast", toast.kind.css_class())} role="status">
            <span>{ toast.message.clone() }</span>
            <button class="toast-close" aria-label="Fechar"
                onclick={Callback::from(move |_| on_dismiss.emit(id))}>
                { "✕" }
            </button>
        </div>
    }
}

const TIPS: [(&str, &str); 4] = [
    (
        "Teste gradualmente:",
        "Não mude todos os valores de uma vez. Ajuste um parâmetro por vez e teste em partidas casuais.",
    ),
    (
        "Dispositivo importa:",
        "A sensibilidade ideal varia de acordo com o tamanho da tela e taxa de atualização do seu celular.",
    ),
    (
        "Estilo de jogo:",
        "Jogadores agressivos preferem sensibilidade alta para puxar capa rapidamente. Jogadores mais táticos preferem valores menores para maior precisão.",
    ),
    (
        "Pratique:",
        "Use o modo treinamento para testar suas configurações antes de entrar em partidas ranqueadas.",
    ),
];

/// Static "Dicas Importantes" box.
pub fn render_tips() -> Html {
    html! {
        <section class="tips">
            <h3>{ "Dicas Importantes" }</h3>
            { TIPS.iter().map(|(title, body)| html! {
                <p>
                    <strong>{ format!("• {}", title) }</strong>
                    { " " }
                    { *body }
                </p>
            }).collect::<Html>() }
        </section>
    }
}
