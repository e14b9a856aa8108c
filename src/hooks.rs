use log::warn;
use sensi_generator::{load, update, FieldName, PresetId, SettingsRecord};
use std::rc::Rc;
use yew::prelude::*;

/// Actions the page can apply to the current settings record.
pub enum SettingsAction {
    /// Replace every field with a preset's values.
    Load(PresetId),
    /// Set one field; the value is expected to be in slider range already.
    Set(FieldName, u32),
}

/// Reducer state wrapping the current record.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SettingsState {
    pub current: SettingsRecord,
}

impl SettingsState {
    pub fn new(initial: PresetId) -> Self {
        Self {
            current: load(initial.entry()),
        }
    }
}

impl Reducible for SettingsState {
    type Action = SettingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SettingsAction::Load(preset) => Rc::new(Self {
                current: load(preset.entry()),
            }),
            SettingsAction::Set(field, value) => match update(&self.current, field, value) {
                Ok(current) => Rc::new(Self { current }),
                Err(e) => {
                    // Keep the previous record; the slider should never get here.
                    warn!("Ignoring slider input: {}", e);
                    self
                }
            },
        }
    }
}

/// Holds the current settings and the callbacks that change them.
#[derive(Clone)]
pub struct SensitivitySettings {
    /// The record the page currently displays.
    pub current: SettingsRecord,
    /// Replace all six values with a preset.
    pub apply_preset: Callback<PresetId>,
    /// Change a single value.
    pub set_field: Callback<(FieldName, u32)>,
}

/// Custom hook owning the page's settings record.
#[hook]
pub fn use_sensitivity_settings(initial: PresetId) -> SensitivitySettings {
    let state = use_reducer(|| SettingsState::new(initial));

    let apply_preset = {
        let state = state.clone();
        Callback::from(move |preset: PresetId| state.dispatch(SettingsAction::Load(preset)))
    };

    let set_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (FieldName, u32)| {
            state.dispatch(SettingsAction::Set(field, value))
        })
    };

    SensitivitySettings {
        current: state.current,
        apply_preset,
        set_field,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    /// Monotonic per-session identifier.
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ToastList {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.items.push(Toast {
                    id: next.next_id,
                    message,
                    kind,
                });
                next.next_id += 1;
            }
            ToastAction::Dismiss(id) => next.items.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

/// Toasts currently on screen plus the callbacks to add and remove them.
#[derive(Clone)]
pub struct Toasts {
    pub items: Vec<Toast>,
    pub notify: Callback<(ToastKind, String)>,
    pub dismiss: Callback<u64>,
}

#[hook]
pub fn use_toasts() -> Toasts {
    let list = use_reducer(ToastList::default);

    let notify = {
        let list = list.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            list.dispatch(ToastAction::Push(kind, message))
        })
    };

    let dismiss = {
        let list = list.clone();
        Callback::from(move |id: u64| list.dispatch(ToastAction::Dismiss(id)))
    };

    Toasts {
        items: list.items.clone(),
        notify,
        dismiss,
    }
}

/// Compare the ids that already have a dismiss timer with the toasts now on
/// screen. Returns `(to_start, to_cancel)`; toasts that keep their timer are
/// in neither list, so their countdown is not restarted.
pub fn reconcile_toast_timers(scheduled: &[u64], toasts: &[Toast]) -> (Vec<u64>, Vec<u64>) {
    let to_start = toasts
        .iter()
        .map(|toast| toast.id)
        .filter(|id| !scheduled.contains(id))
        .collect();
    let to_cancel = scheduled
        .iter()
        .copied()
        .filter(|id| !toasts.iter().any(|toast| toast.id == *id))
        .collect();
    (to_start, to_cancel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_start_from_the_requested_preset() {
        let state = SettingsState::new(PresetId::Balanced);
        assert_eq!(state.current, PresetId::Balanced.settings());
    }

    #[test]
    fn settings_reducer_applies_presets_and_edits() {
        let state = Rc::new(SettingsState::new(PresetId::Balanced));
        let state = state.reduce(SettingsAction::Load(PresetId::Aggressive));
        assert_eq!(state.current, PresetId::Aggressive.settings());

        let state = state.reduce(SettingsAction::Set(FieldName::ScopeAwm, 55));
        assert_eq!(state.current.scope_awm, 55);
        assert_eq!(state.current.overall, 180);
    }

    #[test]
    fn settings_reducer_keeps_record_on_bad_value() {
        let state = Rc::new(SettingsState::new(PresetId::Beginner));
        let next = state.clone().reduce(SettingsAction::Set(FieldName::Overall, 0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn toast_ids_are_unique_and_dismissable() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(ToastKind::Success, "a".into()));
        let list = list.reduce(ToastAction::Push(ToastKind::Success, "b".into()));
        assert_eq!(list.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1]);

        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].message, "b");

        let list = list.reduce(ToastAction::Push(ToastKind::Error, "c".into()));
        assert_eq!(list.items.last().map(|t| t.id), Some(2));
    }

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            message: format!("toast {}", id),
            kind: ToastKind::Success,
        }
    }

    #[test]
    fn pushing_a_toast_leaves_running_timers_alone() {
        let (start, cancel) = reconcile_toast_timers(&[], &[toast(0)]);
        assert_eq!((start, cancel), (vec![0], vec![]));

        // a second push only schedules the newcomer
        let (start, cancel) = reconcile_toast_timers(&[0], &[toast(0), toast(1)]);
        assert_eq!((start, cancel), (vec![1], vec![]));
    }

    #[test]
    fn dismissed_toasts_lose_their_timer() {
        let (start, cancel) = reconcile_toast_timers(&[0, 1, 2], &[toast(1)]);
        assert!(start.is_empty());
        assert_eq!(cancel, vec![0, 2]);
    }

    #[test]
    fn unchanged_list_needs_no_timer_work() {
        let toasts = [toast(3), toast(4)];
        let (start, cancel) = reconcile_toast_timers(&[3, 4], &toasts);
        assert!(start.is_empty() && cancel.is_empty());
    }

    #[test]
    fn every_toast_kind_has_a_style() {
        assert_eq!(ToastKind::Success.css_class(), "success");
        assert_eq!(ToastKind::Error.css_class(), "error");
    }
}
