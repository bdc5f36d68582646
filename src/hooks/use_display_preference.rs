use dioxus::prelude::*;
use tracing::debug;

use crate::types::DisplayPreference;

/// Shared housing zones preference plus the handler that changes it.
///
/// Owned by the host view and handed to consumers as a prop. Consumers read
/// `value` and forward user actions to `on_submit` without knowing what it does.
#[derive(Clone, Copy, PartialEq)]
pub struct PreferenceStore {
    pub value: Signal<DisplayPreference>,
    pub on_submit: Callback<FormEvent>,
}

pub fn use_preference_store(initial: DisplayPreference) -> PreferenceStore {
    let mut value = use_signal(|| initial);

    let on_submit = use_callback(move |evt: FormEvent| {
        evt.prevent_default();
        let next = value.peek().toggled();
        debug!(preference = %next, "housing zones preference changed");
        value.set(next);
    });

    PreferenceStore { value, on_submit }
}

impl PreferenceStore {
    pub fn current(&self) -> DisplayPreference {
        *self.value.read()
    }
}
