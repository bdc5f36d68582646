use dioxus::prelude::*;

use crate::hooks::PreferenceStore;
use crate::types::DisplayPreference;

/// Label and state class for the housing zones toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAppearance {
    pub label: &'static str,
    pub class: &'static str,
}

impl ToggleAppearance {
    pub fn for_preference(preference: DisplayPreference) -> Self {
        match preference {
            DisplayPreference::Enabled => Self {
                label: "Switch off housing zones",
                class: "enabled",
            },
            // Any other value is used as the class as-is
            other => Self {
                label: "Switch on housing zones",
                class: other.as_str(),
            },
        }
    }
}

#[component]
pub fn PreferenceToggle(store: PreferenceStore) -> Element {
    let appearance = ToggleAppearance::for_preference(store.current());
    let class = format!("btn btn-outline-dark {}", appearance.class);
    let label = appearance.label;

    rsx! {
        form {
            class: "housing-zones-toggle",
            onsubmit: move |evt| store.on_submit.call(evt),

            button {
                r#type: "submit",
                class: "{class}",
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_appearance() {
        let appearance = ToggleAppearance::for_preference(DisplayPreference::Enabled);
        assert_eq!(appearance.label, "Switch off housing zones");
        assert_eq!(appearance.class, "enabled");
    }

    #[test]
    fn test_disabled_appearance_uses_value_as_class() {
        let appearance = ToggleAppearance::for_preference(DisplayPreference::Disabled);
        assert_eq!(appearance.label, "Switch on housing zones");
        assert_eq!(appearance.class, DisplayPreference::Disabled.as_str());
    }
}
