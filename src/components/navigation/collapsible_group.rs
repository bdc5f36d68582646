use dioxus::prelude::*;
use tracing::debug;

use crate::components::icons::{CollapseIcon, ExpandIcon};
use crate::types::{Glyph, GroupState};

/// Header count text, e.g. `(3 attributes)`
pub fn count_label(count: usize) -> String {
    format!("({count} attributes)")
}

/// Labelled group of attribute rows with a clickable header.
///
/// The body stays mounted in both states; only its class changes. `collapsed`
/// sets the initial state and defaults to collapsed.
#[component]
pub fn CollapsibleGroup(name: String, collapsed: Option<bool>, items: Vec<Element>) -> Element {
    let mut state = use_signal(|| GroupState::from_prop(collapsed));

    let current = *state.read();
    let count = count_label(items.len());
    let header_name = name.clone();

    rsx! {
        section {
            class: if current.is_collapsed() { "data-section collapsed" } else { "data-section" },

            div {
                class: "section-header",
                onclick: move |_| {
                    state.write().toggle();
                    debug!(group = %header_name, collapsed = state.peek().is_collapsed(), "toggled group");
                },

                h3 { class: "section-title", "{name}" }
                span { class: "section-count", "{count}" }
                {match current.glyph() {
                    Glyph::Reveal => rsx! { ExpandIcon {} },
                    Glyph::Hide => rsx! { CollapseIcon {} },
                }}
            }

            div {
                class: if current.is_collapsed() { "section-body collapse" } else { "section-body" },
                {items.iter().cloned()}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "(0 attributes)");
        assert_eq!(count_label(1), "(1 attributes)");
        assert_eq!(count_label(12), "(12 attributes)");
    }
}
