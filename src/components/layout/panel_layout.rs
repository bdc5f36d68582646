use dioxus::prelude::*;

use crate::components::layout::PreferenceToggle;
use crate::components::navigation::CollapsibleGroup;
use crate::config::PanelConfig;
use crate::hooks::use_preference_store;

#[component]
pub fn PanelLayout(config: PanelConfig) -> Element {
    let store = use_preference_store(config.housing_zones);
    let zones_shown = store.current().is_enabled();
    let title = config.title.clone();

    rsx! {
        div { class: "panel-container",
            div { class: "map-controls",
                PreferenceToggle { store }
                p {
                    class: "map-legend",
                    if zones_shown { "Housing zones shown" } else { "Housing zones hidden" }
                }
            }

            aside { class: "sidebar",
                header { class: "sidebar-header",
                    h2 { "{title}" }
                }

                for section in config.sections.iter() {
                    {
                        let name = section.name.clone();
                        let items: Vec<Element> = section
                            .attributes
                            .iter()
                            .map(|attribute| rsx! {
                                div { class: "attribute-row",
                                    label { class: "attribute-label", "{attribute}" }
                                }
                            })
                            .collect();

                        rsx! {
                            CollapsibleGroup {
                                key: "{name}",
                                name: name.clone(),
                                collapsed: section.collapsed,
                                items,
                            }
                        }
                    }
                }
            }
        }
    }
}
