use dioxus::prelude::*;

const ICON_CHEVRON_DOWN: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><path d="M6 9l6 6 6-6"/></svg>"#;
const ICON_CHEVRON_UP: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><path d="M6 15l6-6 6 6"/></svg>"#;

/// Shown on a collapsed group: click to reveal
#[component]
pub fn ExpandIcon() -> Element {
    rsx! {
        span {
            class: "section-glyph glyph-expand",
            title: "Show attributes",
            dangerous_inner_html: ICON_CHEVRON_DOWN,
        }
    }
}

/// Shown on an expanded group: click to hide
#[component]
pub fn CollapseIcon() -> Element {
    rsx! {
        span {
            class: "section-glyph glyph-collapse",
            title: "Hide attributes",
            dangerous_inner_html: ICON_CHEVRON_UP,
        }
    }
}
