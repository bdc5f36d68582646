pub mod panel_layout;
pub mod preference_toggle;

pub use panel_layout::PanelLayout;
pub use preference_toggle::PreferenceToggle;
