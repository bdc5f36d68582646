//! Building attribute panel widgets for Dioxus
//!
//! - `PreferenceToggle`: submit button bound to the housing zones preference
//! - `CollapsibleGroup`: header/body container that counts and hides its rows
//! - `PanelLayout`: sidebar host that wires both to a `PanelConfig`

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod types;

pub use components::layout::{PanelLayout, PreferenceToggle};
pub use components::navigation::CollapsibleGroup;
pub use config::{PanelConfig, SectionConfig};
pub use error::{ConfigError, ConfigResult};
pub use hooks::{use_preference_store, PreferenceStore};
pub use types::{DisplayPreference, Glyph, GroupState};
