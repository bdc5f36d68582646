pub mod use_display_preference;

pub use use_display_preference::{use_preference_store, PreferenceStore};
