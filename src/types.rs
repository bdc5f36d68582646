use std::fmt;

use serde::{Deserialize, Serialize};

/// Display preference for an optional map layer (housing zones)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayPreference {
    Enabled,
    #[default]
    Disabled,
}

impl DisplayPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayPreference::Enabled => "enabled",
            DisplayPreference::Disabled => "disabled",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, DisplayPreference::Enabled)
    }

    /// The value a single toggle moves to
    pub fn toggled(self) -> Self {
        match self {
            DisplayPreference::Enabled => DisplayPreference::Disabled,
            DisplayPreference::Disabled => DisplayPreference::Enabled,
        }
    }
}

impl fmt::Display for DisplayPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header indicator for a collapsible group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Contents hidden, click to reveal
    Reveal,
    /// Contents shown, click to hide
    Hide,
}

/// Local visibility state of one collapsible group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupState {
    collapsed: bool,
}

impl GroupState {
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    /// Groups start collapsed unless told otherwise
    pub fn from_prop(collapsed: Option<bool>) -> Self {
        Self::new(collapsed.unwrap_or(true))
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn glyph(&self) -> Glyph {
        if self.collapsed {
            Glyph::Reveal
        } else {
            Glyph::Hide
        }
    }
}

impl Default for GroupState {
    fn default() -> Self {
        Self::from_prop(None)
    }
}
