//! Panel configuration: which attribute sections the sidebar shows and the
//! initial housing zones preference.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::types::DisplayPreference;

static BUNDLED_CONFIG: &str = include_str!("../assets/panel.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub title: String,
    pub housing_zones: DisplayPreference,
    pub sections: Vec<SectionConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Building attributes".to_string(),
            housing_zones: DisplayPreference::default(),
            sections: Vec::new(),
        }
    }
}

impl PanelConfig {
    pub fn from_json(src: &str) -> ConfigResult<Self> {
        let config: PanelConfig = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration shipped in `assets/panel.json`
    pub fn bundled() -> ConfigResult<Self> {
        Self::from_json(BUNDLED_CONFIG)
    }

    /// Section names key the rendered list, so they must be present and unique
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.name.trim().is_empty() {
                return Err(ConfigError::EmptySectionName(index));
            }
            if !seen.insert(section.name.as_str()) {
                return Err(ConfigError::DuplicateSection(section.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = PanelConfig::bundled().unwrap();
        assert!(!config.sections.is_empty());
        assert_eq!(config.housing_zones, DisplayPreference::Disabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = PanelConfig::from_json("{}").unwrap();
        assert_eq!(config, PanelConfig::default());

        let config = PanelConfig::from_json(
            r#"{ "housing_zones": "enabled", "sections": [{ "name": "Age" }] }"#,
        )
        .unwrap();
        assert_eq!(config.title, "Building attributes");
        assert!(config.housing_zones.is_enabled());
        assert_eq!(config.sections[0].collapsed, None);
        assert!(config.sections[0].attributes.is_empty());
    }

    #[test]
    fn test_rejects_blank_section_name() {
        let err = PanelConfig::from_json(
            r#"{ "sections": [{ "name": "Age" }, { "name": "  " }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptySectionName(1)));
    }

    #[test]
    fn test_rejects_duplicate_section() {
        let err = PanelConfig::from_json(
            r#"{ "sections": [{ "name": "Size" }, { "name": "Size" }] }"#,
        )
        .unwrap_err();
        match err {
            ConfigError::DuplicateSection(name) => assert_eq!(name, "Size"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_unknown_preference() {
        let err = PanelConfig::from_json(r#"{ "housing_zones": "sometimes" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
