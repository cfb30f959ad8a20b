use serde::Deserialize;

use crate::error::Result;

/// Storage key the preference is persisted under.
pub const STORAGE_KEY: &str = "dark-mode";

/// Attribute on `<html>` a host page can use to override any of the defaults.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dark_class: String,
    pub toggle_selector: String,
    pub icon_selector: String,
    pub light_glyph: String,
    pub dark_glyph: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dark_class: "dark".to_owned(),
            toggle_selector: ".theme-toggle button".to_owned(),
            icon_selector: "i".to_owned(),
            light_glyph: "fa-moon".to_owned(),
            dark_glyph: "fa-sun".to_owned(),
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses the attribute value if there is one, keeping the defaults when
    /// it is absent or malformed.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(Config::from_json) {
            Some(Ok(config)) => {
                tracing::debug!("theme config: {config:?}");
                config
            }
            Some(Err(e)) => {
                tracing::warn!("ignoring {CONFIG_ATTRIBUTE}: {e}");
                Config::default()
            }
            None => Config::default(),
        }
    }
}
