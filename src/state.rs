use std::fmt;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeState {
    Light,
    Dark,
}

impl ThemeState {
    pub fn is_dark(self) -> bool {
        self == ThemeState::Dark
    }

    /// Persisted encoding, `"true"` for dark.
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Icon class shown in this state: the sun offers a way out of dark mode,
    /// the moon a way into it.
    pub fn glyph(self, config: &Config) -> &str {
        match self {
            ThemeState::Dark => &config.dark_glyph,
            ThemeState::Light => &config.light_glyph,
        }
    }

    pub fn other_glyph(self, config: &Config) -> &str {
        next_state(self).glyph(config)
    }
}

impl From<bool> for ThemeState {
    fn from(dark: bool) -> Self {
        if dark {
            ThemeState::Dark
        } else {
            ThemeState::Light
        }
    }
}

impl From<ThemeState> for bool {
    fn from(state: ThemeState) -> Self {
        state.is_dark()
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThemeState::Light => write!(f, "light"),
            ThemeState::Dark => write!(f, "dark"),
        }
    }
}

/// Only the exact text `"true"` means dark.
pub fn parse_stored(s: &str) -> bool {
    s == "true"
}

pub fn compute_initial_state(stored: Option<&str>, system_prefers_dark: bool) -> ThemeState {
    match stored {
        Some(s) => parse_stored(s).into(),
        None => system_prefers_dark.into(),
    }
}

pub fn next_state(current: ThemeState) -> ThemeState {
    match current {
        ThemeState::Light => ThemeState::Dark,
        ThemeState::Dark => ThemeState::Light,
    }
}
