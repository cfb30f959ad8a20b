use crate::config::{Config, STORAGE_KEY};
use crate::error::Result;
use crate::state::{self, ThemeState};

/// The page and storage operations the controller needs. `dom::DomHost` is the
/// browser implementation.
pub trait ThemeHost {
    fn stored_preference(&self, key: &str) -> Result<Option<String>>;
    fn store_preference(&mut self, key: &str, value: &str) -> Result<()>;
    fn system_prefers_dark(&self) -> Result<bool>;
    fn set_root_class(&mut self, class: &str, present: bool) -> Result<()>;
    /// Flips `class` on the root element and returns whether it is now present.
    fn toggle_root_class(&mut self, class: &str) -> Result<bool>;
    fn swap_icon_glyph(&mut self, remove: &str, add: &str) -> Result<()>;
}

pub struct ThemeController<H> {
    host: H,
    config: Config,
}

impl<H: ThemeHost> ThemeController<H> {
    pub fn new(host: H, config: Config) -> Self {
        ThemeController { host, config }
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Applies the stored preference, or the system one when nothing is
    /// stored. Storage is left untouched.
    pub fn initialize(&mut self) -> Result<ThemeState> {
        let stored = self.host.stored_preference(STORAGE_KEY)?;
        // the media query is only consulted when nothing is stored
        let system_dark = match stored {
            Some(_) => false,
            None => self.host.system_prefers_dark()?,
        };
        let state = state::compute_initial_state(stored.as_deref(), system_dark);
        tracing::info!(
            "initial theme: {state} ({})",
            if stored.is_some() { "stored" } else { "system" }
        );
        self.apply_theme(state)?;
        Ok(state)
    }

    pub fn apply_theme(&mut self, state: ThemeState) -> Result<()> {
        let dark_class = &self.config.dark_class;
        self.host.set_root_class(dark_class, state.is_dark())?;
        self.host
            .swap_icon_glyph(state.other_glyph(&self.config), state.glyph(&self.config))
    }

    pub fn on_toggle_activated(&mut self) -> Result<ThemeState> {
        let state = ThemeState::from(self.host.toggle_root_class(&self.config.dark_class)?);
        tracing::info!("theme toggled to {state}");
        self.host
            .store_preference(STORAGE_KEY, state.as_stored())?;
        self.apply_theme(state)?;
        Ok(state)
    }
}
