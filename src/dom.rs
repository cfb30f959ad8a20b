use web_sys::{Document, Element, Storage, Window};

use crate::config::{Config, CONFIG_ATTRIBUTE};
use crate::controller::ThemeHost;
use crate::error::{self, Error, Result};

const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

pub fn root_element(document: &Document) -> Result<Element> {
    document.document_element().ok_or(Error::NoRootElement)
}

/// Reads the overrides from `<html data-theme-config="...">`, if any.
pub fn load_config() -> Result<Config> {
    let root = root_element(&document()?)?;
    Ok(Config::from_attribute(
        root.get_attribute(CONFIG_ATTRIBUTE).as_deref(),
    ))
}

/// Whether `DOMContentLoaded` has already fired for this `readyState`.
pub fn parsing_done(ready_state: &str) -> bool {
    ready_state != "loading"
}

fn query(parent: &Element, selector: &str) -> Result<Element> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| Error::MissingElement {
            selector: selector.to_owned(),
        })
}

pub struct DomHost {
    window: Window,
    storage: Option<Storage>,
    root: Element,
    toggle: Element,
    icon: Element,
}

impl DomHost {
    /// Finds the root element, the toggle control and its icon. Any of them
    /// missing is an error.
    pub fn locate(config: &Config) -> Result<Self> {
        let window = window()?;
        let document = window.document().ok_or(Error::NoDocument)?;
        let root = root_element(&document)?;
        let toggle = query(&root, &config.toggle_selector)?;
        let icon = query(&toggle, &config.icon_selector)?;
        // a thrown SecurityError stops the toggle, a missing object reads as empty
        let storage = window
            .local_storage()
            .map_err(|e| Error::Storage(error::describe(&e)))?;
        if storage.is_none() {
            tracing::warn!("no localStorage, preference will not persist");
        }
        Ok(DomHost {
            window,
            storage,
            root,
            toggle,
            icon,
        })
    }

    pub fn toggle(&self) -> &Element {
        &self.toggle
    }
}

impl ThemeHost for DomHost {
    fn stored_preference(&self, key: &str) -> Result<Option<String>> {
        match self.storage {
            Some(ref storage) => Ok(storage.get_item(key)?),
            None => Ok(None),
        }
    }

    fn store_preference(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| Error::Storage("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(error::describe(&e)))
    }

    fn system_prefers_dark(&self) -> Result<bool> {
        Ok(self
            .window
            .match_media(PREFERS_DARK)?
            .map(|q| q.matches())
            .unwrap_or(false))
    }

    fn set_root_class(&mut self, class: &str, present: bool) -> Result<()> {
        let classes = self.root.class_list();
        if present {
            classes.add_1(class)?;
        } else {
            classes.remove_1(class)?;
        }
        Ok(())
    }

    fn toggle_root_class(&mut self, class: &str) -> Result<bool> {
        Ok(self.root.class_list().toggle(class)?)
    }

    fn swap_icon_glyph(&mut self, remove: &str, add: &str) -> Result<()> {
        let classes = self.icon.class_list();
        classes.remove_1(remove)?;
        classes.add_1(add)?;
        Ok(())
    }
}
