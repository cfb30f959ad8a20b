use tracing::Level;
use wasm_bindgen::prelude::*;

mod config;
mod controller;
mod dom;
mod error;
mod state;

use controller::ThemeController;
use dom::DomHost;

fn main() {
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("logger failed to init");

    if let Err(e) = schedule() {
        tracing::error!("theme toggle disabled: {e}");
    }
}

/// Runs `start` once the document is parsed.
fn schedule() -> error::Result<()> {
    let document = dom::document()?;
    if dom::parsing_done(&document.ready_state()) {
        return start();
    }
    let callback = Closure::once_into_js(move || {
        if let Err(e) = start() {
            tracing::error!("theme toggle disabled: {e}");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}

fn start() -> error::Result<()> {
    let config = dom::load_config()?;
    let host = DomHost::locate(&config)?;
    let toggle = host.toggle().clone();

    let mut controller = ThemeController::new(host, config);
    controller.initialize()?;

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        if let Err(e) = controller.on_toggle_activated() {
            tracing::error!("toggling theme: {e}");
        }
    });
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
