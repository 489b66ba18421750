//! Browser entry point.

mod dom;
mod events;

use chrono::Datelike;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub use dom::DomPage;

use crate::config::{SiteConfig, DEFAULT_CONFIG_FILE};
use crate::error::{FolioError, Result};
use crate::fetch::{DataSource, HttpSource};
use crate::sections::load_all;
use crate::visit::{log_visit, HttpVisitTransport};

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move || spawn_boot(window));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        spawn_boot(window);
    }
    Ok(())
}

fn spawn_boot(window: Window) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = boot(window).await {
            log::error!("[web] startup failed: {}", e);
        }
    });
}

/// `folio.toml` next to the page, or defaults.
async fn load_config(page_url: &str) -> SiteConfig {
    let source = match HttpSource::new(page_url, "") {
        Ok(source) => source,
        Err(e) => {
            log::warn!("[web] {}, using default config", e);
            return SiteConfig::default();
        }
    };
    match source.fetch_text(DEFAULT_CONFIG_FILE).await {
        Ok(raw) => SiteConfig::from_toml_str(&raw).unwrap_or_else(|e| {
            log::warn!("[web] {}, using default config", e);
            SiteConfig::default()
        }),
        Err(e) => {
            log::info!("[web] no site config ({}), using defaults", e);
            SiteConfig::default()
        }
    }
}

/// Content first, then interactions, then the visit counter in the background.
/// A listener that fails to attach is logged and does not stop the rest.
async fn boot(window: Window) -> Result<()> {
    let document = window
        .document()
        .ok_or_else(|| FolioError::Dom("no document".into()))?;
    let page_url = window.location().href()?;
    let config = load_config(&page_url).await;

    let source = HttpSource::new(&page_url, &config.asset_prefix())?;
    let page = DomPage::new(document.clone());
    load_all(&source, &page, &config, chrono::Local::now().year()).await;

    if let Err(e) = events::init_mobile_menu(&document) {
        log::error!("[web] mobile menu not wired: {}", e);
    }
    if let Err(e) = events::init_smooth_scroll(&window, &document, &config.interaction) {
        log::error!("[web] smooth scroll not wired: {}", e);
    }
    if let Err(e) = events::init_scroll_observer(&window, &document, &config.interaction) {
        log::error!("[web] scroll observer not wired: {}", e);
    }

    if config.counter_enabled() {
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let transport = HttpVisitTransport::new(&config.ip_lookup_url, &config.counter_endpoint);
        wasm_bindgen_futures::spawn_local(async move {
            log_visit(&transport, &page, &user_agent).await;
        });
    } else {
        log::info!("[web] visit counter disabled");
    }
    Ok(())
}
