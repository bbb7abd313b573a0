//! wasm-bindgen interface for Relentless page effects.
//!
//! ```javascript
//! import init, { RelentlessPage } from "./pkg/relentless_fx_wasm.js";
//! await init();
//! const page = new RelentlessPage();           // or new RelentlessPage({ ambient: { glow_hover_only: true } })
//! document.addEventListener("DOMContentLoaded", () => page.init());
//! ```

mod dom;
mod listener;
mod observer;
mod raf;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use relentless_fx_core::{Config, Element, PageEffects};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent};

pub use dom::{DomElement, DomPage};
pub use listener::EventListener;
pub use observer::IntersectionWatcher;
pub use raf::BrowserScheduler;

static LOGGER: Once = Once::new();

fn init_logging() {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::new(log::Level::Info)));
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Accepts `undefined`/`null` (defaults), a JSON string, or a plain object.
fn parse_config(config: JsValue) -> Result<Config, JsError> {
    if jsvalue_is_undefined_or_null(&config) {
        return Ok(Config::default());
    }
    if let Some(json) = config.as_string() {
        return Config::from_json(&json).map_err(|e| JsError::new(&e.to_string()));
    }
    swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))
}

struct Mounted {
    effects: Rc<RefCell<PageEffects<DomPage>>>,
    // Held so their observers stay connected until the mount is dropped.
    _counter_watcher: IntersectionWatcher,
    _reveal_watcher: IntersectionWatcher,
    listeners: Vec<EventListener>,
}

impl Mounted {
    fn attach(&mut self, page: &DomPage) {
        let fx = Rc::clone(&self.effects);
        self.listeners
            .extend(EventListener::attach(page.window(), "scroll", move |_| {
                fx.borrow_mut().on_scroll();
            }));

        let fx = Rc::clone(&self.effects);
        self.listeners.extend(EventListener::attach(
            page.document(),
            "mousemove",
            move |event: Event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    fx.borrow()
                        .on_mouse_move(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                }
            },
        ));

        let menu_button = self.effects.borrow().menu_button().cloned();
        if let Some(button) = menu_button {
            let fx = Rc::clone(&self.effects);
            self.listeners
                .extend(EventListener::attach(&button.0, "click", move |_| {
                    fx.borrow_mut().on_menu_click();
                }));
        }

        let anchors = self.effects.borrow().anchors().to_vec();
        for anchor in anchors {
            let fx = Rc::clone(&self.effects);
            let link = anchor.clone();
            self.listeners.extend(EventListener::attach(
                &anchor.0,
                "click",
                move |event: Event| {
                    let Some(href) = link.attribute("href") else {
                        return;
                    };
                    if fx.borrow_mut().on_anchor_click(&href).prevents_default() {
                        event.prevent_default();
                    }
                },
            ));
        }
    }
}

/// Page effects bound to the current document.
#[wasm_bindgen]
pub struct RelentlessPage {
    config: Config,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl RelentlessPage {
    /// Create an unmounted instance. Pass a config object, a JSON string, or
    /// undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<RelentlessPage, JsError> {
        console_error_panic_hook::set_once();
        init_logging();

        Ok(RelentlessPage {
            config: parse_config(config)?,
            mounted: None,
        })
    }

    /// Wire every effect into the document. Calling it again while mounted does nothing.
    pub fn init(&mut self) -> Result<(), JsError> {
        if self.mounted.is_some() {
            return Ok(());
        }
        let page = DomPage::from_window().map_err(|e| JsError::new(&e.to_string()))?;
        let scheduler = Rc::new(BrowserScheduler::new(page.window().clone()));
        let counter_watcher = IntersectionWatcher::new(self.config.counter.visibility());
        let reveal_watcher = IntersectionWatcher::new(self.config.reveal.visibility());

        let effects = PageEffects::init(
            page.clone(),
            &self.config,
            Rc::clone(&scheduler),
            scheduler,
            &counter_watcher,
            &reveal_watcher,
        );
        let mut mounted = Mounted {
            effects: Rc::new(RefCell::new(effects)),
            _counter_watcher: counter_watcher,
            _reveal_watcher: reveal_watcher,
            listeners: Vec::new(),
        };
        mounted.attach(&page);
        log::info!("mounted with {} listeners", mounted.listeners.len());

        self.mounted = Some(mounted);
        Ok(())
    }

    /// Remove every listener and stop both observers. Animations already running
    /// finish on their own.
    pub fn dispose(&mut self) {
        // Dropping the mount detaches listeners and disconnects both watchers.
        if let Some(mounted) = self.mounted.take() {
            log::info!("disposing {} listeners", mounted.listeners.len());
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Number of event listeners currently attached.
    #[wasm_bindgen(getter)]
    pub fn listener_count(&self) -> usize {
        self.mounted.as_ref().map_or(0, |m| m.listeners.len())
    }
}

/// Construct and mount in one call.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<RelentlessPage, JsError> {
    let mut page = RelentlessPage::new(config)?;
    page.init()?;
    Ok(page)
}

/// Crate version, for checking which build a page loaded.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
