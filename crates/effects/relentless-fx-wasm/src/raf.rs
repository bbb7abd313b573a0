//! Frame and timeout scheduling on the browser event loop.

use gloo_timers::callback::Timeout;
use relentless_fx_core::{FrameScheduler, Timer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// `requestAnimationFrame` on one window, `setTimeout` through `gloo-timers`.
///
/// Callbacks are one-shot closures handed to JS and timeouts are forgotten once
/// scheduled, so nothing is retained here and a pending callback outlives a disposed
/// page harmlessly.
#[derive(Clone, Debug)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for BrowserScheduler {
    fn now(&self) -> f64 {
        self.window
            .performance()
            .map_or(0.0, |performance| performance.now())
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let js = Closure::once_into_js(move |timestamp_ms: f64| callback(timestamp_ms));
        if let Err(err) = self.window.request_animation_frame(js.unchecked_ref()) {
            log::debug!("requestAnimationFrame failed: {err:?}");
        }
    }
}

impl Timer for BrowserScheduler {
    fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delay = delay_ms.max(0.0).round() as u32;
        Timeout::new(delay, callback).forget();
    }
}
