//! `IntersectionObserver`-backed visibility watching.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use relentless_fx_core::{VisibilityLatch, VisibilityOptions, VisibilityWatcher, VisibleCallback};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::DomElement;

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Registration {
    observer: IntersectionObserver,
    // Kept alive for as long as the observer may call it.
    _closure: ObserverClosure,
}

/// One observer per `watch` call, all sharing this watcher's options.
///
/// Every notification runs through a [`VisibilityLatch`] and fired targets are
/// unobserved, so a target is reported at most once. Browsers without
/// `IntersectionObserver` never report anything.
pub struct IntersectionWatcher {
    options: VisibilityOptions,
    registrations: RefCell<Vec<Registration>>,
}

impl std::fmt::Debug for IntersectionWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntersectionWatcher")
            .field("options", &self.options)
            .field("observers", &self.registrations.borrow().len())
            .finish()
    }
}

impl IntersectionWatcher {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            registrations: RefCell::new(Vec::new()),
        }
    }

    /// Stops every observer created by this watcher.
    pub fn disconnect(&self) {
        for reg in self.registrations.borrow_mut().drain(..) {
            reg.observer.disconnect();
        }
    }

    fn init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.options.threshold));
        init.set_root_margin(&self.options.root_margin);
        init
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl VisibilityWatcher<DomElement> for IntersectionWatcher {
    fn watch(&self, targets: &[DomElement], mut on_visible: VisibleCallback<DomElement>) {
        let latch = Rc::new(RefCell::new(VisibilityLatch::<DomElement>::new()));
        let closure: ObserverClosure = Closure::new(
            move |entries: Array, observer: IntersectionObserver| {
                let raw = entries.iter().filter_map(|entry| {
                    let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                    Some((DomElement(entry.target()), entry.is_intersecting()))
                });
                let batch = latch.borrow_mut().admit(raw.collect::<Vec<_>>());
                for sighting in &batch {
                    observer.unobserve(&sighting.target.0);
                }
                if !batch.is_empty() {
                    on_visible(batch);
                }
            },
        );

        let observer = match IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            &self.init(),
        ) {
            Ok(observer) => observer,
            Err(err) => {
                log::debug!("IntersectionObserver unavailable: {err:?}");
                return;
            }
        };
        for target in targets {
            observer.observe(&target.0);
        }
        self.registrations.borrow_mut().push(Registration {
            observer,
            _closure: closure,
        });
    }
}
