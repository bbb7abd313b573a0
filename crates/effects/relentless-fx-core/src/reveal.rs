//! Scroll-reveal of content blocks.
//!
//! Elements are tagged with the pending class up front and promoted to the visible
//! class once seen. Elements that arrive in the same visibility notification are
//! staggered by their position in it, so a row of cards fades in one after another.

use std::rc::Rc;

use crate::config::RevealConfig;
use crate::host::{Element, Timer};
use crate::watcher::VisibilityWatcher;

/// Delay before the entry at `index` of a notification is revealed.
#[inline]
pub fn stagger_delay(index: usize, stagger_ms: f64) -> f64 {
    index as f64 * stagger_ms
}

pub struct RevealAnimator<T> {
    timer: Rc<T>,
    cfg: RevealConfig,
}

impl<T> std::fmt::Debug for RevealAnimator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealAnimator")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

impl<T: Timer + 'static> RevealAnimator<T> {
    pub fn new(timer: Rc<T>, cfg: RevealConfig) -> Self {
        Self { timer, cfg }
    }

    /// Tags `elements` as animatable and reveals each on first sight.
    pub fn init<E, W>(&self, elements: &[E], watcher: &W)
    where
        E: Element,
        W: VisibilityWatcher<E>,
    {
        for el in elements {
            el.add_class(&self.cfg.pending_class);
        }
        if elements.is_empty() {
            return;
        }

        let timer = Rc::clone(&self.timer);
        let stagger_ms = self.cfg.stagger_ms;
        let visible_class = self.cfg.visible_class.clone();
        watcher.watch(
            elements,
            Box::new(move |batch| {
                for sighting in batch {
                    let target = sighting.target;
                    let class = visible_class.clone();
                    timer.set_timeout(
                        stagger_delay(sighting.index, stagger_ms),
                        Box::new(move || target.add_class(&class)),
                    );
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_linear_in_index() {
        assert_eq!(stagger_delay(0, 100.0), 0.0);
        assert_eq!(stagger_delay(1, 100.0), 100.0);
        assert_eq!(stagger_delay(4, 100.0), 400.0);
    }
}
