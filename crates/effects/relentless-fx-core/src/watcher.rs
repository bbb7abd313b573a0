//! Single-shot visibility watching.
//!
//! A [`VisibilityWatcher`] reports each watched target at most once: the first time it
//! crosses the watcher's threshold. After that the target is no longer watched, so a
//! target that scrolls out and back in is never reported again. Implementations route
//! raw host notifications through a [`VisibilityLatch`], which owns that guarantee.

use serde::{Deserialize, Serialize};

/// Intersection options for one watcher instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibilityOptions {
    /// Fraction of the target that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// CSS margin applied to the viewport before testing (e.g. `"0px 0px -50px 0px"`).
    pub root_margin: String,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

/// A target reported visible for the first time.
#[derive(Clone, Debug, PartialEq)]
pub struct Sighting<E> {
    pub target: E,
    /// Position of the target's entry within the host notification that carried it.
    pub index: usize,
}

pub type VisibleCallback<E> = Box<dyn FnMut(Vec<Sighting<E>>)>;

/// Watches targets for their first crossing of a visibility threshold.
pub trait VisibilityWatcher<E> {
    /// Starts watching `targets`. `on_visible` receives each non-empty batch of first
    /// sightings in delivery order; every target appears in at most one batch.
    fn watch(&self, targets: &[E], on_visible: VisibleCallback<E>);
}

/// Remembers which targets have fired and filters raw `(target, intersecting)` entries
/// down to first sightings.
#[derive(Debug)]
pub struct VisibilityLatch<E> {
    fired: Vec<E>,
}

impl<E> Default for VisibilityLatch<E> {
    fn default() -> Self {
        Self { fired: Vec::new() }
    }
}

impl<E: Clone + PartialEq> VisibilityLatch<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self, target: &E) -> bool {
        self.fired.contains(target)
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }

    /// Admits one host notification. Entries that are not intersecting, or whose target
    /// already fired, are dropped; the rest are recorded and returned with their entry
    /// index.
    pub fn admit<I>(&mut self, entries: I) -> Vec<Sighting<E>>
    where
        I: IntoIterator<Item = (E, bool)>,
    {
        let mut batch = Vec::new();
        for (index, (target, intersecting)) in entries.into_iter().enumerate() {
            if !intersecting || self.has_fired(&target) {
                continue;
            }
            self.fired.push(target.clone());
            batch.push(Sighting { target, index });
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_per_target() {
        let mut latch = VisibilityLatch::new();
        let first = latch.admit([(1, true), (2, false), (3, true)]);
        assert_eq!(
            first,
            vec![
                Sighting { target: 1, index: 0 },
                Sighting { target: 3, index: 2 }
            ]
        );

        let second = latch.admit([(1, true), (2, true), (3, true)]);
        assert_eq!(second, vec![Sighting { target: 2, index: 1 }]);
        assert!(latch.admit([(1, true), (2, true)]).is_empty());
        assert_eq!(latch.fired_count(), 3);
    }

    #[test]
    fn duplicate_in_one_notification_fires_once() {
        let mut latch = VisibilityLatch::new();
        let batch = latch.admit([(7, true), (7, true)]);
        assert_eq!(batch.len(), 1);
    }
}
