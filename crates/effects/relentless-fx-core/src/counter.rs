//! Animated numeric counters.
//!
//! A counter element declares its target in attributes; once it is first seen, a
//! [`CounterTask`] eases the displayed value from 0 to the target over
//! `duration_ms`, writing `prefix + value + suffix` on every frame. Each element runs
//! its own frame chain and stops rescheduling once progress reaches 1, at which point
//! the text shows the exact target.

use std::rc::Rc;

use crate::config::CounterConfig;
use crate::easing::{ease_out_cubic, progress};
use crate::error::CounterSpecError;
use crate::format::{format_counter_value, parse_leading_float};
use crate::host::{Element, FrameScheduler};
use crate::watcher::VisibilityWatcher;

/// What a counter displays.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub decimal: bool,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            decimal: false,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Reads a spec from element attributes. Only an exact `"true"` enables decimal mode.
    pub fn from_element<E: Element>(
        element: &E,
        cfg: &CounterConfig,
    ) -> Result<Self, CounterSpecError> {
        let raw = element
            .attribute(&cfg.target_attr)
            .ok_or_else(|| CounterSpecError::MissingTarget {
                attr: cfg.target_attr.clone(),
            })?;
        let target =
            parse_leading_float(&raw).ok_or(CounterSpecError::InvalidTarget { value: raw })?;

        Ok(Self {
            target,
            decimal: element.attribute(&cfg.decimal_attr).as_deref() == Some("true"),
            prefix: element.attribute(&cfg.prefix_attr).unwrap_or_default(),
            suffix: element.attribute(&cfg.suffix_attr).unwrap_or_default(),
        })
    }

    /// Text for a raw (already eased) value.
    pub fn render(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_counter_value(value, self.decimal),
            self.suffix
        )
    }
}

/// One frame of counter output.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub progress: f64,
    pub done: bool,
}

/// A running counter animation.
#[derive(Clone, Debug)]
pub struct CounterTask {
    pub spec: CounterSpec,
    pub start: f64,
    pub duration: f64,
}

impl CounterTask {
    pub fn new(spec: CounterSpec, start: f64, duration: f64) -> Self {
        Self {
            spec,
            start,
            duration,
        }
    }

    pub fn value_at(&self, now: f64) -> f64 {
        let p = progress(now, self.start, self.duration);
        if p >= 1.0 {
            // eased(1) == 1 exactly, but skip the multiply so the last frame is the target.
            return self.spec.target;
        }
        self.spec.target * ease_out_cubic(p)
    }

    pub fn frame(&self, now: f64) -> CounterFrame {
        let p = progress(now, self.start, self.duration);
        CounterFrame {
            text: self.spec.render(self.value_at(now)),
            progress: p,
            done: p >= 1.0,
        }
    }
}

/// Starts counter tasks on a frame scheduler.
pub struct CounterAnimator<S> {
    scheduler: Rc<S>,
    cfg: CounterConfig,
}

impl<S> Clone for CounterAnimator<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Rc::clone(&self.scheduler),
            cfg: self.cfg.clone(),
        }
    }
}

impl<S> std::fmt::Debug for CounterAnimator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterAnimator")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

impl<S: FrameScheduler + 'static> CounterAnimator<S> {
    pub fn new(scheduler: Rc<S>, cfg: CounterConfig) -> Self {
        Self { scheduler, cfg }
    }

    /// Starts animating `element` from 0 toward its declared target.
    pub fn animate<E: Element>(&self, element: E) -> Result<(), CounterSpecError> {
        let spec = CounterSpec::from_element(&element, &self.cfg)?;
        let task = CounterTask::new(spec, self.scheduler.now(), self.cfg.duration_ms);
        schedule_frame(Rc::clone(&self.scheduler), element, task);
        Ok(())
    }

    /// Watches `elements` and animates each one the first time it becomes visible.
    /// Elements with a malformed target are skipped and keep their static text.
    pub fn observe<E, W>(&self, elements: &[E], watcher: &W)
    where
        E: Element,
        W: VisibilityWatcher<E>,
    {
        if elements.is_empty() {
            return;
        }
        let animator = self.clone();
        watcher.watch(
            elements,
            Box::new(move |batch| {
                for sighting in batch {
                    if let Err(err) = animator.animate(sighting.target) {
                        log::debug!("counter skipped: {err}");
                    }
                }
            }),
        );
    }
}

fn schedule_frame<S, E>(scheduler: Rc<S>, element: E, task: CounterTask)
where
    S: FrameScheduler + 'static,
    E: Element,
{
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |now| {
        let frame = task.frame(now);
        element.set_text(&frame.text);
        if !frame.done {
            schedule_frame(next, element, task);
        }
    }));
}
