//! In-memory host for exercising `relentless-fx-core` without a browser.
//!
//! - [`FakeElement`]: shared node handle recording classes, text writes and styles
//! - [`FakePage`]: selector registry plus a scroll position
//! - [`ManualScheduler`]: frames and timeouts that only advance when a test says so
//! - [`ManualWatcher`]: visibility notifications delivered by hand

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use relentless_fx_core::{
    Element, FrameScheduler, Page, Rect, Timer, VisibilityLatch, VisibilityOptions,
    VisibilityWatcher, VisibleCallback,
};

#[derive(Debug, Default)]
struct FakeNode {
    id: Option<String>,
    selectors: Vec<String>,
    attributes: HashMap<String, String>,
    classes: Vec<String>,
    text_history: Vec<String>,
    style: HashMap<String, String>,
    rect: Rect,
    offset_height: f64,
}

/// Shared handle; clones refer to the same node and compare equal.
#[derive(Clone, Debug, Default)]
pub struct FakeElement(Rc<RefCell<FakeNode>>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the element match `#id`.
    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    /// Makes the element match `selector` verbatim (e.g. `.step` or `[data-target]`).
    pub fn matching(self, selector: &str) -> Self {
        self.0.borrow_mut().selectors.push(selector.to_string());
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_rect(self, rect: Rect) -> Self {
        self.set_rect(rect);
        self
    }

    pub fn with_offset_height(self, height: f64) -> Self {
        self.0.borrow_mut().offset_height = height;
        self
    }

    pub fn set_rect(&self, rect: Rect) {
        self.0.borrow_mut().rect = rect;
    }

    pub fn matches(&self, selector: &str) -> bool {
        let node = self.0.borrow();
        if let Some(id) = selector.strip_prefix('#') {
            return node.id.as_deref() == Some(id);
        }
        node.selectors.iter().any(|s| s == selector)
    }

    /// Latest text written, if any.
    pub fn text(&self) -> Option<String> {
        self.0.borrow().text_history.last().cloned()
    }

    /// Every text write in order.
    pub fn text_history(&self) -> Vec<String> {
        self.0.borrow().text_history.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.0.borrow().style.get(name).cloned()
    }
}

impl Element for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text_history.push(text.to_string());
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .style
            .insert(name.to_string(), value.to_string());
    }

    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }
}

/// Document stand-in. Selector lists (`a, b`) match the union in insertion order.
#[derive(Debug, Default)]
pub struct FakePage {
    elements: RefCell<Vec<FakeElement>>,
    scroll_offset: Cell<f64>,
    scrolls: RefCell<Vec<f64>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element` to the document and hands back a handle to it.
    pub fn add(&self, element: FakeElement) -> FakeElement {
        self.elements.borrow_mut().push(element.clone());
        element
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.scroll_offset.set(offset);
    }

    /// Targets passed to `smooth_scroll_to`, in order.
    pub fn smooth_scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }
}

impl Page for FakePage {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        let parts: Vec<&str> = selector.split(',').map(str::trim).collect();
        self.elements
            .borrow()
            .iter()
            .filter(|el| parts.iter().any(|part| el.matches(part)))
            .cloned()
            .collect()
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }
}

struct PendingTimer {
    due: f64,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

/// Clock, frame queue and timeout queue advanced explicitly by the test.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<f64>,
    frames: RefCell<Vec<Box<dyn FnOnce(f64)>>>,
    timers: RefCell<Vec<PendingTimer>>,
    next_seq: Cell<u64>,
    fired: RefCell<Vec<f64>>,
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now.get())
            .field("pending_frames", &self.pending_frames())
            .field("pending_timers", &self.pending_timers())
            .finish()
    }
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn set_now(&self, now: f64) {
        self.now.set(now);
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Runs every frame callback queued so far at timestamp `t`. Callbacks that
    /// request another frame land in the next batch. Returns how many ran.
    pub fn frame(&self, t: f64) -> usize {
        self.now.set(t);
        let batch = std::mem::take(&mut *self.frames.borrow_mut());
        let count = batch.len();
        for callback in batch {
            callback(t);
        }
        count
    }

    /// Steps frames `step_ms` apart until no frame is pending or `max_frames` ran.
    /// Returns the number of frame batches.
    pub fn run_frames(&self, step_ms: f64, max_frames: usize) -> usize {
        let mut batches = 0;
        while self.pending_frames() > 0 && batches < max_frames {
            self.frame(self.now.get() + step_ms);
            batches += 1;
        }
        batches
    }

    /// Moves the clock to `t`, firing due timeouts in due order (ties by scheduling
    /// order). Returns how many fired.
    pub fn advance_to(&self, t: f64) -> usize {
        let mut count = 0;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let pos = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= t)
                    .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
                    .map(|(pos, _)| pos);
                pos.map(|pos| timers.remove(pos))
            };
            let Some(timer) = next else { break };
            self.now.set(timer.due);
            self.fired.borrow_mut().push(timer.due);
            (timer.callback)();
            count += 1;
        }
        self.now.set(t);
        count
    }

    /// Due times of every timeout fired so far.
    pub fn fired_timers(&self) -> Vec<f64> {
        self.fired.borrow().clone()
    }
}

impl FrameScheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        self.frames.borrow_mut().push(callback);
    }
}

impl Timer for ManualScheduler {
    fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.timers.borrow_mut().push(PendingTimer {
            due: self.now.get() + delay_ms.max(0.0),
            seq,
            callback,
        });
    }
}

struct Registration<E> {
    targets: Vec<E>,
    latch: VisibilityLatch<E>,
    callback: Option<VisibleCallback<E>>,
}

/// Visibility watcher whose notifications are delivered by the test.
pub struct ManualWatcher<E> {
    options: VisibilityOptions,
    registrations: RefCell<Vec<Registration<E>>>,
}

impl<E> std::fmt::Debug for ManualWatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualWatcher")
            .field("options", &self.options)
            .field("registrations", &self.registrations.borrow().len())
            .finish()
    }
}

impl<E: Clone + PartialEq> ManualWatcher<E> {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            registrations: RefCell::new(Vec::new()),
        }
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }

    /// Targets still being watched (registered and not yet fired).
    pub fn watched(&self) -> usize {
        self.registrations
            .borrow()
            .iter()
            .map(|reg| reg.targets.len() - reg.latch.fired_count())
            .sum()
    }

    /// Delivers one notification of `(target, intersecting)` entries. Each
    /// registration sees only its own targets, in the order given.
    pub fn deliver(&self, entries: &[(E, bool)]) {
        let count = self.registrations.borrow().len();
        for i in 0..count {
            let (batch, callback) = {
                let mut regs = self.registrations.borrow_mut();
                let reg = &mut regs[i];
                let own: Vec<(E, bool)> = entries
                    .iter()
                    .filter(|(target, _)| reg.targets.contains(target))
                    .cloned()
                    .collect();
                let batch = reg.latch.admit(own);
                if batch.is_empty() {
                    continue;
                }
                (batch, reg.callback.take())
            };
            if let Some(mut callback) = callback {
                callback(batch);
                self.registrations.borrow_mut()[i].callback = Some(callback);
            }
        }
    }

    /// Delivers `targets` as one notification, all intersecting.
    pub fn show(&self, targets: &[E]) {
        let entries: Vec<(E, bool)> = targets.iter().cloned().map(|t| (t, true)).collect();
        self.deliver(&entries);
    }
}

impl<E: Element> VisibilityWatcher<E> for ManualWatcher<E> {
    fn watch(&self, targets: &[E], on_visible: VisibleCallback<E>) {
        self.registrations.borrow_mut().push(Registration {
            targets: targets.to_vec(),
            latch: VisibilityLatch::new(),
            callback: Some(on_visible),
        });
    }
}
