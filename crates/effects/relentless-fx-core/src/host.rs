//! Host capabilities the effects are written against.
//!
//! The browser adapter implements these over `web-sys`; tests use in-memory fakes.
//! Every method is infallible from the caller's point of view: a host that cannot
//! honour a request drops it.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// True when `(x, y)` lies inside the box (edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

/// A styled node the effects can read attributes from and write presentation to.
///
/// Handles are cheap to clone and compare by identity.
pub trait Element: Clone + PartialEq + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_text(&self, text: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Sets an inline style property, custom properties (`--name`) included.
    fn set_style_property(&self, name: &str, value: &str);
    fn bounding_rect(&self) -> Rect;
    fn offset_height(&self) -> f64;
}

/// The document and viewport.
pub trait Page {
    type Element: Element;

    /// First element matching `selector`; `None` for no match or an invalid selector.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    /// All elements matching `selector` in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;
    /// Starts an animated scroll of the viewport to the document offset `top`.
    fn smooth_scroll_to(&self, top: f64);
}

/// "Call me on the next frame" primitive.
pub trait FrameScheduler {
    /// Current time on the same clock as frame timestamps (milliseconds).
    fn now(&self) -> f64;
    /// Runs `callback` once on the next frame with that frame's timestamp.
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>);
}

/// One-shot delayed callbacks.
pub trait Timer {
    fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>);
}
