//! `web-sys` implementations of the core `Element` and `Page` capabilities.

use relentless_fx_core::{Element, FxError, Page, Rect};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// A DOM element handle. Equality is JS identity.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(pub web_sys::Element);

impl DomElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl Element for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_style_property(&self, name: &str, value: &str) {
        if let Some(html) = self.html() {
            if let Err(err) = html.style().set_property(name, value) {
                log::debug!("style {name} rejected: {err:?}");
            }
        }
    }

    fn bounding_rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn offset_height(&self) -> f64 {
        self.html().map_or(0.0, |html| f64::from(html.offset_height()))
    }
}

/// The current window and its document.
#[derive(Clone, Debug)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn from_window() -> Result<Self, FxError> {
        let window = web_sys::window().ok_or(FxError::HostUnavailable("window"))?;
        let document = window
            .document()
            .ok_or(FxError::HostUnavailable("document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for DomPage {
    type Element = DomElement;

    fn query(&self, selector: &str) -> Option<DomElement> {
        // Invalid selectors (e.g. `#1st`) throw in the browser; treat them as no match.
        match self.document.query_selector(selector) {
            Ok(found) => found.map(DomElement),
            Err(err) => {
                log::debug!("selector {selector:?} rejected: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<DomElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::debug!("selector {selector:?} rejected");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(DomElement)
            .collect()
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}
