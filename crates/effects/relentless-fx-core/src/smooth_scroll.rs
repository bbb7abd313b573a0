//! Smooth in-page anchor scrolling.

use crate::config::NavConfig;
use crate::host::{Element, Page};

/// Result of activating an in-page anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorOutcome {
    /// Bare `#`: default navigation is left alone.
    Ignored,
    /// Default navigation was suppressed but no element matched the fragment.
    Unresolved,
    /// The viewport is scrolling to this document offset.
    ScrollTo(f64),
}

impl AnchorOutcome {
    /// Whether the host should cancel the click's default navigation.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorOutcome::Ignored)
    }
}

/// Document offset to scroll to so `target` sits just below the fixed nav bar.
/// `rect_top` is the target's viewport-relative top at click time.
#[inline]
pub fn target_position(rect_top: f64, scroll_offset: f64, nav_height: f64) -> f64 {
    rect_top + scroll_offset - nav_height
}

/// Resolves in-page anchors and scrolls to them below the fixed nav bar. Closing the
/// mobile menu afterwards is left to the caller (see `NavigationController::close_menu`).
#[derive(Debug)]
pub struct SmoothScrollController<E> {
    nav: Option<E>,
}

impl<E: Element> SmoothScrollController<E> {
    pub fn new(nav: Option<E>) -> Self {
        Self { nav }
    }

    pub fn from_page<P: Page<Element = E>>(page: &P, nav: &NavConfig) -> Self {
        Self::new(page.query(&nav.nav_selector))
    }

    /// Handles activation of an anchor whose `href` starts with `#`.
    pub fn on_anchor_click<P: Page<Element = E>>(&self, page: &P, href: &str) -> AnchorOutcome {
        if href == "#" {
            return AnchorOutcome::Ignored;
        }
        let Some(target) = page.query(href) else {
            log::debug!("anchor {href:?} has no target");
            return AnchorOutcome::Unresolved;
        };

        let nav_height = self.nav.as_ref().map_or(0.0, |nav| nav.offset_height());
        let top = target_position(
            target.bounding_rect().top,
            page.scroll_offset(),
            nav_height,
        );
        page.smooth_scroll_to(top);
        AnchorOutcome::ScrollTo(top)
    }
}
