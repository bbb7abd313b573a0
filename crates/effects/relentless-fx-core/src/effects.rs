//! PageEffects: builds every effect from a page and routes host events to them.
//!
//! The components share no state; this type only owns them so a host adapter has a
//! single object to forward scroll, pointer and click events into.

use std::rc::Rc;

use crate::ambient::AmbientEffects;
use crate::config::Config;
use crate::counter::CounterAnimator;
use crate::host::{FrameScheduler, Page, Timer};
use crate::nav::{MenuState, NavState, NavigationController};
use crate::reveal::RevealAnimator;
use crate::smooth_scroll::{AnchorOutcome, SmoothScrollController};
use crate::watcher::VisibilityWatcher;

pub struct PageEffects<P: Page> {
    page: P,
    nav: NavigationController<P::Element>,
    smooth_scroll: SmoothScrollController<P::Element>,
    ambient: AmbientEffects<P::Element>,
    anchors: Vec<P::Element>,
}

impl<P: Page> std::fmt::Debug for PageEffects<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageEffects")
            .field("nav_state", &self.nav.state())
            .field("anchors", &self.anchors.len())
            .field("glow_cards", &self.ambient.cards().len())
            .finish_non_exhaustive()
    }
}

impl<P: Page> PageEffects<P> {
    /// Wires every effect against `page`.
    ///
    /// Counters and reveals register with their own watchers; frame callbacks and
    /// reveal timeouts go through `scheduler`/`timer`. Host events are not attached
    /// here: the adapter forwards them to the `on_*` methods.
    pub fn init<S, T, W>(
        page: P,
        cfg: &Config,
        scheduler: Rc<S>,
        timer: Rc<T>,
        counter_watcher: &W,
        reveal_watcher: &W,
    ) -> Self
    where
        S: FrameScheduler + 'static,
        T: Timer + 'static,
        W: VisibilityWatcher<P::Element>,
    {
        let nav = NavigationController::from_page(&page, cfg.nav.clone());

        let counters = page.query_all(&cfg.counter.selector);
        CounterAnimator::new(scheduler, cfg.counter.clone()).observe(&counters, counter_watcher);

        let revealable = page.query_all(&cfg.reveal.selector());
        RevealAnimator::new(timer, cfg.reveal.clone()).init(&revealable, reveal_watcher);

        let smooth_scroll = SmoothScrollController::from_page(&page, &cfg.nav);
        let anchors = page.query_all(&cfg.anchors.selector);
        let ambient = AmbientEffects::from_page(&page, cfg.ambient.clone());

        log::info!(
            "page effects ready: {} counters, {} reveal targets, {} anchors, {} glow cards",
            counters.len(),
            revealable.len(),
            anchors.len(),
            ambient.cards().len()
        );

        Self {
            page,
            nav,
            smooth_scroll,
            ambient,
            anchors,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Anchors that should forward clicks to [`on_anchor_click`](Self::on_anchor_click).
    pub fn anchors(&self) -> &[P::Element] {
        &self.anchors
    }

    /// The mobile menu trigger, if the page has one.
    pub fn menu_button(&self) -> Option<&P::Element> {
        self.nav.menu_button()
    }

    pub fn nav_state(&self) -> NavState {
        self.nav.state()
    }

    pub fn menu_state(&self) -> MenuState {
        self.nav.menu_state()
    }

    /// Viewport scrolled: nav style and parallax.
    pub fn on_scroll(&mut self) -> NavState {
        let offset = self.page.scroll_offset();
        self.ambient.on_scroll(offset);
        self.nav.on_scroll(offset)
    }

    pub fn on_mouse_move(&self, client_x: f64, client_y: f64) -> usize {
        self.ambient.on_mouse_move(client_x, client_y)
    }

    pub fn on_menu_click(&mut self) -> MenuState {
        self.nav.toggle_menu()
    }

    /// Anchor activated. A real scroll also closes the mobile menu, open or not.
    pub fn on_anchor_click(&mut self, href: &str) -> AnchorOutcome {
        let outcome = self.smooth_scroll.on_anchor_click(&self.page, href);
        if let AnchorOutcome::ScrollTo(_) = outcome {
            self.nav.close_menu();
        }
        outcome
    }
}
