//! Navigation bar styling and the mobile menu.

use serde::{Deserialize, Serialize};

use crate::config::NavConfig;
use crate::host::{Element, Page};

/// Nav bar style, a pure function of the latest scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavState {
    #[default]
    Normal,
    Scrolled,
}

impl NavState {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavState::Scrolled
        } else {
            NavState::Normal
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Owns the nav bar, the menu trigger and the menu links. Any of them may be missing
/// from the page; the matching behaviour is then a no-op.
#[derive(Debug)]
pub struct NavigationController<E> {
    nav: Option<E>,
    menu_button: Option<E>,
    menu_links: Option<E>,
    cfg: NavConfig,
    state: NavState,
    last_offset: f64,
}

impl<E: Element> NavigationController<E> {
    pub fn new(
        nav: Option<E>,
        menu_button: Option<E>,
        menu_links: Option<E>,
        cfg: NavConfig,
    ) -> Self {
        Self {
            nav,
            menu_button,
            menu_links,
            cfg,
            state: NavState::Normal,
            last_offset: 0.0,
        }
    }

    pub fn from_page<P: Page<Element = E>>(page: &P, cfg: NavConfig) -> Self {
        Self::new(
            page.query(&cfg.nav_selector),
            page.query(&cfg.menu_button_selector),
            page.query(&cfg.menu_links_selector),
            cfg,
        )
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Re-evaluates the nav style for `offset`. Level-triggered: the class is written
    /// on every call, so a missed event is corrected by the next one.
    pub fn on_scroll(&mut self, offset: f64) -> NavState {
        self.state = NavState::from_offset(offset, self.cfg.scroll_threshold);
        self.last_offset = offset;
        if let Some(nav) = &self.nav {
            match self.state {
                NavState::Scrolled => nav.add_class(&self.cfg.scrolled_class),
                NavState::Normal => nav.remove_class(&self.cfg.scrolled_class),
            }
        }
        self.state
    }

    pub fn has_menu_button(&self) -> bool {
        self.menu_button.is_some()
    }

    pub fn menu_button(&self) -> Option<&E> {
        self.menu_button.as_ref()
    }

    pub fn menu_state(&self) -> MenuState {
        let open = self
            .menu_links
            .as_ref()
            .or(self.menu_button.as_ref())
            .is_some_and(|el| el.has_class(&self.cfg.active_class));
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// Trigger click: flips the links and the trigger together. Without a trigger on
    /// the page there is nothing to click, so nothing changes.
    pub fn toggle_menu(&mut self) -> MenuState {
        if self.menu_button.is_none() {
            return self.menu_state();
        }
        let next = match self.menu_state() {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        for el in self.menu_links.iter().chain(self.menu_button.iter()) {
            match next {
                MenuState::Open => el.add_class(&self.cfg.active_class),
                MenuState::Closed => el.remove_class(&self.cfg.active_class),
            }
        }
        next
    }
    /// Clears `active` from the links and the trigger, whatever the current state.
    pub fn close_menu(&mut self) -> MenuState {
        for el in self.menu_links.iter().chain(self.menu_button.iter()) {
            el.remove_class(&self.cfg.active_class);
        }
        MenuState::Closed
    }
}
