//! Hero parallax and cursor-tracked card glow.

use crate::config::AmbientConfig;
use crate::host::{Element, Page, Rect};

/// Vertical translation of the hero layer for a scroll offset.
#[inline]
pub fn parallax_offset(scroll_offset: f64, factor: f64) -> f64 {
    scroll_offset * factor
}

pub fn parallax_transform(scroll_offset: f64, factor: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_offset, factor))
}

/// Pointer position relative to the top-left corner of `rect`.
#[inline]
pub fn glow_position(client_x: f64, client_y: f64, rect: &Rect) -> (f64, f64) {
    (client_x - rect.left, client_y - rect.top)
}

pub const MOUSE_X_VAR: &str = "--mouse-x";
pub const MOUSE_Y_VAR: &str = "--mouse-y";

#[derive(Debug)]
pub struct AmbientEffects<E> {
    hero: Option<E>,
    cards: Vec<E>,
    cfg: AmbientConfig,
}

impl<E: Element> AmbientEffects<E> {
    pub fn new(hero: Option<E>, cards: Vec<E>, cfg: AmbientConfig) -> Self {
        Self { hero, cards, cfg }
    }

    pub fn from_page<P: Page<Element = E>>(page: &P, cfg: AmbientConfig) -> Self {
        Self::new(
            page.query(&cfg.hero_selector),
            page.query_all(&cfg.glow_selector()),
            cfg,
        )
    }

    pub fn cards(&self) -> &[E] {
        &self.cards
    }

    pub fn on_scroll(&self, offset: f64) {
        if let Some(hero) = &self.hero {
            hero.set_style_property(
                "transform",
                &parallax_transform(offset, self.cfg.parallax_factor),
            );
        }
    }

    /// Publishes the pointer position to every glow card, or only to cards under the
    /// pointer when `glow_hover_only` is set. Returns how many cards were updated.
    pub fn on_mouse_move(&self, client_x: f64, client_y: f64) -> usize {
        let mut updated = 0;
        for card in &self.cards {
            let rect = card.bounding_rect();
            if self.cfg.glow_hover_only && !rect.contains(client_x, client_y) {
                continue;
            }
            let (x, y) = glow_position(client_x, client_y, &rect);
            card.set_style_property(MOUSE_X_VAR, &format!("{x}px"));
            card.set_style_property(MOUSE_Y_VAR, &format!("{y}px"));
            updated += 1;
        }
        updated
    }
}
