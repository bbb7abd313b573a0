use std::rc::Rc;

use relentless_fx_core::{
    AnchorOutcome, Config, Element, FrameScheduler, MenuState, NavState, Page, PageEffects,
    Rect,
};
use relentless_test_fixtures::{FakeElement, FakePage, ManualScheduler, ManualWatcher};

struct Harness {
    effects: PageEffects<FakePage>,
    scheduler: Rc<ManualScheduler>,
    counter_watcher: ManualWatcher<FakeElement>,
    reveal_watcher: ManualWatcher<FakeElement>,
    nav: FakeElement,
    button: FakeElement,
    hero: FakeElement,
    counter: FakeElement,
    cards: Vec<FakeElement>,
}

fn harness(cfg: Config) -> Harness {
    let page = FakePage::new();
    let nav = page.add(FakeElement::new().matching(".nav").with_offset_height(80.0));
    let button = page.add(FakeElement::new().matching(".mobile-menu-btn"));
    page.add(FakeElement::new().matching(".nav-links"));
    page.add(FakeElement::new().matching("a[href^=\"#\"]").with_attr("href", "#impact"));
    page.add(FakeElement::new().matching("a[href^=\"#\"]").with_attr("href", "#"));
    let hero = page.add(FakeElement::new().matching(".hero-bg"));
    let counter = page.add(
        FakeElement::new()
            .matching("[data-target]")
            .with_attr("data-target", "50000")
            .with_attr("data-suffix", "+"),
    );
    let cards = vec![
        page.add(FakeElement::new().matching(".problem-card")),
        page.add(
            FakeElement::new()
                .matching(".impact-card")
                .with_id("impact")
                .with_rect(Rect::new(0.0, 900.0, 300.0, 200.0)),
        ),
        page.add(FakeElement::new().matching(".methodology-note")),
    ];

    let scheduler = ManualScheduler::new();
    let counter_watcher = ManualWatcher::new(cfg.counter.visibility());
    let reveal_watcher = ManualWatcher::new(cfg.reveal.visibility());
    let effects = PageEffects::init(
        page,
        &cfg,
        Rc::clone(&scheduler),
        Rc::clone(&scheduler),
        &counter_watcher,
        &reveal_watcher,
    );

    Harness {
        effects,
        scheduler,
        counter_watcher,
        reveal_watcher,
        nav,
        button,
        hero,
        counter,
        cards,
    }
}

#[test]
fn init_wires_counters_and_reveals_to_separate_watchers() {
    let h = harness(Config::default());

    assert_eq!(h.counter_watcher.watched(), 1);
    assert_eq!(h.counter_watcher.options().threshold, 0.3);
    assert_eq!(h.reveal_watcher.watched(), 3);
    assert!(h.cards.iter().all(|c| c.has_class("animate-on-scroll")));
    assert!(!h.counter.has_class("animate-on-scroll"));
    assert_eq!(h.effects.anchors().len(), 2);
    assert!(h.effects.menu_button().is_some());

    h.counter_watcher.show(&[h.counter.clone()]);
    h.scheduler.run_frames(16.0, 1000);
    assert_eq!(h.counter.text().as_deref(), Some("50,000+"));

    h.reveal_watcher.show(&h.cards);
    h.scheduler.advance_to(h.scheduler.now() + 250.0);
    assert!(h.cards.iter().all(|c| c.has_class("visible")));
}

#[test]
fn scroll_updates_nav_and_parallax_together() {
    let mut h = harness(Config::default());

    h.effects.page().set_scroll_offset(120.0);
    assert_eq!(h.effects.on_scroll(), NavState::Scrolled);
    assert!(h.nav.has_class("scrolled"));
    assert_eq!(h.hero.style("transform").as_deref(), Some("translateY(36px)"));

    h.effects.page().set_scroll_offset(0.0);
    assert_eq!(h.effects.on_scroll(), NavState::Normal);
    assert!(!h.nav.has_class("scrolled"));
    assert_eq!(h.effects.nav_state(), NavState::Normal);
}

#[test]
fn menu_and_anchor_routing() {
    let mut h = harness(Config::default());

    assert_eq!(h.effects.on_menu_click(), MenuState::Open);
    assert!(h.button.has_class("active"));

    h.effects.page().set_scroll_offset(100.0);
    assert_eq!(
        h.effects.on_anchor_click("#impact"),
        AnchorOutcome::ScrollTo(920.0)
    );
    assert_eq!(h.effects.menu_state(), MenuState::Closed);
    assert_eq!(h.effects.on_anchor_click("#"), AnchorOutcome::Ignored);
    assert_eq!(h.effects.page().smooth_scrolls(), vec![920.0]);
}

#[test]
fn only_a_real_scroll_closes_the_menu() {
    let mut h = harness(Config::default());
    let links = h.effects.page().query(".nav-links").unwrap();

    h.effects.on_menu_click();
    assert_eq!(
        h.effects.on_anchor_click("#missing-id"),
        AnchorOutcome::Unresolved
    );
    assert_eq!(h.effects.menu_state(), MenuState::Open);
    assert!(links.has_class("active") && h.button.has_class("active"));

    assert_eq!(h.effects.on_anchor_click("#"), AnchorOutcome::Ignored);
    assert_eq!(h.effects.menu_state(), MenuState::Open);

    h.effects.on_anchor_click("#impact");
    assert!(!links.has_class("active") && !h.button.has_class("active"));

    // Closed menu stays closed and the next trigger click reopens it.
    h.effects.on_anchor_click("#impact");
    assert_eq!(h.effects.menu_state(), MenuState::Closed);
    assert_eq!(h.effects.on_menu_click(), MenuState::Open);
}

#[test]
fn mouse_move_reaches_glow_cards() {
    let h = harness(Config::default());
    // .problem-card and .impact-card glow; .methodology-note does not.
    assert_eq!(h.effects.on_mouse_move(10.0, 910.0), 2);
    assert_eq!(h.cards[1].style("--mouse-y").as_deref(), Some("10px"));
    assert_eq!(h.cards[2].style("--mouse-y"), None);
}

#[test]
fn partial_config_overrides_keep_defaults() {
    let cfg = Config::from_json(
        r#"{ "counter": { "duration_ms": 1000 }, "ambient": { "glow_hover_only": true } }"#,
    )
    .unwrap();
    assert_eq!(cfg.counter.duration_ms, 1000.0);
    assert_eq!(cfg.counter.threshold, 0.3);
    assert!(cfg.ambient.glow_hover_only);
    assert_eq!(cfg.ambient.parallax_factor, 0.3);
    assert_eq!(cfg.nav.scroll_threshold, 50.0);
    assert_eq!(cfg.reveal.selectors.len(), 6);
    assert_eq!(
        cfg.reveal.selector(),
        ".problem-card, .step, .impact-card, .efficiency-stat, .state-tag, .methodology-note"
    );

    let h = harness(cfg);
    h.counter_watcher.show(&[h.counter.clone()]);
    assert_eq!(h.scheduler.run_frames(100.0, 1000), 10);
}

#[test]
fn malformed_config_is_an_error() {
    let err = Config::from_json(r#"{ "counter": { "duration_ms": "slow" } }"#).unwrap_err();
    assert!(err.to_string().starts_with("config error:"));
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}
