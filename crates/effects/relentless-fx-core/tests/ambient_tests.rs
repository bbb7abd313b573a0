use relentless_fx_core::ambient::{MOUSE_X_VAR, MOUSE_Y_VAR};
use relentless_fx_core::{AmbientConfig, AmbientEffects, Rect};
use relentless_test_fixtures::{FakeElement, FakePage};

fn page() -> (FakePage, FakeElement, Vec<FakeElement>) {
    let page = FakePage::new();
    let hero = page.add(FakeElement::new().matching(".hero-bg"));
    let cards = vec![
        page.add(
            FakeElement::new()
                .matching(".problem-card")
                .with_rect(Rect::new(0.0, 0.0, 100.0, 100.0)),
        ),
        page.add(
            FakeElement::new()
                .matching(".step")
                .with_rect(Rect::new(200.0, 50.0, 100.0, 100.0)),
        ),
        page.add(
            FakeElement::new()
                .matching(".impact-card")
                .with_rect(Rect::new(400.0, 300.0, 120.0, 80.0)),
        ),
    ];
    // Not a glow card.
    page.add(FakeElement::new().matching(".state-tag"));
    (page, hero, cards)
}

#[test]
fn parallax_moves_hero_at_three_tenths() {
    let (page, hero, _) = page();
    let fx = AmbientEffects::from_page(&page, AmbientConfig::default());

    fx.on_scroll(0.0);
    assert_eq!(hero.style("transform").as_deref(), Some("translateY(0px)"));
    fx.on_scroll(500.0);
    assert_eq!(hero.style("transform").as_deref(), Some("translateY(150px)"));
}

#[test]
fn parallax_without_hero_is_a_no_op() {
    let page = FakePage::new();
    let fx = AmbientEffects::from_page(&page, AmbientConfig::default());
    fx.on_scroll(100.0);
    assert!(fx.cards().is_empty());
}

#[test]
fn glow_updates_every_card_relative_to_its_box() {
    let (page, _, cards) = page();
    let fx = AmbientEffects::from_page(&page, AmbientConfig::default());
    assert_eq!(fx.cards().len(), 3);

    assert_eq!(fx.on_mouse_move(250.0, 75.0), 3);
    assert_eq!(cards[0].style(MOUSE_X_VAR).as_deref(), Some("250px"));
    assert_eq!(cards[0].style(MOUSE_Y_VAR).as_deref(), Some("75px"));
    assert_eq!(cards[1].style(MOUSE_X_VAR).as_deref(), Some("50px"));
    assert_eq!(cards[1].style(MOUSE_Y_VAR).as_deref(), Some("25px"));
    assert_eq!(cards[2].style(MOUSE_X_VAR).as_deref(), Some("-150px"));
    assert_eq!(cards[2].style(MOUSE_Y_VAR).as_deref(), Some("-225px"));
}

#[test]
fn glow_reads_rect_at_event_time() {
    let (page, _, cards) = page();
    let fx = AmbientEffects::from_page(&page, AmbientConfig::default());
    cards[0].set_rect(Rect::new(10.5, 20.0, 100.0, 100.0));
    fx.on_mouse_move(20.0, 20.0);
    assert_eq!(cards[0].style(MOUSE_X_VAR).as_deref(), Some("9.5px"));
    assert_eq!(cards[0].style(MOUSE_Y_VAR).as_deref(), Some("0px"));
}

#[test]
fn hover_only_glow_skips_cards_away_from_pointer() {
    let (page, _, cards) = page();
    let cfg = AmbientConfig {
        glow_hover_only: true,
        ..AmbientConfig::default()
    };
    let fx = AmbientEffects::from_page(&page, cfg);

    assert_eq!(fx.on_mouse_move(250.0, 75.0), 1);
    assert_eq!(cards[1].style(MOUSE_X_VAR).as_deref(), Some("50px"));
    assert_eq!(cards[0].style(MOUSE_X_VAR), None);
    assert_eq!(cards[2].style(MOUSE_X_VAR), None);

    assert_eq!(fx.on_mouse_move(900.0, 900.0), 0);
}
