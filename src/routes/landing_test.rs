use client::components::gift_card_tile::GiftCardTile;
use client::pages::landing::LandingPage;
use client::state::catalog::{FAQ_ENTRIES, GIFT_CARDS, INSTRUCTION_STEPS};
use client::util::format::format_amount;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

fn render_landing() -> String {
    Owner::new().with(|| view! { <LandingPage/> }.to_html())
}

#[test]
fn landing_exposes_section_anchors() {
    let html = render_landing();
    for anchor in ["cards", "howto", "faq"] {
        assert!(html.contains(&format!(r#"id="{anchor}""#)), "missing #{anchor}");
    }
}

#[test]
fn landing_renders_one_tile_per_card_in_order() {
    let html = render_landing();
    assert_eq!(html.matches(r#"class="gift-card""#).count(), GIFT_CARDS.len());

    let positions: Vec<usize> = GIFT_CARDS
        .iter()
        .map(|c| html.find(&format!(r#"data-card-id="{}""#, c.id)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn landing_passes_card_amount_and_description_through() {
    let html = render_landing();
    for card in GIFT_CARDS {
        assert!(html.contains(&format_amount(card.amount)));
        assert!(html.contains(card.description));
    }
}

#[test]
fn landing_initially_highlights_no_card() {
    let html = render_landing();
    assert!(!html.contains("gift-card--selected"));
}

#[test]
fn landing_renders_steps_in_order() {
    let html = render_landing();
    assert_eq!(html.matches(r#"class="howto__step""#).count(), INSTRUCTION_STEPS.len());

    let howto = &html[html.find(r#"id="howto""#).unwrap()..];
    let positions: Vec<usize> = INSTRUCTION_STEPS.iter().map(|s| howto.find(s.title).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn landing_renders_faq_entries() {
    let html = render_landing();
    for entry in FAQ_ENTRIES {
        assert!(html.contains(entry.question));
    }
}

#[test]
fn selected_tile_renders_highlight() {
    let html = Owner::new().with(|| {
        let card = GIFT_CARDS[1];
        view! { <GiftCardTile card=card selected=true on_select=Callback::new(|_: u32| {})/> }.to_html()
    });
    assert!(html.contains("gift-card--selected"));
    assert!(html.contains("2500 ₽"));
}
