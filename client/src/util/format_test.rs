use super::*;
use crate::state::catalog::GIFT_CARDS;

#[test]
fn format_amount_passes_value_through() {
    assert_eq!(format_amount(1000), "1000 ₽");
    assert_eq!(format_amount(2500), "2500 ₽");
}

#[test]
fn format_amount_matches_every_catalog_card() {
    for card in GIFT_CARDS {
        assert_eq!(format_amount(card.amount), format!("{} ₽", card.amount));
    }
}

#[test]
fn card_alt_text_names_the_amount() {
    assert_eq!(card_alt_text(5000), "Apple Gift Card 5000 ₽");
}

#[test]
fn copyright_line_includes_year() {
    assert_eq!(copyright_line(2026), "© 2026 Apple Gift Card. Все права защищены.");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2024);
}
