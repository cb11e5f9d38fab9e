use super::*;

#[test]
fn tile_class_unselected_has_no_highlight() {
    assert_eq!(tile_class(false), "gift-card");
}

#[test]
fn tile_class_selected_adds_highlight_modifier() {
    assert!(tile_class(true).split(' ').any(|c| c == "gift-card--selected"));
    assert!(tile_class(true).starts_with("gift-card "));
}
