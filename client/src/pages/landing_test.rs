use super::*;
use crate::state::catalog::GIFT_CARDS;
use crate::util::scroll::scroll_to_section;

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    Owner::new().with(f)
}

fn highlighted(selection: RwSignal<SelectionState>) -> Vec<u32> {
    let state = selection.get_untracked();
    GIFT_CARDS.iter().filter(|c| state.is_selected(c.id)).map(|c| c.id).collect()
}

#[test]
fn card_click_selects_card() {
    with_owner(|| {
        let selection = RwSignal::new(SelectionState::default());
        assert!(highlighted(selection).is_empty());
        apply_card_click(selection, 1);
        assert_eq!(highlighted(selection), vec![1]);
    });
}

#[test]
fn card_click_moves_highlight_between_cards() {
    with_owner(|| {
        let selection = RwSignal::new(SelectionState::default());
        apply_card_click(selection, 1);
        apply_card_click(selection, 2);
        assert_eq!(highlighted(selection), vec![2]);
    });
}

#[test]
fn repeated_click_keeps_selection() {
    with_owner(|| {
        let selection = RwSignal::new(SelectionState::default());
        apply_card_click(selection, 2);
        apply_card_click(selection, 2);
        assert_eq!(selection.get_untracked().selected(), Some(2));
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn cta_scroll_leaves_selection_untouched() {
    with_owner(|| {
        let selection = RwSignal::new(SelectionState::default());
        apply_card_click(selection, 3);
        scroll_to_section(crate::state::catalog::CARDS_SECTION);
        assert_eq!(selection.get_untracked().selected(), Some(3));
    });
}
