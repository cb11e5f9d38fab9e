//! Highlighted gift-card selection.
//!
//! DESIGN
//! ======
//! The only mutable state on the page. It moves from "nothing selected" to
//! "card N selected" and from one card to another; there is no transition
//! back to "nothing selected". Nothing is persisted across reloads.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use super::catalog::{GiftCard, find_card};

/// Which card, if any, is currently highlighted.
///
/// Held in an `RwSignal` owned by the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<u32>,
}

impl SelectionState {
    /// Highlight card `id`. Re-selecting the current card is a no-op.
    pub fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn selected(self) -> Option<u32> {
        self.selected
    }

    pub fn is_selected(self, id: u32) -> bool {
        self.selected == Some(id)
    }

    /// Catalog record of the selected card.
    ///
    /// `None` when nothing is selected or when the id is not in the catalog.
    pub fn selected_card(self) -> Option<&'static GiftCard> {
        self.selected.and_then(find_card)
    }
}
