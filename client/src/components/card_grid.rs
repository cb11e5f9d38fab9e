//! Card selection section (`#cards`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the page's selection signal from context so each tile can derive its
//! own highlight. Writes go back through the page's `on_select` callback.

use leptos::prelude::*;

use crate::components::gift_card_tile::GiftCardTile;
use crate::state::catalog::{CARDS_SECTION, GIFT_CARDS};
use crate::state::selection::SelectionState;

/// One tile per catalog card, in catalog order.
#[component]
pub fn CardGrid(on_select: Callback<u32>) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    view! {
        <section id=CARDS_SECTION class="section cards">
            <div class="container">
                <h2 class="section__title">"Выберите номинал"</h2>
                <div class="cards__grid">
                    {GIFT_CARDS
                        .iter()
                        .map(|card| {
                            let id = card.id;
                            let selected = Signal::derive(move || selection.get().is_selected(id));
                            view! { <GiftCardTile card=*card selected=selected on_select=on_select/> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
