//! Clickable tile for one gift-card denomination.
//!
//! DESIGN
//! ======
//! The tile does not own selection; it reports clicks through `on_select`
//! and renders the highlight from the `selected` signal it is given.

#[cfg(test)]
#[path = "gift_card_tile_test.rs"]
mod gift_card_tile_test;

use leptos::prelude::*;

use crate::state::catalog::GiftCard;
use crate::util::format::{card_alt_text, format_amount};

/// A denomination tile. Clicking anywhere on it selects the card.
#[component]
pub fn GiftCardTile(card: GiftCard, #[prop(into)] selected: Signal<bool>, on_select: Callback<u32>) -> impl IntoView {
    let id = card.id;

    view! {
        <article
            class=move || tile_class(selected.get())
            attr:data-card-id=id.to_string()
            on:click=move |_| on_select.run(id)
        >
            <div class="gift-card__media">
                <img class="gift-card__image" src=card.image alt=card_alt_text(card.amount)/>
            </div>
            <div class="gift-card__body">
                <h3 class="gift-card__amount">{format_amount(card.amount)}</h3>
                <p class="gift-card__description">{card.description}</p>
                <button class="gift-card__choose" type="button">"Выбрать"</button>
            </div>
        </article>
    }
}

/// CSS classes for a tile; selected tiles get the highlight ring.
pub(crate) fn tile_class(selected: bool) -> &'static str {
    if selected { "gift-card gift-card--selected" } else { "gift-card" }
}
