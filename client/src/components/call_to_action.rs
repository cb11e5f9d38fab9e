//! Closing call-to-action band.

use leptos::prelude::*;

use crate::components::scroll_button::ScrollButton;
use crate::state::catalog::CARDS_SECTION;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="section section--dark cta">
            <div class="container cta__inner">
                <h2 class="cta__title">"Готовы сделать подарок?"</h2>
                <p class="cta__copy">
                    "Подарите возможность выбора из миллионов приложений, игр, песен, фильмов и многого другого."
                </p>
                <ScrollButton target=CARDS_SECTION label="Выбрать карту" variant="light"/>
            </div>
        </section>
    }
}
