//! Hero banner with the primary call to action.

use leptos::prelude::*;

use crate::components::scroll_button::ScrollButton;
use crate::state::catalog::CARDS_SECTION;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero__inner">
                <h1 class="hero__title">"Apple Gift Card"</h1>
                <p class="hero__tagline">"Один подарок. Миллионы возможностей."</p>
                <ScrollButton target=CARDS_SECTION label="Выбрать карту" variant="primary"/>
            </div>
        </section>
    }
}
