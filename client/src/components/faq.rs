//! Frequently asked questions section (`#faq`).

use leptos::prelude::*;

use crate::state::catalog::{FAQ_ENTRIES, FAQ_SECTION};

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id=FAQ_SECTION class="section faq">
            <div class="container container--narrow">
                <h2 class="section__title">"Часто задаваемые вопросы"</h2>
                <div class="faq__list">
                    {FAQ_ENTRIES
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="faq__item">
                                    <h3 class="faq__question">{entry.question}</h3>
                                    <p class="faq__answer">{entry.answer}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
