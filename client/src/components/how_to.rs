//! "How to use" walkthrough section (`#howto`).

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::catalog::{HOWTO_SECTION, INSTRUCTION_STEPS, InstructionStep};

#[component]
pub fn HowTo() -> impl IntoView {
    view! {
        <section id=HOWTO_SECTION class="section section--muted howto">
            <div class="container">
                <h2 class="section__title">"Как использовать"</h2>
                <ol class="howto__steps">
                    {INSTRUCTION_STEPS
                        .iter()
                        .map(|step| view! { <InstructionTile step=*step/> })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn InstructionTile(step: InstructionStep) -> impl IntoView {
    view! {
        <li class="howto__step">
            <div class="howto__badge">
                <Icon name=step.icon/>
            </div>
            <h3 class="howto__title">{step.title}</h3>
            <p class="howto__description">{step.description}</p>
        </li>
    }
}
