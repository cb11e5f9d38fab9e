//! Call-to-action button that smooth-scrolls to an in-page section.

use leptos::prelude::*;

use crate::util::scroll::scroll_to_section;

/// Rounded CTA button. `variant` picks the `cta-button--{variant}` modifier.
///
/// Clicking only scrolls; it never touches the card selection.
#[component]
pub fn ScrollButton(target: &'static str, label: &'static str, variant: &'static str) -> impl IntoView {
    view! {
        <button
            class=format!("cta-button cta-button--{variant}")
            type="button"
            attr:data-scroll-target=target
            on:click=move |_| {
                scroll_to_section(target);
            }
        >
            {label}
        </button>
    }
}
