//! Inline SVG icons addressed by symbolic name.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::catalog::IconName;

/// Stroked 24x24 icon. Size and color come from the surrounding CSS.
#[component]
pub fn Icon(name: IconName) -> impl IntoView {
    view! {
        <span class="icon" attr:data-icon=name.as_str()>
            {render_icon(name)}
        </span>
    }
}

fn render_icon(name: IconName) -> impl IntoView {
    match name {
        IconName::Apple => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M12 20.94c1.5 0 2.75 1.06 4 1.06 3 0 6-8 6-12.22A4.91 4.91 0 0 0 17 5c-2.22 0-4 1.44-5 2-1-.56-2.78-2-5-2a4.9 4.9 0 0 0-5 4.78C2 14 5 22 8 22c1.25 0 2.5-1.06 4-1.06Z" />
                <path d="M10 2c1 .5 2 2 2 5" />
            </svg>
        }
        .into_any(),
        IconName::Menu => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <line x1="4" y1="6" x2="20" y2="6" />
                <line x1="4" y1="12" x2="20" y2="12" />
                <line x1="4" y1="18" x2="20" y2="18" />
            </svg>
        }
        .into_any(),
        IconName::CreditCard => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <rect x="2" y="5" width="20" height="14" rx="2" />
                <line x1="2" y1="10" x2="22" y2="10" />
            </svg>
        }
        .into_any(),
        IconName::Wallet => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1" />
                <path d="M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4" />
            </svg>
        }
        .into_any(),
        IconName::Mail => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <rect x="2" y="4" width="20" height="16" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </svg>
        }
        .into_any(),
        IconName::Gift => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <rect x="3" y="8" width="18" height="4" rx="1" />
                <path d="M12 8v13" />
                <path d="M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7" />
                <path d="M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5" />
            </svg>
        }
        .into_any(),
    }
}
