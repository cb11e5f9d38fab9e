//! Sticky site header with brand mark and section navigation.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::catalog::{IconName, NAV_LINKS};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <div class="brand">
                    <Icon name=IconName::Apple/>
                    <span class="brand__name">"Gift Card"</span>
                </div>
                <nav class="site-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! { <a class="site-header__link" href=link.href()>{link.label}</a> }
                        })
                        .collect_view()}
                </nav>
                // Mobile menu is not wired to a drawer yet.
                <button class="site-header__menu" type="button" aria-label="Меню">
                    <Icon name=IconName::Menu/>
                </button>
            </div>
        </header>
    }
}
