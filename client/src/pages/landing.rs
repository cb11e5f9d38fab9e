//! Gift-card landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Owns the card selection signal for the lifetime of the
//! page and composes the header, hero, card grid, walkthrough, FAQ,
//! call-to-action and footer sections in that order.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::card_grid::CardGrid;
use crate::components::faq::Faq;
use crate::components::hero::Hero;
use crate::components::how_to::HowTo;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::selection::SelectionState;

/// Landing page. Starts with no card selected.
#[component]
pub fn LandingPage() -> impl IntoView {
    let selection = RwSignal::new(SelectionState::default());
    provide_context(selection);

    let on_select = Callback::new(move |id: u32| apply_card_click(selection, id));

    view! {
        <div class="landing-page">
            <SiteHeader/>
            <main>
                <Hero/>
                <CardGrid on_select=on_select/>
                <HowTo/>
                <Faq/>
                <CallToAction/>
            </main>
            <SiteFooter/>
        </div>
    }
}

/// Click handler body: select `id`, skipping the signal write when it is
/// already selected so dependents are not re-notified.
fn apply_card_click(selection: RwSignal<SelectionState>, id: u32) {
    if selection.get_untracked().is_selected(id) {
        return;
    }
    selection.update(|s| s.select(id));
    #[cfg(feature = "hydrate")]
    log::debug!("gift card {id} selected");
}
