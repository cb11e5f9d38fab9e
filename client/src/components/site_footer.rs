//! Footer with brand blurb, placeholder link columns and copyright.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::catalog::{FOOTER_LINK_GROUPS, IconName};
use crate::util::format::{copyright_line, current_year};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let copyright = copyright_line(current_year());

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer__top">
                    <div class="site-footer__about">
                        <div class="brand">
                            <Icon name=IconName::Apple/>
                            <span class="brand__name">"Apple Gift Card"</span>
                        </div>
                        <p>
                            "Apple Gift Card может быть использована в App Store, iTunes Store, для Apple Music и других сервисов Apple."
                        </p>
                    </div>
                    <div class="site-footer__groups">
                        {FOOTER_LINK_GROUPS
                            .iter()
                            .map(|group| {
                                view! {
                                    <div class="site-footer__group">
                                        <h4>{group.heading}</h4>
                                        <ul>
                                            {group
                                                .links
                                                .iter()
                                                .map(|label| view! { <li><a href="#">{*label}</a></li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="site-footer__bottom">
                    <p>{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
