//! Section and widget components of the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section renders one band of the page from the static catalog. Only
//! `card_grid` reads shared state, the selection signal provided by the page.

pub mod call_to_action;
pub mod card_grid;
pub mod faq;
pub mod gift_card_tile;
pub mod hero;
pub mod how_to;
pub mod icon;
pub mod scroll_button;
pub mod site_footer;
pub mod site_header;
