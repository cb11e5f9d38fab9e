//! Display formatting for card amounts and footer copy.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency sign appended to every amount.
pub const CURRENCY_SIGN: &str = "₽";

/// Amount as shown on a tile, e.g. `1000 ₽`. No grouping or rounding.
pub fn format_amount(amount: u32) -> String {
    format!("{amount} {CURRENCY_SIGN}")
}

/// Alt text for a card's artwork.
pub fn card_alt_text(amount: u32) -> String {
    format!("Apple Gift Card {}", format_amount(amount))
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} Apple Gift Card. Все права защищены.")
}

/// Current calendar year from the browser clock, or UTC on the server.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(1970)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
