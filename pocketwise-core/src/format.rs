//! Display helpers for amounts and percentages.
//!
//! Spending replies show paise (`₹1234.50`); goal, budget and investment
//! replies show whole rupees (`₹1235`).

pub const CURRENCY_SYMBOL: &str = "₹";

/// `₹1234.50`
pub fn rupees(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, no_negative_zero(amount))
}

/// `₹1235`
pub fn rupees_whole(amount: f64) -> String {
    format!("{}{:.0}", CURRENCY_SYMBOL, no_negative_zero(amount.round()))
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole * 100`, rounded to one decimal; `0.0` when `whole` is not positive
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 || !whole.is_finite() {
        return 0.0;
    }
    no_negative_zero(round1(part / whole * 100.0))
}

/// Capitalize the first letter ("food" → "Food")
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn no_negative_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
