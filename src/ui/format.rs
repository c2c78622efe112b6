use crate::models::Currency;

/// Formats a price in the active display currency.
/// - |value| >= 1: 2 decimals (€1234.56)
/// - smaller: 6 decimals, enough to see sub-penny movement ($0.000023)
pub fn format_price(value: f64, currency: Currency) -> String {
    let symbol = currency.symbol();
    if value.abs() >= 1.0 {
        format!("{}{:.2}", symbol, value)
    } else {
        format!("{}{:.6}", symbol, value)
    }
}

/// Abbreviates a market capitalization with T/B/M suffixes; anything under a
/// million falls back to the full currency-formatted value.
pub fn format_market_cap(value: f64, currency: Currency) -> String {
    let symbol = currency.symbol();
    if value >= 1e12 {
        format!("{}{:.2}T", symbol, value / 1e12)
    } else if value >= 1e9 {
        format!("{}{:.2}B", symbol, value / 1e9)
    } else if value >= 1e6 {
        format!("{}{:.2}M", symbol, value / 1e6)
    } else {
        format_price(value, currency)
    }
}

/// Signed percentage with two decimals; non-negative values keep an explicit
/// "+" so gains and losses read the same width.
pub fn format_percentage(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_uses_two_decimals_at_or_above_one() {
        assert_eq!(format_price(65_432.109, Currency::Usd), "$65432.11");
        assert_eq!(format_price(1.0, Currency::Eur), "€1.00");
    }

    #[test]
    fn price_uses_six_decimals_below_one() {
        assert_eq!(format_price(0.000023, Currency::Usd), "$0.000023");
        assert_eq!(format_price(0.5, Currency::Gbp), "£0.500000");
    }

    #[test]
    fn market_cap_suffixes_at_powers_of_ten() {
        assert_eq!(format_market_cap(1.28e12, Currency::Usd), "$1.28T");
        assert_eq!(format_market_cap(1e12, Currency::Usd), "$1.00T");
        assert_eq!(format_market_cap(999.4e9, Currency::Usd), "$999.40B");
        assert_eq!(format_market_cap(1e9, Currency::Eur), "€1.00B");
        assert_eq!(format_market_cap(2.5e6, Currency::Gbp), "£2.50M");
    }

    #[test]
    fn small_market_cap_falls_back_to_full_price() {
        assert_eq!(format_market_cap(999_999.0, Currency::Usd), "$999999.00");
    }

    #[test]
    fn percentage_always_carries_sign_and_two_decimals() {
        assert_eq!(format_percentage(2.5), "+2.50%");
        assert_eq!(format_percentage(0.0), "+0.00%");
        assert_eq!(format_percentage(-3.141), "-3.14%");
    }
}
