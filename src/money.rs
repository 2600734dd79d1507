use rust_decimal::Decimal;

/// Format as pounds and pence, e.g. `£12570.00` or `-£2.50`
pub fn format_gbp(amount: Decimal) -> String {
    let amount = amount.round_dp(2);
    if amount < Decimal::ZERO {
        format!("-£{:.2}", amount.abs())
    } else {
        format!("£{:.2}", amount)
    }
}

/// Format a percentage without trailing zeros, e.g. `12%` or `13.25%`
pub fn format_pct(pct: Decimal) -> String {
    format!("{}%", pct.normalize())
}
