/// Monetary amounts in minor units (cents). Sums over these are exact.
pub type Cents = i64;

/// Render an amount the way the storefront displays it, e.g. `$755.97`.
pub fn format_usd(amount: Cents) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

/// Multiply an amount by a rate and round half away from zero to the cent.
pub fn apply_rate(amount: Cents, rate: f64) -> Cents {
    (amount as f64 * rate).round() as Cents
}
