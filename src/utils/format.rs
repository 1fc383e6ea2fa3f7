//! Indian-locale currency formatting and boundary conversions

use bigdecimal::{BigDecimal, RoundingMode};

/// Rupee symbol
pub const RUPEE: char = '₹';

/// Format an amount the way `en-IN` currency formatting does:
/// `₹12,34,567.89`.
///
/// The last three integer digits form one group and the rest are grouped
/// in pairs (lakh/crore). Fractions are rounded half away from zero to
/// `fraction_digits` places.
pub fn format_inr(amount: &BigDecimal, fraction_digits: u32) -> String {
    let negative = *amount < BigDecimal::from(0);
    let rounded = amount
        .abs()
        .with_scale_round(i64::from(fraction_digits), RoundingMode::HalfUp);

    let (digits, _) = rounded.as_bigint_and_exponent();
    let mut digits = digits.to_string();
    let scale = fraction_digits as usize;
    if digits.len() <= scale {
        digits = format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits);
    }
    let (integer, fraction) = digits.split_at(digits.len() - scale);

    let mut out = String::new();
    // -0 after rounding prints without a sign
    if negative && digits.chars().any(|c| c != '0') {
        out.push('-');
    }
    out.push(RUPEE);
    out.push_str(&group_indian(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Insert lakh/crore grouping separators into a run of digits
pub fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, last_three) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// Convert a float from an input field into a decimal amount.
///
/// Returns `None` for NaN and infinities. The shortest decimal
/// representation of the float is used, so `0.1` becomes exactly `0.1`.
pub fn money_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse::<BigDecimal>().ok()
}
