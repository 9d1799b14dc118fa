//! Presentation of metric values, shared by both endpoints.
//!
//! Every value renders twice: a compact bucketed `short` form (`$2.5M`,
//! `$15.0K`) and a full-precision amount embedded in a `long` sentence.

use crate::models::TimeRange;

/// US-style thousands grouping for a non-negative integer.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Full currency amount with two decimals, e.g. `$1,234.56`.
pub fn currency_full(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Grouped integer with no decimals, e.g. `15,000`.
pub fn count_full(value: f64) -> String {
    let rounded = value.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(rounded.unsigned_abs()))
}

/// Full-precision amount string keyed by unit.
pub fn amount_full(value: f64, currency: bool) -> String {
    if currency {
        currency_full(value)
    } else {
        count_full(value)
    }
}

/// Compact bucketed form of a display-unit value.
///
/// Currency values bucket into `M` above one million and `K` above ten
/// thousand; below that they render as a whole-dollar amount. Plain counts
/// only abbreviate at a million and stay grouped integers otherwise.
pub fn short_form(value: f64, currency: bool) -> String {
    let prefix = if currency { "$" } else { "" };
    if value >= 1_000_000.0 {
        format!("{prefix}{:.1}M", value / 1_000_000.0)
    } else if currency && value >= 10_000.0 {
        format!("{prefix}{:.1}K", value / 1_000.0)
    } else {
        format!("{prefix}{}", count_full(value))
    }
}

/// Descriptive sentence for the Stripe revenue endpoint.
pub fn range_sentence(range: TimeRange, amount: &str) -> String {
    match range {
        TimeRange::Today => format!("Today I made {amount}"),
        TimeRange::SevenDays => format!("In the last 7 days I made {amount}"),
        TimeRange::ThirtyDays => format!("In the last 30 days I made {amount}"),
        TimeRange::Month => format!("This month I made {amount}"),
        TimeRange::Year => format!("This year I made {amount}"),
        TimeRange::All => format!("In total, I made {amount}"),
    }
}

/// Descriptive sentence for the RevenueCat endpoint.
///
/// `revenue` and `new_customers` report over the provider's fixed 28-day
/// window; every other metric is a point-in-time reading.
pub fn metric_sentence(metric_id: &str, name: &str, amount: &str) -> String {
    let name = name.to_lowercase();
    match metric_id {
        "revenue" | "new_customers" => {
            format!("The {name} in the last 28 days is {amount}")
        }
        _ => format!("The {name} is {amount}"),
    }
}
