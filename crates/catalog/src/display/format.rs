//! Sentinel-aware scalar formatting.

use chrono::{DateTime, NaiveDate};

/// Whether a scalar is one of the upstream's absent-value placeholders.
pub fn is_sentinel(value: &str) -> bool {
    matches!(value, "unknown" | "n/a" | "none")
}

/// Format a numeric-looking scalar with thousands separators.
///
/// Sentinels render "Unknown"; a value that fails to parse as an integer
/// falls back to the raw string (e.g. crew counts like "30-165").
pub fn format_quantity(value: &str) -> String {
    if is_sentinel(value) {
        return "Unknown".to_string();
    }
    match value.replace(',', "").parse::<u64>() {
        Ok(n) => thousands(n),
        Err(_) => value.to_string(),
    }
}

/// Append a unit to a scalar, or "Unknown" for sentinels.
pub fn format_with_unit(value: &str, unit: &str) -> String {
    if is_sentinel(value) {
        "Unknown".to_string()
    } else {
        format!("{} {}", value, unit)
    }
}

/// Render a date scalar as "May 25, 1977".
///
/// Accepts both the bare dates (`release_date`) and the RFC 3339 timestamps
/// (`created`/`edited`) the catalog emits; anything unparseable passes
/// through unchanged.
pub fn format_date(value: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return datetime.format("%B %-d, %Y").to_string();
    }
    value.to_string()
}

/// The year component of a date scalar, for compact card labels.
pub fn release_year(value: &str) -> String {
    value.split('-').next().unwrap_or(value).to_string()
}

fn thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{:03}", group));
    }
    groups.reverse();
    groups.join(",")
}
