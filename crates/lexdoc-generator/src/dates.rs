//! Lease end-date derivation

use chrono::{Days, Months, NaiveDate};

/// Placeholder used when the end date cannot be derived
pub const END_DATE_PLACEHOLDER: &str = "[END DATE TO BE CALCULATED]";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%m-%d-%Y", "%B %d, %Y"];

/// Parse a start date in any of the accepted formats
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

/// Parse "<N> month(s)" or "<N> year(s)" into a month count
pub fn parse_duration_months(input: &str) -> Option<u32> {
    let lower = input.to_lowercase();
    let digits: String = lower
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let count: u32 = digits.parse().ok().filter(|n| *n > 0)?;

    if lower.contains("month") {
        Some(count)
    } else if lower.contains("year") {
        count.checked_mul(12)
    } else {
        None
    }
}

/// Compute the last day of a term starting on `start` and lasting `duration`
pub fn compute_end_date(start: &str, duration: &str) -> Option<NaiveDate> {
    let start = parse_date(start)?;
    let months = parse_duration_months(duration)?;
    let end = start.checked_add_months(Months::new(months))?;
    end.checked_sub_days(Days::new(1))
}

/// Lease end date as "Month D, YYYY", or [`END_DATE_PLACEHOLDER`] when either
/// input cannot be parsed
pub fn lease_end_date(start: &str, duration: &str) -> String {
    compute_end_date(start, duration)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| END_DATE_PLACEHOLDER.to_string())
}
