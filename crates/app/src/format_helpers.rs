//! Shared formatting utilities for the UI layer.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a cent amount as dollars, e.g. 123456 → "$1,234.56".
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let rem = abs % 100;

    // Insert thousands separators
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}${grouped}.{rem:02}")
}

/// Format an attendance fraction (0.0..=1.0) as a whole percentage.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", (fraction * 100.0).clamp(0.0, 100.0))
}

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026" (date-only, human-readable).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cents_format_with_grouping() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(123456), "$1,234.56");
        assert_eq!(format_cents(100000000), "$1,000,000.00");
    }

    #[test]
    fn negative_cents_keep_sign() {
        assert_eq!(format_cents(-250), "-$2.50");
    }

    #[test]
    fn percent_rounds_to_whole() {
        assert_eq!(format_percent(0.964), "96%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn percent_clamps_out_of_range() {
        assert_eq!(format_percent(1.5), "100%");
        assert_eq!(format_percent(-0.2), "0%");
    }

    #[test]
    fn date_human_formats() {
        assert_eq!(format_date_human("2026-08-30"), "Aug 30, 2026");
        assert_eq!(format_date_human("2026-01-05T09:00:00Z"), "Jan 5, 2026");
    }

    #[test]
    fn date_human_falls_back_on_garbage() {
        assert_eq!(format_date_human("soon"), "soon");
        assert_eq!(format_date_human("2026-99-01"), "2026-99-01");
    }
}
