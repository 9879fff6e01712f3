use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static MONTH_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid regex"));

/// Formats a "YYYY-MM" token as "Mon YYYY" ("2020-01" -> "Jan 2020").
/// Empty input yields an empty string; anything that is not a valid month
/// token is returned unchanged rather than erroring, so a bad stored date can
/// never break a page render.
pub fn format_period(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    let Some(caps) = MONTH_TOKEN.captures(token) else {
        return token.to_string();
    };
    let (Ok(year), Ok(month)) = (caps[1].parse::<i32>(), caps[2].parse::<u32>()) else {
        return token.to_string();
    };
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format("%b %Y").to_string(),
        None => token.to_string(),
    }
}

/// Formats a date range for an entry. No start date means no range at all.
/// `current` wins over any end date; an entry with neither shows only the
/// start period.
pub fn format_range(start: Option<&str>, end: Option<&str>, current: bool) -> String {
    let start = start.unwrap_or_default();
    if start.is_empty() {
        return String::new();
    }
    let mut range = format_period(start);
    if current {
        range.push_str(" - Present");
    } else if let Some(end) = end.filter(|e| !e.is_empty()) {
        range.push_str(" - ");
        range.push_str(&format_period(end));
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_valid_month_tokens() {
        assert_eq!(format_period("2020-01"), "Jan 2020");
        assert_eq!(format_period("1999-12"), "Dec 1999");
        assert_eq!(format_period("2024-06"), "Jun 2024");
    }

    #[test]
    fn empty_token_formats_to_empty() {
        assert_eq!(format_period(""), "");
    }

    #[test]
    fn malformed_tokens_pass_through_unchanged() {
        assert_eq!(format_period("garbage"), "garbage");
        assert_eq!(format_period("2020-13"), "2020-13");
        assert_eq!(format_period("2020-00"), "2020-00");
        assert_eq!(format_period("2020-1"), "2020-1");
        assert_eq!(format_period("2020-01-15"), "2020-01-15");
    }

    #[test]
    fn range_requires_a_start() {
        assert_eq!(format_range(None, None, false), "");
        assert_eq!(format_range(None, Some("2021-02"), true), "");
        assert_eq!(format_range(Some(""), Some("2021-02"), false), "");
    }

    #[test]
    fn current_wins_over_end_date() {
        assert_eq!(format_range(Some("2020-01"), None, true), "Jan 2020 - Present");
        assert_eq!(format_range(Some("2020-01"), Some("2021-02"), true), "Jan 2020 - Present");
    }

    #[test]
    fn closed_and_open_ranges() {
        assert_eq!(format_range(Some("2020-01"), Some("2021-02"), false), "Jan 2020 - Feb 2021");
        assert_eq!(format_range(Some("2020-01"), None, false), "Jan 2020");
        assert_eq!(format_range(Some("2020-01"), Some(""), false), "Jan 2020");
    }
}
