//! Date validation
//!
//! Without a format, `valid_date` accepts anything that reads as a calendar
//! date. With a format it becomes a strict round trip: the input is parsed,
//! rendered back through the format tokens, and must come out identical.
//!
//! | Token  | Output                         |
//! |--------|--------------------------------|
//! | `YYYY` | year                           |
//! | `MM`   | month, two digits              |
//! | `M`    | month                          |
//! | `DD`   | day of month, two digits       |
//! | `D`    | day of month                   |
//! | `HH`   | hour 0-23, two digits          |
//! | `H`    | hour 0-23                      |
//! | `hh`   | hour 1-12, two digits          |
//! | `h`    | hour 1-12                      |
//! | `mm`   | minute, two digits             |
//! | `m`    | minute                         |
//! | `ss`   | second, two digits             |
//! | `s`    | second                         |
//! | `SSS`  | millisecond, three digits      |
//! | `S`    | millisecond                    |
//! | `A`    | `AM` / `PM`                    |
//! | `a`    | `am` / `pm`                    |
//!
//! Every other character is copied literally.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %I:%M:%S %p",
    "%Y/%m/%d %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%B %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
];

/// Parses a date or date-time written in any of the common layouts
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.naive_local());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(input) {
        return Some(parsed.naive_local());
    }

    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateToken {
    Year,
    Month2,
    Month,
    Day2,
    Day,
    Hour2,
    Hour,
    Hour12x2,
    Hour12,
    Minute2,
    Minute,
    Second2,
    Second,
    Millis3,
    Millis,
    MeridiemUpper,
    MeridiemLower,
}

// Longer tokens first so `MM` wins over `M`
const TOKENS: &[(&str, DateToken)] = &[
    ("YYYY", DateToken::Year),
    ("SSS", DateToken::Millis3),
    ("MM", DateToken::Month2),
    ("DD", DateToken::Day2),
    ("HH", DateToken::Hour2),
    ("hh", DateToken::Hour12x2),
    ("mm", DateToken::Minute2),
    ("ss", DateToken::Second2),
    ("M", DateToken::Month),
    ("D", DateToken::Day),
    ("H", DateToken::Hour),
    ("h", DateToken::Hour12),
    ("m", DateToken::Minute),
    ("s", DateToken::Second),
    ("S", DateToken::Millis),
    ("A", DateToken::MeridiemUpper),
    ("a", DateToken::MeridiemLower),
];

fn render(token: DateToken, at: &NaiveDateTime) -> String {
    let hour12 = match at.hour() % 12 {
        0 => 12,
        hour => hour,
    };
    let meridiem = if at.hour() >= 12 { "pm" } else { "am" };
    // Leap seconds report nanoseconds past 1e9
    let millis = (at.nanosecond() / 1_000_000) % 1000;

    match token {
        DateToken::Year => at.year().to_string(),
        DateToken::Month2 => format!("{:02}", at.month()),
        DateToken::Month => at.month().to_string(),
        DateToken::Day2 => format!("{:02}", at.day()),
        DateToken::Day => at.day().to_string(),
        DateToken::Hour2 => format!("{:02}", at.hour()),
        DateToken::Hour => at.hour().to_string(),
        DateToken::Hour12x2 => format!("{:02}", hour12),
        DateToken::Hour12 => hour12.to_string(),
        DateToken::Minute2 => format!("{:02}", at.minute()),
        DateToken::Minute => at.minute().to_string(),
        DateToken::Second2 => format!("{:02}", at.second()),
        DateToken::Second => at.second().to_string(),
        DateToken::Millis3 => format!("{:03}", millis),
        DateToken::Millis => millis.to_string(),
        DateToken::MeridiemUpper => meridiem.to_uppercase(),
        DateToken::MeridiemLower => meridiem.to_string(),
    }
}

/// Renders `at` through the token grammar described in the module docs
pub fn format_date(at: &NaiveDateTime, format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 8);
    let mut rest = format;

    while let Some(ch) = rest.chars().next() {
        match TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            Some((text, token)) => {
                out.push_str(&render(*token, at));
                rest = &rest[text.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

/// Validates a date, optionally in an exact format
pub fn valid_date(value: &str, format: Option<&str>) -> bool {
    let Some(parsed) = parse_date(value) else {
        return false;
    };

    match format {
        None | Some("") => true,
        Some(format) => format_date(&parsed, format) == value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
            .unwrap()
    }

    #[rstest]
    #[case("2024-01-05")]
    #[case("2024/01/05")]
    #[case("01/05/2024")]
    #[case("January 5, 2024")]
    #[case("2024-01-05T10:30:00")]
    #[case("2024-01-05T10:30:00Z")]
    #[case("Fri, 05 Jan 2024 10:30:00 +0000")]
    fn test_loose_dates(#[case] input: &str) {
        assert!(valid_date(input, None), "expected {input} to parse");
    }

    #[rstest]
    #[case("")]
    #[case("not a date")]
    #[case("2024-13-01")]
    #[case("2023-02-29")]
    fn test_rejected_dates(#[case] input: &str) {
        assert!(!valid_date(input, None));
    }

    #[test]
    fn test_strict_round_trip() {
        assert!(valid_date("2024-01-05", Some("YYYY-MM-DD")));
        assert!(!valid_date("05/01/2024", Some("YYYY-MM-DD")));
        assert!(!valid_date("2024-1-5", Some("YYYY-MM-DD")));
        assert!(valid_date("01/05/2024", Some("MM/DD/YYYY")));
    }

    #[rstest]
    #[case("01/05/2024 03:04 PM", "MM/DD/YYYY hh:mm A")]
    #[case("2024-01-05 03:04 pm", "YYYY-MM-DD hh:mm a")]
    #[case("01/05/2024 3:04:09 PM", "MM/DD/YYYY h:mm:ss A")]
    #[case("2024-01-05 12:00 am", "YYYY-MM-DD hh:mm a")]
    fn test_twelve_hour_round_trip(#[case] input: &str, #[case] format: &str) {
        assert!(valid_date(input, Some(format)), "expected {input} to match {format}");
    }

    #[test]
    fn test_twelve_hour_meridiem_must_match() {
        assert_eq!(
            parse_date("2024-01-05 12:30 am"),
            Some(at(2024, 1, 5, 0, 30, 0, 0))
        );
        assert!(!valid_date("2024-01-05 03:04 PM", Some("YYYY-MM-DD hh:mm a")));
        assert!(!valid_date("2024-01-05 13:04 PM", Some("YYYY-MM-DD hh:mm A")));
    }

    #[test]
    fn test_empty_format_is_loose() {
        assert!(valid_date("2024-01-05", Some("")));
    }

    #[test]
    fn test_format_tokens() {
        let moment = at(2024, 3, 7, 15, 4, 9, 45);
        assert_eq!(format_date(&moment, "YYYY-MM-DD HH:mm:ss.SSS"), "2024-03-07 15:04:09.045");
        assert_eq!(format_date(&moment, "M/D/YYYY h:m:s a"), "3/7/2024 3:4:9 pm");
        assert_eq!(format_date(&moment, "hh A"), "03 PM");
        assert_eq!(format_date(&moment, "S"), "45");
    }

    #[test]
    fn test_midnight_is_twelve() {
        let moment = at(2024, 1, 1, 0, 0, 0, 0);
        assert_eq!(format_date(&moment, "h:mm a"), "12:00 am");
    }

    #[test]
    fn test_literals_pass_through() {
        let moment = at(2024, 1, 1, 0, 0, 0, 0);
        assert_eq!(format_date(&moment, "YYYY/[Q1]"), "2024/[Q1]");
    }
}
