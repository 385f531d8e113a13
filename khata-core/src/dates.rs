//! Date resolution for the loose date strings found in statement text.
//!
//! Statements mix "06 Nov 2024", "Nov 06, 2024", "06/11/2024", "2024-11-06"
//! and worse. Resolution tries an ordered list of explicit formats, then a
//! numeric-run fallback, and never fails: the caller always gets a date back,
//! with flags saying how much trust to place in it.

use chrono::{Datelike, NaiveDate};

/// Outcome of resolving one date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    /// Nothing parsed; `date` is the caller-supplied "today".
    pub defaulted: bool,
    /// A future year was rewritten to the current year.
    pub clamped: bool,
}

/// Explicit formats, most specific first. First successful parse wins;
/// list order is the only ambiguity resolution (D/M/Y before M/D/Y, since
/// Indian statements are day-first).
const DATE_FORMATS: &[&str] = &[
    "%d %b %Y",  // 06 Nov 2024
    "%b %d %Y",  // Nov 06 2024
    "%d %B %Y",  // 06 November 2024
    "%B %d %Y",  // November 06 2024
    "%d/%m/%Y",  // 06/11/2024
    "%m/%d/%Y",  // 11/06/2024
    "%Y-%m-%d",  // 2024-11-06
    "%d-%m-%Y",  // 06-11-2024
    "%b %d, %Y", // Nov 06, 2024
    "%d %b, %Y", // 06 Nov, 2024
    "%d-%b-%Y",  // 06-Nov-2024
    "%b-%d-%Y",  // Nov-06-2024
];

/// Resolve a date string against `today` (the parse-time calendar date).
///
/// Never fails. If no explicit format and no numeric ordering produces a
/// valid date, returns `today` with `defaulted` set so the caller can surface
/// a warning instead of silently losing the information.
pub fn resolve_date(date_str: &str, today: NaiveDate) -> ResolvedDate {
    let normalized = normalize_whitespace(date_str);
    if normalized.is_empty() {
        return defaulted(today);
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, fmt) {
            return clamp_future(date, today);
        }
    }

    // Fallback: pull out numeric runs and try candidate orderings.
    let runs = numeric_runs(&normalized);
    if runs.len() >= 3 {
        let orderings = [
            (runs[0], runs[1], runs[2]), // day, month, year
            (runs[1], runs[0], runs[2]), // month, day, year
            (runs[2], runs[0], runs[1]), // year first in source
        ];
        for (day, month, year) in orderings {
            let year = pivot_two_digit_year(year);
            let (Ok(month), Ok(day)) = (u32::try_from(month), u32::try_from(day)) else {
                continue;
            };
            let Ok(year) = i32::try_from(year) else {
                continue;
            };
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return clamp_future(date, today);
            }
        }
    }

    defaulted(today)
}

fn defaulted(today: NaiveDate) -> ResolvedDate {
    ResolvedDate {
        date: today,
        defaulted: true,
        clamped: false,
    }
}

fn clamp_future(date: NaiveDate, today: NaiveDate) -> ResolvedDate {
    if date.year() <= today.year() {
        return ResolvedDate {
            date,
            defaulted: false,
            clamped: false,
        };
    }
    match NaiveDate::from_ymd_opt(today.year(), date.month(), date.day()) {
        Some(clamped) => ResolvedDate {
            date: clamped,
            defaulted: false,
            clamped: true,
        },
        // e.g. Feb 29 of a future leap year landing on a non-leap year
        None => defaulted(today),
    }
}

/// Two-digit years map to 1900s/2000s with a 50-year pivot.
fn pivot_two_digit_year(year: i64) -> i64 {
    if year < 100 {
        if year < 50 { year + 2000 } else { year + 1900 }
    } else {
        year
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn numeric_runs(s: &str) -> Vec<i64> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for ch in s.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else if !current.is_empty() {
            if let Ok(n) = current.parse() {
                runs.push(n);
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Ok(n) = current.parse() {
            runs.push(n);
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn nov6() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 6).unwrap()
    }

    #[test]
    fn test_every_explicit_format() {
        let cases = [
            "06 Nov 2024",
            "Nov 06 2024",
            "06 November 2024",
            "November 06 2024",
            "06/11/2024",
            "2024-11-06",
            "06-11-2024",
            "Nov 06, 2024",
            "06 Nov, 2024",
            "06-Nov-2024",
            "Nov-06-2024",
        ];
        for case in cases {
            let resolved = resolve_date(case, today());
            assert_eq!(resolved.date, nov6(), "failed for {case:?}");
            assert!(!resolved.defaulted);
        }
    }

    #[test]
    fn test_list_order_resolves_slash_ambiguity() {
        // D/M/Y is tried before M/D/Y, so 06/11/2024 is November 6th.
        let resolved = resolve_date("06/11/2024", today());
        assert_eq!(resolved.date, nov6());
        // 12/25/2024 only works month-first.
        let resolved = resolve_date("12/25/2024", today());
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn test_numeric_fallback_orderings() {
        // "06.11.2024" matches no explicit format; day-month-year ordering wins.
        let resolved = resolve_date("06.11.2024", today());
        assert_eq!(resolved.date, nov6());
        assert!(!resolved.defaulted);

        // Day 25 forces the month-day-year retry to be skipped in favor of
        // the first ordering that forms a valid date.
        let resolved = resolve_date("25.12.2024", today());
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn test_two_digit_year_pivot() {
        let resolved = resolve_date("06.11.24", today());
        assert_eq!(resolved.date, nov6());

        let resolved = resolve_date("06.11.74", today());
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(1974, 11, 6).unwrap());
    }

    #[test]
    fn test_invalid_in_every_ordering_falls_back_to_today() {
        let resolved = resolve_date("32/13/2024", today());
        assert_eq!(resolved.date, today());
        assert!(resolved.defaulted);
    }

    #[test]
    fn test_garbage_falls_back_to_today() {
        let resolved = resolve_date("not a date at all", today());
        assert_eq!(resolved.date, today());
        assert!(resolved.defaulted);
    }

    #[test]
    fn test_future_year_clamped_to_current() {
        let resolved = resolve_date("06 Nov 2031", today());
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2026, 11, 6).unwrap());
        assert!(resolved.clamped);
        assert!(!resolved.defaulted);
    }

    #[test]
    fn test_extra_whitespace_tolerated() {
        let resolved = resolve_date("  06   Nov   2024 ", today());
        assert_eq!(resolved.date, nov6());
    }
}
