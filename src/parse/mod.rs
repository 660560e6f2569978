//! Timestamp detection and decomposition.
//!
//! Two grammars are recognised at the same position by one combined
//! pattern, colon syntax first:
//! - colon syntax: `[H:]MM:SS`, e.g. `1:02:03`, `4:05`
//! - unit syntax: `1h2m3s`, `1h 2m`, `2 minutes 3 seconds`, `1 hour`
//!
//! The unit branch captures the whole run as a single `bits` block, which
//! is then decomposed by a second, anchored pattern.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::Timestamp;

/// Source of the combined pattern, without any suffix constraint.
///
/// Unit runs may be separated by one space, but a trailing space is never
/// consumed, so replacing a match keeps the surrounding spacing intact.
pub const TIMESTAMPS_PATTERN: &str = concat!(
    r"(?:(?:(?P<hours>[0-9]{1,2}):)?(?P<minutes>[0-9]{1,2}):(?P<seconds>[0-9]{1,2})",
    r"|(?P<bits>[0-9]{1,2}(?:[hms]| ?(?:hour|min(?:ute)?|sec(?:ond)?)s?)",
    r"(?: ?[0-9]{1,2}(?:[hms]| ?(?:hour|min(?:ute)?|sec(?:ond)?)s?))*))",
);

/// Anchored pattern that splits a unit run into its components.
pub const UNITS_PATTERN: &str = concat!(
    r"^(?:(?P<hours>[0-9]{1,2})(?:h|\s?hours?)\s?)?",
    r"(?:(?P<minutes>[0-9]{1,2})(?:m|\s?min(?:ute)?s?)\s?)?",
    r"(?:(?P<seconds>[0-9]{1,2})(?:s|\s?sec(?:ond)?s?)\s?)?$",
);

/// Combined colon/unit pattern
pub static TIMESTAMPS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TIMESTAMPS_PATTERN).expect("timestamps pattern compiles"));

static UNITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(UNITS_PATTERN).expect("units pattern compiles"));

/// Parse the first timestamp found in `text`.
///
/// # Examples
///
/// ```
/// use duration_timestamp::parse_timestamp;
///
/// let ts = parse_timestamp("skip to 1:02:03").unwrap();
/// assert_eq!(ts.total, 3723);
///
/// assert!(parse_timestamp("45").is_none());
/// ```
pub fn parse_timestamp(text: &str) -> Option<Timestamp> {
    let caps = TIMESTAMPS_REGEX.captures(text)?;
    extract(&caps)
}

/// Turn the named groups of a combined-pattern match into a timestamp.
///
/// Works on any pattern built from [`TIMESTAMPS_PATTERN`], including ones
/// with a suffix appended.
pub fn extract(caps: &Captures<'_>) -> Option<Timestamp> {
    if let Some(bits) = caps.name("bits") {
        return parse_units(bits.as_str());
    }
    parse_colon(caps)
}

/// Read the colon-syntax groups (`hours`, `minutes`, `seconds`).
pub fn parse_colon(caps: &Captures<'_>) -> Option<Timestamp> {
    Timestamp::from_parts(
        group_value(caps, "hours")?,
        group_value(caps, "minutes")?,
        group_value(caps, "seconds")?,
    )
}

/// Decompose a unit-syntax run such as `1h 2m 3s` or `2 minutes`.
///
/// Units must appear in hours, minutes, seconds order and at most once;
/// anything else yields `None`.
pub fn parse_units(bits: &str) -> Option<Timestamp> {
    let caps = UNITS_REGEX.captures(bits)?;
    Timestamp::from_parts(
        group_value(&caps, "hours")?,
        group_value(&caps, "minutes")?,
        group_value(&caps, "seconds")?,
    )
}

/// Absent group → `Some(None)`; present but unparseable → `None`.
fn group_value(caps: &Captures<'_>, name: &str) -> Option<Option<u32>> {
    match caps.name(name) {
        None => Some(None),
        Some(m) => m.as_str().parse().ok().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(ts: &Timestamp) -> (Option<u32>, Option<u32>, Option<u32>) {
        (ts.hours, ts.minutes, ts.seconds)
    }

    #[test]
    fn test_colon_with_hours() {
        let ts = parse_timestamp("1:02:03").unwrap();
        assert_eq!(parts(&ts), (Some(1), Some(2), Some(3)));
        assert_eq!(ts.total, 3723);
    }

    #[test]
    fn test_colon_without_hours() {
        let ts = parse_timestamp("4:05").unwrap();
        assert_eq!(parts(&ts), (None, Some(4), Some(5)));
        assert_eq!(ts.total, 245);
    }

    #[test]
    fn test_tiny_units() {
        let ts = parse_timestamp("2m30s").unwrap();
        assert_eq!(parts(&ts), (None, Some(2), Some(30)));
        assert_eq!(ts.total, 150);
    }

    #[test]
    fn test_spaced_units() {
        let ts = parse_timestamp("1h 2m 3s").unwrap();
        assert_eq!(parts(&ts), (Some(1), Some(2), Some(3)));
    }

    #[test]
    fn test_word_units() {
        let ts = parse_timestamp("1 hour 2 mins").unwrap();
        assert_eq!(parts(&ts), (Some(1), Some(2), None));
        assert_eq!(ts.total, 3720);

        let ts = parse_timestamp("2 minutes 3 seconds").unwrap();
        assert_eq!(parts(&ts), (None, Some(2), Some(3)));
        assert_eq!(ts.total, 123);
    }

    #[test]
    fn test_long_and_medium_words() {
        let ts = parse_timestamp("1 hours 2 minutes 3 seconds").unwrap();
        assert_eq!(ts.total, 3723);

        let ts = parse_timestamp("4 hours 5 mins 6 secs").unwrap();
        assert_eq!(parts(&ts), (Some(4), Some(5), Some(6)));
    }

    #[test]
    fn test_single_unit() {
        let ts = parse_timestamp("45s").unwrap();
        assert_eq!(parts(&ts), (None, None, Some(45)));

        let ts = parse_timestamp("3h").unwrap();
        assert_eq!(parts(&ts), (Some(3), None, None));
        assert_eq!(ts.total, 10800);
    }

    #[test]
    fn test_bare_number_is_not_a_timestamp() {
        assert_eq!(parse_timestamp("45"), None);
        assert_eq!(parse_timestamp("no digits at all"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_timestamp_inside_prose() {
        let ts = parse_timestamp("the drop comes at 12:34, listen").unwrap();
        assert_eq!(parts(&ts), (None, Some(12), Some(34)));
    }

    #[test]
    fn test_duplicate_units_rejected() {
        assert_eq!(parse_timestamp("1h2h"), None);
    }

    #[test]
    fn test_out_of_order_units_rejected() {
        assert_eq!(parse_timestamp("3s 2m"), None);
    }

    #[test]
    fn test_parse_units_directly() {
        let ts = parse_units("5m").unwrap();
        assert_eq!(parts(&ts), (None, Some(5), None));

        let ts = parse_units("1 hour ").unwrap();
        assert_eq!(parts(&ts), (Some(1), None, None));

        assert_eq!(parse_units(""), None);
        assert_eq!(parse_units("5x"), None);
    }

    #[test]
    fn test_parse_colon_directly() {
        let caps = TIMESTAMPS_REGEX.captures("10:00").unwrap();
        let ts = parse_colon(&caps).unwrap();
        assert_eq!(parts(&ts), (None, Some(10), Some(0)));
    }

    #[test]
    fn test_extract_prefers_bits_group() {
        let caps = TIMESTAMPS_REGEX.captures("5m").unwrap();
        assert!(caps.name("bits").is_some());
        assert_eq!(extract(&caps).unwrap().total, 300);
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        assert_eq!(parse_timestamp("١:٢٣"), None);
    }
}
