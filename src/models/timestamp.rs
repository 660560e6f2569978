//! Canonical parsed duration.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Style;

pub const SECONDS_IN_MINUTE: u64 = 60;
pub const MINUTES_IN_HOUR: u64 = 60;
pub const SECONDS_IN_HOUR: u64 = SECONDS_IN_MINUTE * MINUTES_IN_HOUR;

/// A duration broken into optional hour, minute and second components.
///
/// Absent components stay absent; they are only treated as zero when
/// computing `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,

    /// Sum of the present components, in seconds
    pub total: u64,
}

impl Timestamp {
    /// Build a timestamp from up to three components.
    ///
    /// Returns `None` when every component is absent.
    pub fn from_parts(hours: Option<u32>, minutes: Option<u32>, seconds: Option<u32>) -> Option<Self> {
        if hours.is_none() && minutes.is_none() && seconds.is_none() {
            return None;
        }

        let total = hours.map_or(0, |h| u64::from(h) * SECONDS_IN_HOUR)
            + minutes.map_or(0, |m| u64::from(m) * SECONDS_IN_MINUTE)
            + seconds.map_or(0, u64::from);

        Some(Self {
            hours,
            minutes,
            seconds,
            total,
        })
    }

    /// Returns true if at least one component is present.
    pub fn is_valid(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }

    /// Render in the given style. `None` if the value is not valid.
    pub fn render(&self, style: Style) -> Option<String> {
        crate::format::format_timestamp(Some(self), style)
    }
}

/// Returns true if `candidate` exists and carries at least one component.
pub fn is_valid(candidate: Option<&Timestamp>) -> bool {
    candidate.is_some_and(Timestamp::is_valid)
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render(Style::Short) {
            Some(text) => write!(f, "{}", text),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_all_absent() {
        assert_eq!(Timestamp::from_parts(None, None, None), None);
    }

    #[test]
    fn test_from_parts_total() {
        let ts = Timestamp::from_parts(Some(1), Some(2), Some(3)).unwrap();
        assert_eq!(ts.total, 3723);
        assert_eq!(ts.hours, Some(1));
        assert_eq!(ts.minutes, Some(2));
        assert_eq!(ts.seconds, Some(3));
    }

    #[test]
    fn test_from_parts_keeps_absent_fields() {
        let ts = Timestamp::from_parts(None, Some(5), None).unwrap();
        assert_eq!(ts.hours, None);
        assert_eq!(ts.seconds, None);
        assert_eq!(ts.total, 300);
    }

    #[test]
    fn test_zero_is_valid() {
        let ts = Timestamp::from_parts(None, None, Some(0)).unwrap();
        assert!(ts.is_valid());
        assert_eq!(ts.total, 0);
    }

    #[test]
    fn test_is_valid_candidate() {
        assert!(!is_valid(None));

        let empty = Timestamp {
            hours: None,
            minutes: None,
            seconds: None,
            total: 0,
        };
        assert!(!is_valid(Some(&empty)));

        let ts = Timestamp::from_parts(Some(2), None, None).unwrap();
        assert!(is_valid(Some(&ts)));
    }

    #[test]
    fn test_large_hours_do_not_overflow() {
        let ts = Timestamp::from_parts(Some(u32::MAX), None, None).unwrap();
        assert_eq!(ts.total, u64::from(u32::MAX) * 3600);
    }

    #[test]
    fn test_display_uses_short_style() {
        let ts = Timestamp::from_parts(Some(1), Some(0), Some(9)).unwrap();
        assert_eq!(ts.to_string(), "1h 9s");
    }

    #[test]
    fn test_serialization_skips_absent() {
        let ts = Timestamp::from_parts(None, Some(2), Some(30)).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, r#"{"minutes":2,"seconds":30,"total":150}"#);

        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }
}
