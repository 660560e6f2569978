//! Scanning text for timestamps and substituting them.

use regex::{Captures, Regex};
use thiserror::Error;
use tracing::debug;

use crate::models::{MatchSpan, Timestamp};
use crate::parse::{extract, TIMESTAMPS_PATTERN, TIMESTAMPS_REGEX};

/// Errors raised while building a scanner.
#[derive(Debug, Error)]
pub enum ReplaceError {
    #[error("Invalid suffix pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Finds timestamps in text, optionally only those followed by a suffix.
#[derive(Debug, Clone)]
pub struct TimestampScanner {
    regex: Regex,
}

impl Default for TimestampScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampScanner {
    /// Scanner matching every timestamp.
    pub fn new() -> Self {
        Self {
            regex: Regex::clone(&TIMESTAMPS_REGEX),
        }
    }

    /// Scanner that only matches timestamps immediately followed by
    /// `suffix`, a regular expression. The suffix becomes part of each
    /// match, so it is replaced along with the timestamp.
    ///
    /// An empty suffix is equivalent to [`TimestampScanner::new`].
    pub fn with_suffix(suffix: &str) -> Result<Self, ReplaceError> {
        if suffix.is_empty() {
            return Ok(Self::new());
        }
        let regex = Regex::new(&format!("{}{}", TIMESTAMPS_PATTERN, suffix))?;
        Ok(Self { regex })
    }

    /// Source of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Every non-overlapping match, left to right.
    pub fn find_all(&self, input: &str) -> Vec<MatchSpan> {
        self.regex
            .captures_iter(input)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(MatchSpan {
                    start: whole.start(),
                    end: whole.end(),
                    text: whole.as_str().to_string(),
                    timestamp: extract(&caps),
                })
            })
            .collect()
    }

    /// Replace every match with the text `replacer` returns for it.
    ///
    /// The replacer receives the parsed value, or `None` if the match did
    /// not decompose into a valid timestamp. Returning `None` or an empty
    /// string keeps the original text of the match.
    pub fn replace_all<F>(&self, input: &str, mut replacer: F) -> String
    where
        F: FnMut(Option<&Timestamp>) -> Option<String>,
    {
        self.regex
            .replace_all(input, |caps: &Captures<'_>| {
                let original = &caps[0];
                let timestamp = extract(caps);
                match replacer(timestamp.as_ref()) {
                    Some(text) if !text.is_empty() => {
                        debug!(original, replacement = %text, "replaced timestamp");
                        text
                    }
                    _ => {
                        debug!(original, "kept timestamp");
                        original.to_string()
                    }
                }
            })
            .into_owned()
    }
}

/// Replace every timestamp in `input` followed by `suffix`.
///
/// # Errors
///
/// Fails only if `suffix` is not a valid regular expression; problems with
/// individual matches never fail the call.
///
/// # Examples
///
/// ```
/// use duration_timestamp::{format_timestamp, replace_all, Style};
///
/// let out = replace_all(
///     "intro at 1:30 - then 2m later",
///     |ts| format_timestamp(ts, Style::Seconds),
///     " [-—]",
/// )
/// .unwrap();
/// assert_eq!(out, "intro at 90s then 2m later");
/// ```
pub fn replace_all<F>(input: &str, replacer: F, suffix: &str) -> Result<String, ReplaceError>
where
    F: FnMut(Option<&Timestamp>) -> Option<String>,
{
    let scanner = TimestampScanner::with_suffix(suffix)?;
    Ok(scanner.replace_all(input, replacer))
}
