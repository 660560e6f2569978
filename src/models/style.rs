//! Output styles for rendering a timestamp.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when resolving a style by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("Invalid format style: {0}")]
    InvalidFormatStyle(String),
}

/// The six renderings a timestamp can be formatted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `1:02:03`
    Numeric,
    /// `3723s`
    Seconds,
    /// `1h2m3s`
    Tiny,
    /// `1h 2m 3s`
    #[default]
    Short,
    /// `1 hours 2 mins 3 secs`
    Medium,
    /// `1 hours 2 minutes 3 seconds`
    Long,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Numeric,
        Style::Seconds,
        Style::Tiny,
        Style::Short,
        Style::Medium,
        Style::Long,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Style::Numeric => "numeric",
            Style::Seconds => "seconds",
            Style::Tiny => "tiny",
            Style::Short => "short",
            Style::Medium => "medium",
            Style::Long => "long",
        }
    }

    /// Zero-valued template, e.g. `0h 0m 0s` for `Short`.
    pub fn template(&self) -> &'static str {
        match self {
            Style::Numeric => "00:00:00",
            Style::Seconds => "0s",
            Style::Tiny => "0h0m0s",
            Style::Short => "0h 0m 0s",
            Style::Medium => "0 hours 0 mins 0 secs",
            Style::Long => "0 hours 0 minutes 0 seconds",
        }
    }
}

impl FromStr for Style {
    type Err = StyleError;

    /// Accepts a style name (any case) or its template string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| {
                style.name().eq_ignore_ascii_case(trimmed) || style.template() == trimmed
            })
            .ok_or_else(|| StyleError::InvalidFormatStyle(s.to_string()))
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
