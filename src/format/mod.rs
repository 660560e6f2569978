//! Rendering timestamps into text.

use crate::models::{is_valid, Style, StyleError, Timestamp};

/// Render `value` in `style`.
///
/// Returns `None` when the value is missing or carries no components.
/// Word and unit styles skip zero components; only `Numeric` shows them.
pub fn format_timestamp(value: Option<&Timestamp>, style: Style) -> Option<String> {
    if !is_valid(value) {
        return None;
    }
    let ts = value?;

    let hours = nonzero(ts.hours);
    let minutes = nonzero(ts.minutes);
    let seconds = nonzero(ts.seconds);

    let text = match style {
        Style::Tiny => join_units(&[(hours, "h"), (minutes, "m"), (seconds, "s")], "", "0s"),
        Style::Short => join_units(&[(hours, "h"), (minutes, "m"), (seconds, "s")], " ", "00s"),
        Style::Medium => join_units(
            &[(hours, " hours"), (minutes, " mins"), (seconds, " secs")],
            " ",
            "0 secs",
        ),
        Style::Long => join_units(
            &[(hours, " hours"), (minutes, " minutes"), (seconds, " seconds")],
            " ",
            "0 seconds",
        ),
        Style::Numeric => match hours {
            Some(h) => format!("{}:{}:{}", h, pad(ts.minutes), pad(ts.seconds)),
            None => format!(
                "{}:{}",
                minutes.map_or_else(|| "0".to_string(), |m| m.to_string()),
                pad(ts.seconds)
            ),
        },
        Style::Seconds => format!("{}s", ts.total),
    };

    Some(text)
}

/// Like [`format_timestamp`], with the style given by name or template.
///
/// # Errors
///
/// Returns [`StyleError::InvalidFormatStyle`] for an unknown style.
pub fn format_named(value: Option<&Timestamp>, style: &str) -> Result<Option<String>, StyleError> {
    let style: Style = style.parse()?;
    Ok(format_timestamp(value, style))
}

/// Pad a component for `00:00:00` output.
pub fn pad(value: Option<u32>) -> String {
    match nonzero(value) {
        None => "00".to_string(),
        Some(v) => format!("{:02}", v),
    }
}

fn nonzero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

fn join_units(parts: &[(Option<u32>, &str)], separator: &str, empty: &str) -> String {
    let rendered: Vec<String> = parts
        .iter()
        .filter_map(|(value, unit)| value.map(|v| format!("{}{}", v, unit)))
        .collect();

    if rendered.is_empty() {
        empty.to_string()
    } else {
        rendered.join(separator)
    }
}
