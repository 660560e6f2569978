//! Located timestamp occurrences.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A timestamp occurrence found while scanning text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Byte offset of the first matched character
    pub start: usize,

    /// Byte offset one past the last matched character
    pub end: usize,

    /// Matched text, including any matched suffix
    pub text: String,

    /// Parsed value, if the match decomposed into a valid timestamp
    pub timestamp: Option<Timestamp>,
}

impl MatchSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
