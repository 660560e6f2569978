//! Core data models for timestamp handling.

mod span;
mod style;
mod timestamp;

pub use span::*;
pub use style::*;
pub use timestamp::*;
