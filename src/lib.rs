//! # Duration Timestamp
//!
//! Find, parse, format and replace duration timestamps in free-form text.
//!
//! ## Architecture
//!
//! - **models**: Timestamp values, output styles and match spans
//! - **parse**: Colon (`1:02:03`) and unit (`1h 2m 3s`) syntax recognition
//! - **format**: Rendering a timestamp in one of six styles
//! - **replace**: Scanning text and substituting every timestamp
//! - **youtube**: Video id discovery in HTML and timestamp links
//! - **decorate**: Linking timestamps in HTML fragments to a video
//! - **config**: Configuration loading and validation

pub mod config;
pub mod decorate;
pub mod format;
pub mod models;
pub mod parse;
pub mod replace;
pub mod youtube;

pub use decorate::{DecorateConfig, Decorator, VideoContext};
pub use format::{format_named, format_timestamp};
pub use models::*;
pub use parse::parse_timestamp;
pub use replace::{replace_all, ReplaceError, TimestampScanner};
pub use youtube::{extract_youtube_id, youtube_link};
