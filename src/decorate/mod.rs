//! Turning timestamps in rendered HTML into links to a YouTube video.
//!
//! A [`Decorator`] is built once from [`DecorateConfig`] and applied to
//! each content block. The last video id seen is carried between blocks
//! by a caller-owned [`VideoContext`].

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::Style;
use crate::replace::{ReplaceError, TimestampScanner};
use crate::youtube::{extract_youtube_id, youtube_link};

/// Settings for decorating HTML fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorateConfig {
    /// Pattern a timestamp must be followed by to be linked
    #[serde(default = "default_suffix_pattern")]
    pub suffix_pattern: String,

    /// Text appended after each generated link
    #[serde(default = "default_link_suffix")]
    pub link_suffix: String,

    /// Style of the link text
    #[serde(default)]
    pub style: Style,

    /// Only decorate fragments with an `h1` containing this text
    #[serde(default)]
    pub required_heading: Option<String>,
}

fn default_suffix_pattern() -> String {
    " [-—]".to_string()
}

fn default_link_suffix() -> String {
    " —".to_string()
}

impl Default for DecorateConfig {
    fn default() -> Self {
        Self {
            suffix_pattern: default_suffix_pattern(),
            link_suffix: default_link_suffix(),
            style: Style::default(),
            required_heading: None,
        }
    }
}

/// Video id carried from one decorated fragment to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoContext {
    last_video_id: Option<String>,
}

impl VideoContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with a known id.
    pub fn with_video_id(video_id: impl Into<String>) -> Self {
        let mut ctx = Self::new();
        ctx.remember(video_id.into());
        ctx
    }

    /// The most recently resolved id, if any.
    pub fn video_id(&self) -> Option<&str> {
        self.last_video_id.as_deref()
    }

    fn remember(&mut self, video_id: String) {
        if !video_id.is_empty() {
            self.last_video_id = Some(video_id);
        }
    }
}

/// Links suffixed timestamps in HTML fragments to a YouTube video.
#[derive(Debug, Clone)]
pub struct Decorator {
    config: DecorateConfig,
    scanner: TimestampScanner,
}

impl Decorator {
    /// Build a decorator, compiling the configured suffix pattern.
    pub fn new(config: DecorateConfig) -> Result<Self, ReplaceError> {
        let scanner = TimestampScanner::with_suffix(&config.suffix_pattern)?;
        Ok(Self { config, scanner })
    }

    pub fn config(&self) -> &DecorateConfig {
        &self.config
    }

    /// Resolve the video id for a fragment: the fragment itself, then the
    /// surrounding page, then the id remembered in `ctx`. A newly found id
    /// is stored in `ctx`.
    pub fn resolve_video_id(
        &self,
        fragment: &Html,
        page: Option<&Html>,
        ctx: &mut VideoContext,
    ) -> Option<String> {
        let found = Some(extract_youtube_id(fragment))
            .filter(|id| !id.is_empty())
            .or_else(|| page.map(extract_youtube_id).filter(|id| !id.is_empty()));

        if let Some(id) = found {
            ctx.remember(id);
        }
        ctx.video_id().map(str::to_string)
    }

    /// Decorate `fragment_html`, returning the new HTML if anything changed.
    ///
    /// `page_html` is the enclosing document, searched for a video id when
    /// the fragment has none.
    pub fn decorate(
        &self,
        fragment_html: &str,
        page_html: Option<&str>,
        ctx: &mut VideoContext,
    ) -> Option<String> {
        let fragment = Html::parse_fragment(fragment_html);
        let page = page_html.map(Html::parse_document);

        let Some(video_id) = self.resolve_video_id(&fragment, page.as_ref(), ctx) else {
            debug!("no video id for fragment, skipping");
            return None;
        };

        if let Some(heading) = &self.config.required_heading {
            if !has_heading(&fragment, heading) {
                debug!(heading = %heading, "required heading missing, skipping");
                return None;
            }
        }

        self.link_timestamps(fragment_html, &video_id)
    }

    /// Replace suffixed timestamps in `html` with links to `video_id`.
    /// Returns `None` if no timestamp was linked.
    pub fn link_timestamps(&self, html: &str, video_id: &str) -> Option<String> {
        let mut linked = 0usize;
        let result = self.scanner.replace_all(html, |ts| {
            let link = youtube_link(ts, video_id, &self.config.link_suffix, self.config.style);
            if link.is_some() {
                linked += 1;
            }
            link
        });

        if linked == 0 || result == html {
            return None;
        }
        info!(video_id, linked, "linked timestamps");
        Some(result)
    }
}

fn has_heading(fragment: &Html, heading: &str) -> bool {
    let Ok(h1) = Selector::parse("h1") else {
        return false;
    };
    let needle = heading.to_lowercase();
    fragment
        .select(&h1)
        .any(|el| el.text().collect::<String>().to_lowercase().contains(&needle))
}
