//! YouTube video id discovery and timestamp links.
//!
//! The id is looked up in markup through [`NodeQuery`], a minimal
//! "first matching descendant's attribute" capability implemented for
//! `scraper` documents and elements.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::format::format_timestamp;
use crate::models::{Style, Timestamp};

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";
pub const EMBED_URL_PREFIX: &str = "https://www.youtube.com/embed/";

/// Attribute carried by player placeholders that hold the id directly.
pub const DATA_ID_ATTR: &str = "data-youtube-id";

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch";

/// Length of the `/embed/` path prefix
const EMBED_PATH_PREFIX_LEN: usize = 7;

static WATCH_LINK_SEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!(r#"[href^="{}"]"#, WATCH_URL_PREFIX)).expect("watch link selector")
});
static DATA_ID_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(&format!("[{}]", DATA_ID_ATTR)).expect("data id selector"));
static EMBED_SEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!(r#"[src^="{}"]"#, EMBED_URL_PREFIX)).expect("embed selector")
});

/// Tree queries needed to discover a video id.
pub trait NodeQuery {
    /// Value of `attr` on the first descendant matched by `selector`.
    fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String>;
}

impl NodeQuery for Html {
    fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        let el = self.select(selector).next()?;
        el.value().attr(attr).map(str::to_string)
    }
}

impl NodeQuery for ElementRef<'_> {
    fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        let el = self.select(selector).next()?;
        el.value().attr(attr).map(str::to_string)
    }
}

/// Find the first YouTube video id within `node`.
///
/// Strategies, in priority order:
/// 1. a link to a watch page (`?v=` query parameter)
/// 2. a player placeholder carrying `data-youtube-id`
/// 3. an embed whose source path is `/embed/<id>`
///
/// Returns an empty string when nothing matches. The id is not validated.
pub fn extract_youtube_id<N: NodeQuery + ?Sized>(node: &N) -> String {
    if let Some(id) = id_from_watch_link(node) {
        debug!(video_id = %id, "video id from watch link");
        return id;
    }

    if let Some(id) = node
        .first_attr(&DATA_ID_SEL, DATA_ID_ATTR)
        .filter(|id| !id.is_empty())
    {
        debug!(video_id = %id, "video id from data attribute");
        return id;
    }

    if let Some(id) = id_from_embed(node) {
        debug!(video_id = %id, "video id from embed");
        return id;
    }

    String::new()
}

/// Parse `html` as a fragment and look for a video id in it.
pub fn extract_youtube_id_from_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    extract_youtube_id(&fragment)
}

fn id_from_watch_link<N: NodeQuery + ?Sized>(node: &N) -> Option<String> {
    let href = node.first_attr(&WATCH_LINK_SEL, "href")?;
    let url = Url::parse(&href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

fn id_from_embed<N: NodeQuery + ?Sized>(node: &N) -> Option<String> {
    let src = node.first_attr(&EMBED_SEL, "src")?;
    let url = Url::parse(&src).ok()?;
    url.path()
        .get(EMBED_PATH_PREFIX_LEN..)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Watch page URL starting playback at `value`.
pub fn watch_url(video_id: &str, value: &Timestamp) -> Option<String> {
    let start = format_timestamp(Some(value), Style::Tiny)?;
    let url = Url::parse_with_params(WATCH_URL_BASE, &[("v", video_id), ("t", start.as_str())]).ok()?;
    Some(url.into())
}

/// HTML link that opens the video at `value`, followed by `suffix`.
///
/// The link text is `value` rendered in `style`. Returns `None` when the
/// value is invalid, so it can be used directly as a replacer.
pub fn youtube_link(
    value: Option<&Timestamp>,
    video_id: &str,
    suffix: &str,
    style: Style,
) -> Option<String> {
    let text = format_timestamp(value, style)?;
    let href = watch_url(video_id, value?)?;
    Some(format!(
        r#"<a href="{}" title="View the video {} at {}">{}</a>{}"#,
        href,
        escape_html(video_id),
        text,
        text,
        suffix
    ))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
