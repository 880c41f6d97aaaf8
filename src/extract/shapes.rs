//! Per-node record extraction for the two known entry layouts
//!
//! Each function looks at the value stored under its layout key and
//! returns `None` when the node has no usable identifier. Every other
//! field falls back to a default instead of rejecting the node.

use crate::extract::item::{ItemKind, ShortItem};
use serde_json::Value;

/// Key marking a modern-layout entry
pub const MODERN_KEY: &str = "shortsLockupViewModel";

/// Key marking a classic-layout entry
pub const CLASSIC_KEY: &str = "reelItemRenderer";

pub const UNKNOWN_TITLE: &str = "Unknown";

/// Non-empty string at a JSON pointer below `node`
fn text_at<'a>(node: &'a Value, pointer: &str) -> Option<&'a str> {
    node.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Text of a `{simpleText}` or `{runs: [{text}]}` container
fn rendered_text(node: &Value, pointer: &str) -> Option<String> {
    let container = node.pointer(pointer)?;
    if let Some(simple) = text_at(container, "/simpleText") {
        return Some(simple.to_string());
    }

    let joined: String = container
        .get("runs")?
        .as_array()?
        .iter()
        .filter_map(|run| run.get("text").and_then(Value::as_str))
        .collect();
    (!joined.is_empty()).then_some(joined)
}

fn shorts_url(origin: &str, id: &str) -> String {
    format!("{}/shorts/{}", origin, id)
}

/// Extracts a record from a `shortsLockupViewModel` value
///
/// The thumbnail is the last image source, which is the largest rendition.
pub fn modern_item(node: &Value, origin: &str) -> Option<ShortItem> {
    let id = text_at(node, "/entityId")?;

    let title = text_at(node, "/overlayMetadata/primaryText/content")
        .or_else(|| {
            text_at(node, "/accessibilityText").map(|text| text.split(',').next().unwrap_or(text))
        })
        .unwrap_or(UNKNOWN_TITLE);

    let views = text_at(node, "/overlayMetadata/secondaryText/content").unwrap_or_default();

    let url = match text_at(
        node,
        "/onTap/innertubeCommand/commandMetadata/webCommandMetadata/url",
    ) {
        Some(path) if path.starts_with('/') => format!("{}{}", origin, path),
        _ => shorts_url(origin, id),
    };

    let thumbnail = node
        .pointer("/thumbnailViewModel/thumbnailViewModel/image/sources")
        .and_then(Value::as_array)
        .and_then(|sources| sources.last())
        .and_then(|source| text_at(source, "/url"))
        .map(str::to_string);

    Some(ShortItem {
        id: id.to_string(),
        title: title.to_string(),
        views: views.to_string(),
        url,
        thumbnail,
        kind: ItemKind::Modern,
    })
}

/// Extracts a record from a `reelItemRenderer` value
///
/// The thumbnail is the first listed image.
pub fn classic_item(node: &Value, origin: &str) -> Option<ShortItem> {
    let id = text_at(node, "/videoId")?;

    let title = rendered_text(node, "/headline").unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let views = rendered_text(node, "/viewCountText").unwrap_or_default();

    let thumbnail = node
        .pointer("/thumbnail/thumbnails")
        .and_then(Value::as_array)
        .and_then(|thumbnails| thumbnails.first())
        .and_then(|thumbnail| text_at(thumbnail, "/url"))
        .map(str::to_string);

    Some(ShortItem {
        id: id.to_string(),
        title,
        views,
        url: shorts_url(origin, id),
        thumbnail,
        kind: ItemKind::Classic,
    })
}
