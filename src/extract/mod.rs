//! Extraction of short-form video entries from a fetched page
//!
//! Extraction runs in three steps:
//! 1. A [`JsonLocator`] finds the embedded bootstrap JSON in the HTML
//! 2. The located text is parsed, with a brace-balanced retry on failure
//! 3. The parsed tree is walked and known entry layouts become [`ShortItem`]s

mod item;
mod locate;
mod shapes;
mod walker;

pub use item::{ItemKind, ShortItem};
pub use locate::{
    balanced_object, build_locator, parse_embedded, parse_unbounded, EmbeddedJson, JsonLocator,
    RegexLocator, ScriptTagLocator,
};
pub use shapes::{classic_item, modern_item, CLASSIC_KEY, MODERN_KEY, UNKNOWN_TITLE};
pub use walker::{collect_shorts, release_tree};

use crate::ScoutError;

/// Extracts all short-form entries from an HTML document
///
/// # Arguments
///
/// * `html` - The full page body
/// * `locator` - Strategy for finding the embedded JSON
/// * `origin` - Site origin used to build canonical URLs
///
/// # Returns
///
/// * `Ok(Vec<ShortItem>)` - Entries in discovery order, possibly empty
/// * `Err(ScoutError::ExtractionFailed)` - No embedded data marker in the page
/// * `Err(ScoutError::MalformedData)` - Marker found but the data is not JSON
pub fn extract_shorts(
    html: &str,
    locator: &dyn JsonLocator,
    origin: &str,
) -> Result<Vec<ShortItem>, ScoutError> {
    let embedded = locator.locate(html).ok_or(ScoutError::ExtractionFailed)?;
    let tree = parse_embedded(&embedded)?;
    let items = collect_shorts(&tree, origin);
    release_tree(tree);
    tracing::debug!("Extracted {} items", items.len());
    Ok(items)
}
