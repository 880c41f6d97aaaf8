use serde::{Deserialize, Serialize};

/// Which JSON layout an item was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// `shortsLockupViewModel` entries
    Modern,
    /// `reelItemRenderer` entries
    Classic,
}

/// A short-form video entry discovered on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortItem {
    pub id: String,

    /// Display title, `"Unknown"` when the page carries none
    pub title: String,

    /// View count as rendered by the site (e.g. "14M views"), may be empty
    pub views: String,

    /// Canonical watch URL
    pub url: String,

    /// Thumbnail image URL, serialized as `null` when absent
    pub thumbnail: Option<String>,

    #[serde(rename = "type")]
    pub kind: ItemKind,
}
