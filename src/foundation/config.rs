use std::path::Path;

use crate::foundation::error::{StoryError, StoryResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Read-only capability flags threaded from the story compiler down to every element serializer.
///
/// Every flag defaults to off. New flags must keep that default so previously compiled output
/// does not change. Unknown keys in a JSON configuration are ignored.
pub struct RenderArgs {
    /// Wire video caption tracks to a page-level `<amp-story-captions>` node.
    pub enhanced_captions: bool,
    /// Emit shopping tags and the page shopping attachment for product elements.
    pub shopping: bool,
    /// Emit `<amp-story-page-outlink>` for pages carrying an attachment.
    pub page_outlinks: bool,
}

impl RenderArgs {
    /// Parse flags from a JSON object.
    pub fn from_json(s: &str) -> StoryResult<Self> {
        serde_json::from_str(s).map_err(|e| StoryError::config(format!("render args: {e}")))
    }

    /// Load flags from a JSON file.
    pub fn from_path(path: &Path) -> StoryResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            StoryError::config(format!("read render args '{}': {e}", path.display()))
        })?;
        Self::from_json(&s)
    }

    /// Flags enabled in either `self` or `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            enhanced_captions: self.enhanced_captions || other.enhanced_captions,
            shopping: self.shopping || other.shopping,
            page_outlinks: self.page_outlinks || other.page_outlinks,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
