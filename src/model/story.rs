use std::collections::HashSet;
use std::path::Path;

use crate::foundation::error::{StoryError, StoryResult};
use crate::foundation::geometry::PageSize;
use crate::model::element::{Element, ElementKind, Resource};
use crate::model::fill::FillSpec;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// The full editable document: global metadata plus pages in playback order.
///
/// A story is a pure data snapshot. Compilation only reads it; see [`crate::compile_story`].
pub struct Story {
    /// Document-level metadata.
    #[serde(default)]
    pub metadata: StoryMetadata,
    /// Page dimensions shared by every page.
    #[serde(default)]
    pub page_size: PageSize,
    /// Pages in playback order.
    pub pages: Vec<Page>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Metadata emitted into the document shell.
pub struct StoryMetadata {
    /// Story title.
    #[serde(default)]
    pub title: String,
    /// Publisher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Publisher logo address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_logo: Option<String>,
    /// Portrait poster address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_portrait: Option<String>,
    /// Canonical URL of the published story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    /// BCP 47 language tag; `en` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One screen of the story.
pub struct Page {
    /// Page identifier, unique within the story.
    pub id: String,
    /// Elements in paint order (later is on top). At most one may be a background.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Page-scoped animations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<Animation>,
    /// Fill behind every element, including the background element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<FillSpec>,
    /// Auto-advance settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advancement: Option<PageAdvancement>,
    /// Audio played while the page is visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_audio: Option<Resource>,
    /// Swipe-up outlink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_attachment: Option<PageAttachment>,
}

impl Page {
    /// Elements in paint order: background elements first, then the rest in stored order.
    pub fn paint_order(&self) -> impl Iterator<Item = &Element> {
        let (background, rest): (Vec<_>, Vec<_>) =
            self.elements.iter().partition(|e| e.is_page_background());
        background.into_iter().chain(rest)
    }

    /// The page background element, if any. More than one is a malformed page.
    pub fn background(&self) -> StoryResult<Option<&Element>> {
        let mut found: Option<&Element> = None;
        for el in self.elements.iter().filter(|e| e.is_page_background()) {
            if let Some(first) = found {
                return Err(StoryError::malformed(format!(
                    "page '{}' has more than one background element ('{}' and '{}')",
                    self.id, first.id, el.id
                )));
            }
            found = Some(el);
        }
        Ok(found)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Page advancement settings.
pub struct PageAdvancement {
    /// Advance automatically after `page_duration_secs`.
    #[serde(default)]
    pub auto_advance: bool,
    /// Seconds before auto-advancing.
    #[serde(default = "default_page_duration")]
    pub page_duration_secs: f64,
}

fn default_page_duration() -> f64 {
    7.0
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outlink shown at the bottom of a page.
pub struct PageAttachment {
    /// Target address.
    #[serde(default)]
    pub url: String,
    /// Call-to-action label.
    #[serde(default = "default_cta")]
    pub cta_text: String,
}

fn default_cta() -> String {
    "Learn more".to_string()
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// An animation applied to one or more elements of the same page.
pub struct Animation {
    /// Animation identifier.
    pub id: String,
    /// Element ids the animation applies to.
    pub targets: Vec<String>,
    /// Effect and its parameters.
    #[serde(flatten)]
    pub effect: AnimationEffect,
    /// Duration in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration: u32,
    /// Delay in milliseconds.
    #[serde(default)]
    pub delay: u32,
    /// CSS easing function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

fn default_duration_ms() -> u32 {
    1000
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Entry direction for fly-in.
pub enum Direction {
    /// From the left edge.
    Left,
    /// From the right edge.
    Right,
    /// From the top edge.
    Top,
    /// From the bottom edge.
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
/// Supported animation effects.
pub enum AnimationEffect {
    /// Opacity 0 to 1.
    FadeIn,
    /// Slide in from an edge.
    FlyIn {
        /// Entry edge.
        direction: Direction,
    },
    /// Scale between two factors.
    Zoom {
        /// Start scale.
        #[serde(default)]
        from: f64,
        /// End scale.
        #[serde(default = "unit_scale")]
        to: f64,
    },
    /// Rotate into place.
    Spin {
        /// Start rotation in degrees.
        #[serde(default = "default_spin")]
        rotation: f64,
    },
    /// Grow and shrink once.
    Pulse {
        /// Peak scale.
        #[serde(default = "default_pulse")]
        scale: f64,
    },
    /// Effect this compiler does not know; skipped during compilation.
    #[serde(other)]
    Unknown,
}

fn unit_scale() -> f64 {
    1.0
}

fn default_spin() -> f64 {
    -360.0
}

fn default_pulse() -> f64 {
    1.1
}

impl Story {
    /// Parse a story from JSON.
    pub fn from_json(s: &str) -> StoryResult<Self> {
        serde_json::from_str(s).map_err(|e| StoryError::serde(format!("story: {e}")))
    }

    /// Read and parse a story JSON file.
    pub fn from_path(path: &Path) -> StoryResult<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| StoryError::serde(format!("read story '{}': {e}", path.display())))?;
        Self::from_json(&s)
    }

    /// Structural checks that must hold before any markup is produced.
    pub fn validate(&self) -> StoryResult<()> {
        self.page_size.validate()?;

        let mut page_ids = HashSet::new();
        let mut element_ids = HashSet::new();
        for page in &self.pages {
            if page.id.trim().is_empty() {
                return Err(StoryError::malformed("page id must be non-empty"));
            }
            if !page_ids.insert(page.id.as_str()) {
                return Err(StoryError::malformed(format!(
                    "duplicate page id '{}'",
                    page.id
                )));
            }
            for el in &page.elements {
                if el.id.trim().is_empty() {
                    return Err(StoryError::malformed(format!(
                        "page '{}' has an element with an empty id",
                        page.id
                    )));
                }
                if !element_ids.insert(el.id.as_str()) {
                    return Err(StoryError::malformed(format!(
                        "duplicate element id '{}'",
                        el.id
                    )));
                }
                if matches!(el.kind, ElementKind::Unknown) {
                    return Err(StoryError::malformed(format!(
                        "element '{}' on page '{}' has an unknown type",
                        el.id, page.id
                    )));
                }
            }
            page.background()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/story.rs"]
mod tests;
