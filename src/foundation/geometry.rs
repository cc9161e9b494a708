use crate::foundation::error::{StoryError, StoryResult};

/// Editor page width in editor units.
pub const DEFAULT_PAGE_WIDTH: f64 = 412.0;
/// Editor page height in editor units.
pub const DEFAULT_PAGE_HEIGHT: f64 = 618.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Page dimensions in editor units. Element geometry is expressed in the same units.
pub struct PageSize {
    /// Page width.
    pub width: f64,
    /// Page height.
    pub height: f64,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAGE_WIDTH,
            height: DEFAULT_PAGE_HEIGHT,
        }
    }
}

impl PageSize {
    /// Reject non-finite or non-positive dimensions.
    pub fn validate(&self) -> StoryResult<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(StoryError::malformed(
                "page size width/height must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// `aspect-ratio` attribute value for grid layers, e.g. `412:618`.
    pub fn aspect_ratio(&self) -> String {
        format!("{}:{}", fmt_number(self.width), fmt_number(self.height))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Element geometry in editor units.
pub struct Geometry {
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Width.
    #[serde(default)]
    pub width: f64,
    /// Height.
    #[serde(default)]
    pub height: f64,
    /// Clockwise rotation in degrees around the box center.
    #[serde(default)]
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Element box relative to the page, in percent of page width/height.
pub struct ElementBox {
    /// Left offset in percent of page width.
    pub left: f64,
    /// Top offset in percent of page height.
    pub top: f64,
    /// Width in percent of page width.
    pub width: f64,
    /// Height in percent of page height.
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl ElementBox {
    /// Project editor geometry onto a page of the given size.
    pub fn from_geometry(g: &Geometry, page: PageSize) -> Self {
        let pct = |v: f64, of: f64| if v.is_finite() { v / of * 100.0 } else { 0.0 };
        Self {
            left: pct(g.x, page.width),
            top: pct(g.y, page.height),
            width: pct(g.width, page.width),
            height: pct(g.height, page.height),
            rotation: if g.rotation.is_finite() {
                g.rotation
            } else {
                0.0
            },
        }
    }

    /// Box covering the whole page.
    pub fn full_page() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
            rotation: 0.0,
        }
    }
}

/// Format a number for markup output: at most four decimals, no trailing zeros, no `-0`.
pub fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{:.4}", v);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
