use crate::foundation::error::{StoryError, StoryResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Straight-alpha sRGB color. Alpha is in `[0, 1]`.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Gradient geometry.
pub enum GradientKind {
    /// Linear gradient along `rotation`.
    #[default]
    Linear,
    /// Radial gradient from the center.
    Radial,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One gradient stop. `position` is in `[0, 1]`.
pub struct ColorStop {
    /// Stop color.
    pub color: Color,
    /// Stop position.
    pub position: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A multi-stop gradient.
pub struct Gradient {
    /// Linear or radial.
    #[serde(default)]
    pub kind: GradientKind,
    /// Stops in paint order.
    pub stops: Vec<ColorStop>,
    /// Rotation in turns (linear only).
    #[serde(default)]
    pub rotation: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Authoring form of a fill: exactly one of the three fields must be set.
pub struct FillSpec {
    /// Solid color fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solid: Option<Color>,
    /// Gradient fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    /// Pattern image address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
/// A validated fill with exactly one kind.
pub enum Fill {
    /// Solid color.
    Solid(Color),
    /// Gradient.
    Gradient(Gradient),
    /// Pattern image at an address.
    Image(String),
}

impl FillSpec {
    /// Solid-color spec.
    pub fn solid(color: Color) -> Self {
        Self {
            solid: Some(color),
            ..Self::default()
        }
    }

    /// Validate that exactly one fill kind is present. `owner` names the element or page for
    /// the error message.
    pub fn resolve(&self, owner: &str) -> StoryResult<Fill> {
        let set = usize::from(self.solid.is_some())
            + usize::from(self.gradient.is_some())
            + usize::from(self.image.is_some());
        if set != 1 {
            return Err(StoryError::malformed(format!(
                "{owner}: fill must set exactly one of solid/gradient/image (found {set})"
            )));
        }
        if let Some(c) = self.solid {
            return Ok(Fill::Solid(c));
        }
        if let Some(g) = &self.gradient {
            if g.stops.is_empty() {
                return Err(StoryError::malformed(format!(
                    "{owner}: gradient fill has no stops"
                )));
            }
            return Ok(Fill::Gradient(g.clone()));
        }
        match &self.image {
            Some(src) => Ok(Fill::Image(src.clone())),
            None => Err(StoryError::malformed(format!("{owner}: empty fill"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/fill.rs"]
mod tests;
