use crate::foundation::geometry::Geometry;
use crate::model::fill::{Color, FillSpec};

/// Pick an element-level override when it is defined, otherwise the resource default.
///
/// Defined-ness is the only test: `Some("")` is a valid explicit override and wins.
pub fn override_or_default<'a>(over: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
    match over {
        Some(v) => Some(v),
        None => default,
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A positioned visual unit on a page.
pub struct Element {
    /// Identifier, unique within the story.
    pub id: String,
    /// Position, size and rotation in editor units.
    #[serde(flatten)]
    pub geometry: Geometry,
    /// Opacity in percent (`0..=100`).
    #[serde(default = "full_opacity")]
    pub opacity: f64,
    /// Marks this element as the page background.
    #[serde(default)]
    pub is_background: bool,
    /// Optional click-through target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    /// Optional clipping mask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<Mask>,
    /// Kind-specific payload, discriminated by the `type` field.
    #[serde(flatten)]
    pub kind: ElementKind,
}

fn full_opacity() -> f64 {
    100.0
}

impl Element {
    /// Whether this element paints the page background.
    pub fn is_page_background(&self) -> bool {
        self.is_background || matches!(self.kind, ElementKind::Background(_))
    }

    /// Discriminant name as it appears in input documents.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Element variants.
pub enum ElementKind {
    /// Still image.
    Image(ImageElement),
    /// Video with optional caption tracks.
    Video(VideoElement),
    /// Animated media converted to looping video.
    Gif(GifElement),
    /// Rich text.
    Text(TextElement),
    /// Filled shape.
    Shape(ShapeElement),
    /// Shoppable product tag.
    Product(ProductElement),
    /// Decorative sticker.
    Sticker(StickerElement),
    /// Plain page background fill.
    Background(BackgroundElement),
    /// Any discriminant this compiler does not know. Rejected at compile time.
    #[serde(other)]
    Unknown,
}

impl ElementKind {
    /// Discriminant name as it appears in input documents.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Video(_) => "video",
            Self::Gif(_) => "gif",
            Self::Text(_) => "text",
            Self::Shape(_) => "shape",
            Self::Product(_) => "product",
            Self::Sticker(_) => "sticker",
            Self::Background(_) => "background",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Underlying media asset, embedded by value in the element that uses it.
pub struct Resource {
    /// Media address; may be a transient (`blob:`) handle while uploading. Empty when unset.
    #[serde(default)]
    pub src: String,
    /// MIME type of `src`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Default poster/thumbnail address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Default alternative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Whether the media has no audio track.
    #[serde(default)]
    pub is_muted: bool,
    /// Converted renditions (used by animated media).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<MediaOutput>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A converted rendition of a resource.
pub struct MediaOutput {
    /// Rendition address.
    #[serde(default)]
    pub src: String,
    /// Rendition MIME type.
    #[serde(default)]
    pub mime_type: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Click-through target.
pub struct Link {
    /// Target address.
    #[serde(default)]
    pub url: String,
    /// Optional accessible description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Clipping mask applied to element content.
pub enum Mask {
    /// No clipping beyond the box.
    Rectangle,
    /// Ellipse inscribed in the box.
    Circle,
    /// Rectangle with rounded corners, radius in editor units.
    Rounded {
        /// Corner radius.
        radius: f64,
    },
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Image payload.
pub struct ImageElement {
    /// Image media.
    #[serde(default)]
    pub resource: Resource,
    /// Alt override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Video payload.
pub struct VideoElement {
    /// Video media.
    #[serde(default)]
    pub resource: Resource,
    /// Poster override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Alt override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Loop playback.
    #[serde(default, rename = "loop")]
    pub looping: bool,
    /// Caption/subtitle tracks; the first one is the default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<Track>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Timed text track attached to a video.
pub struct Track {
    /// Track identifier.
    #[serde(default)]
    pub id: String,
    /// Track file address.
    #[serde(default)]
    pub track: String,
    /// Track kind.
    #[serde(default = "captions_kind")]
    pub kind: String,
    /// Language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srclang: Option<String>,
    /// Human readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn captions_kind() -> String {
    "captions".to_string()
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Animated media payload.
pub struct GifElement {
    /// Original media plus converted `output` renditions.
    #[serde(default)]
    pub resource: Resource,
    /// Poster override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Alt override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Start edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// End edge.
    Right,
    /// Justified.
    Justify,
}

impl TextAlign {
    /// CSS keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Font selection.
pub struct Font {
    /// Primary family.
    pub family: String,
    /// Generic or fallback families in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Text payload.
pub struct TextElement {
    /// Inline rich content produced by the editor (already sanitized markup).
    #[serde(default)]
    pub content: String,
    /// Font selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Font size in editor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Unitless line height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Default text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Highlight behind the text box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Shape payload.
pub struct ShapeElement {
    /// Fill; exactly one kind must be set.
    #[serde(default)]
    pub fill: FillSpec,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Product payload.
pub struct ProductElement {
    /// Product reference.
    #[serde(default)]
    pub product: Product,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Shoppable product description.
pub struct Product {
    /// Product identifier, used as the shopping tag key.
    #[serde(default)]
    pub product_id: String,
    /// Display title.
    #[serde(default)]
    pub product_title: String,
    /// Brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_brand: Option<String>,
    /// Price amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_price: Option<f64>,
    /// ISO currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_price_currency: Option<String>,
    /// Product images.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_images: Vec<ProductImage>,
    /// Product detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Product image.
pub struct ProductImage {
    /// Image address.
    #[serde(default)]
    pub url: String,
    /// Alt text.
    #[serde(default)]
    pub alt: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Sticker payload.
pub struct StickerElement {
    /// Sticker artwork.
    #[serde(default)]
    pub sticker: Sticker,
    /// Alt override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Sticker artwork reference.
pub struct Sticker {
    /// Sticker catalog key.
    #[serde(default, rename = "type")]
    pub sticker_type: String,
    /// Artwork address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Background payload.
pub struct BackgroundElement {
    /// Fill; exactly one kind must be set.
    #[serde(default)]
    pub fill: FillSpec,
}

#[cfg(test)]
#[path = "../../tests/unit/model/element.rs"]
mod tests;
