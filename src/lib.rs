//! Ampstory compiles editable web-story documents into AMP story markup.
//!
//! Compilation is a pure, deterministic transform of a read-only [`Story`] snapshot:
//!
//! - Load a story with [`Story::from_json`] or [`Story::from_path`]
//! - Pick capability flags in [`RenderArgs`]
//! - Call [`compile_story`] (or [`StoryCompiler::compile`] with custom collaborators) to get a
//!   [`Document`]
//!
//! Structural problems abort the whole document with [`StoryError::MalformedInput`]. Everything
//! else (missing optional fields, media still uploading) degrades per element.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compile;
mod foundation;
mod markup;
mod model;
mod resource;
mod serialize;

#[cfg(test)]
mod test_helpers;

pub use crate::compile::fingerprint::{DocumentFingerprint, fingerprint_input, fingerprint_markup};
pub use crate::compile::page::{PageMarkup, compile_page};
pub use crate::compile::story::{Document, StoryCompiler, compile_stories, compile_story};
pub use crate::foundation::config::RenderArgs;
pub use crate::foundation::error::{StoryError, StoryResult};
pub use crate::foundation::geometry::{
    DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH, ElementBox, Geometry, PageSize,
};
pub use crate::markup::node::{Child, MarkupNode};
pub use crate::markup::style::{CssFillTranslator, FillTranslator, Style};
pub use crate::model::element::{
    BackgroundElement, Element, ElementKind, Font, GifElement, ImageElement, Link, Mask,
    MediaOutput, Product, ProductElement, ProductImage, Resource, ShapeElement, Sticker,
    StickerElement, TextAlign, TextElement, Track, VideoElement, override_or_default,
};
pub use crate::model::fill::{Color, ColorStop, Fill, FillSpec, Gradient, GradientKind};
pub use crate::model::story::{
    Animation, AnimationEffect, Direction, Page, PageAdvancement, PageAttachment, Story,
    StoryMetadata,
};
pub use crate::resource::resolve::{AddressClassifier, BlobUrlClassifier, ResourceResolver};
pub use crate::serialize::{RenderCtx, captions_id, frame_id, media_id, serialize_element};
