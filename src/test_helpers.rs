//! Fixture builders shared by unit tests.

use crate::foundation::config::RenderArgs;
use crate::foundation::geometry::{Geometry, PageSize};
use crate::markup::style::CssFillTranslator;
use crate::model::element::{
    Element, ElementKind, ImageElement, Resource, ShapeElement, Track, VideoElement,
};
use crate::model::fill::{Color, FillSpec};
use crate::model::story::{Page, Story, StoryMetadata};
use crate::resource::resolve::{BlobUrlClassifier, ResourceResolver};
use crate::serialize::RenderCtx;

pub(crate) fn element(id: &str, kind: ElementKind) -> Element {
    Element {
        id: id.to_string(),
        geometry: Geometry {
            x: 41.2,
            y: 61.8,
            width: 206.0,
            height: 309.0,
            rotation: 0.0,
        },
        opacity: 100.0,
        is_background: false,
        link: None,
        mask: None,
        kind,
    }
}

pub(crate) fn image(id: &str, src: &str) -> Element {
    element(
        id,
        ElementKind::Image(ImageElement {
            resource: Resource {
                src: src.to_string(),
                mime_type: Some("image/jpeg".to_string()),
                alt: Some(format!("{id} alt")),
                ..Resource::default()
            },
            alt: None,
        }),
    )
}

pub(crate) fn video(id: &str) -> VideoElement {
    VideoElement {
        resource: Resource {
            src: "https://x/v.mp4".to_string(),
            mime_type: Some("video/mp4".to_string()),
            poster: Some("https://x/img.jpg".to_string()),
            alt: Some(format!("{id} alt")),
            ..Resource::default()
        },
        poster: None,
        alt: None,
        looping: false,
        tracks: vec![],
    }
}

pub(crate) fn track(id: &str, lang: &str) -> Track {
    Track {
        id: id.to_string(),
        track: format!("https://x/{lang}.vtt"),
        kind: "captions".to_string(),
        srclang: Some(lang.to_string()),
        label: Some(lang.to_uppercase()),
    }
}

pub(crate) fn shape(id: &str, color: Color) -> Element {
    element(
        id,
        ElementKind::Shape(ShapeElement {
            fill: FillSpec::solid(color),
        }),
    )
}

pub(crate) fn page(id: &str, elements: Vec<Element>) -> Page {
    Page {
        id: id.to_string(),
        elements,
        animations: vec![],
        background_color: None,
        advancement: None,
        background_audio: None,
        page_attachment: None,
    }
}

pub(crate) fn story(pages: Vec<Page>) -> Story {
    Story {
        metadata: StoryMetadata {
            title: "Test story".to_string(),
            ..StoryMetadata::default()
        },
        page_size: PageSize::default(),
        pages,
    }
}

pub(crate) fn ctx(args: &RenderArgs) -> RenderCtx<'_> {
    RenderCtx {
        args,
        resolver: ResourceResolver::new(&BlobUrlClassifier),
        fills: &CssFillTranslator,
    }
}
