use super::*;
use crate::model::element::{Link, Mask};
use crate::model::fill::Color;
use crate::test_helpers::{ctx, element, image, shape};

fn page_box(el: &Element) -> ElementBox {
    ElementBox::from_geometry(&el.geometry, crate::foundation::geometry::PageSize::default())
}

#[test]
fn frame_carries_box_as_percentages() {
    let el = image("i1", "https://x/a.jpg");
    let node = serialize_element(&el, &page_box(&el), &ctx(&RenderArgs::default()))
        .unwrap()
        .unwrap();
    assert_eq!(node.attr_value("id"), Some("el-i1"));
    assert_eq!(
        node.attr_value("style"),
        Some("position:absolute;left:10%;top:10%;width:50%;height:50%")
    );
    let mask = node.find("div").and_then(|d| d.child_nodes().next()).unwrap();
    assert_eq!(mask.attr_value("class"), Some("mask image-element"));
    assert!(mask.find("amp-img").is_some());
}

#[test]
fn rotation_and_opacity_appear_only_when_needed() {
    let mut el = shape("s1", Color::rgb(0, 0, 0));
    el.geometry.rotation = 45.0;
    el.opacity = 50.0;
    let node = serialize_element(&el, &page_box(&el), &ctx(&RenderArgs::default()))
        .unwrap()
        .unwrap();
    let style = node.attr_value("style").unwrap_or_default();
    assert!(style.contains("transform:rotate(45deg)"));
    assert!(style.ends_with("opacity:0.5"));
}

#[test]
fn link_wraps_mask_and_transient_link_is_dropped() {
    let mut el = image("i1", "https://x/a.jpg");
    el.link = Some(Link {
        url: "https://example.com/".to_string(),
        desc: Some("Read more".to_string()),
    });
    let node = serialize_element(&el, &page_box(&el), &ctx(&RenderArgs::default()))
        .unwrap()
        .unwrap();
    let a = node.find("a").unwrap();
    assert_eq!(a.attr_value("href"), Some("https://example.com/"));
    assert_eq!(a.attr_value("aria-label"), Some("Read more"));

    el.link = Some(Link {
        url: "blob:https://editor/1".to_string(),
        desc: None,
    });
    let node = serialize_element(&el, &page_box(&el), &ctx(&RenderArgs::default()))
        .unwrap()
        .unwrap();
    assert!(node.find("a").is_none());
}

#[test]
fn masks_become_mask_styles() {
    let mut el = image("i1", "https://x/a.jpg");
    el.mask = Some(Mask::Circle);
    let node = serialize_element(&el, &page_box(&el), &ctx(&RenderArgs::default()))
        .unwrap()
        .unwrap();
    assert!(node.to_markup().contains("clip-path:ellipse(50% 50% at 50% 50%)"));

    el.mask = Some(Mask::Rounded { radius: 20.6 });
    let node = serialize_element(&el, &page_box(&el), &ctx(&RenderArgs::default()))
        .unwrap()
        .unwrap();
    assert!(node.to_markup().contains("border-radius:10% / 6.6667%"));
}

#[test]
fn unknown_element_is_malformed() {
    let el = element("z", ElementKind::Unknown);
    let err = serialize_element(&el, &page_box(&el), &ctx(&RenderArgs::default())).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn ids_derive_from_element_id() {
    assert_eq!(media_id("abc"), "el-abc-media");
    assert_eq!(captions_id("abc"), "el-abc-captions");
}
