use super::*;
use crate::foundation::config::RenderArgs;
use crate::model::fill::{Color, ColorStop, Gradient, GradientKind};
use crate::test_helpers::ctx;

#[test]
fn solid_shape() {
    let node = shape(
        &FillSpec::solid(Color::rgb(255, 0, 0)),
        "element 's'",
        &ctx(&RenderArgs::default()),
    )
    .unwrap();
    assert_eq!(
        node.to_markup(),
        r#"<div class="shape" style="background-color:#ff0000;width:100%;height:100%"></div>"#
    );
}

#[test]
fn shape_without_fill_is_malformed() {
    let err = shape(&FillSpec::default(), "element 's'", &ctx(&RenderArgs::default()))
        .unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("element 's'"));
}

#[test]
fn shape_with_two_fills_is_malformed() {
    let spec = FillSpec {
        solid: Some(Color::rgb(0, 0, 0)),
        image: Some("https://x/p.png".to_string()),
        gradient: None,
    };
    assert!(shape(&spec, "s", &ctx(&RenderArgs::default())).is_err());
}

#[test]
fn pattern_image_address_is_resolved() {
    let spec = FillSpec {
        image: Some("blob:https://editor/1".to_string()),
        ..FillSpec::default()
    };
    let style = fill_style(&spec, "s", &ctx(&RenderArgs::default())).unwrap();
    assert!(style.is_empty());

    let spec = FillSpec {
        image: Some("https://x/p.png".to_string()),
        ..FillSpec::default()
    };
    let css = fill_style(&spec, "s", &ctx(&RenderArgs::default()))
        .unwrap()
        .to_css();
    assert!(css.starts_with("background-image:url(\"https://x/p.png\")"));
}

#[test]
fn radial_background() {
    let spec = FillSpec {
        gradient: Some(Gradient {
            kind: GradientKind::Radial,
            stops: vec![ColorStop {
                color: Color::rgb(0, 0, 0),
                position: 0.5,
            }],
            rotation: 0.0,
        }),
        ..FillSpec::default()
    };
    let node = background(&spec, "bg", &ctx(&RenderArgs::default())).unwrap();
    assert_eq!(node.attr_value("class"), Some("background-fill"));
    assert!(
        node.attr_value("style")
            .unwrap_or_default()
            .contains("radial-gradient(#000000 50%)")
    );
}
