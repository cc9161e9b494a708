use super::*;
use crate::model::fill::{ColorStop, Gradient};

#[test]
fn style_joins_declarations_in_order() {
    let s = Style::new()
        .decl("left", "10%")
        .decl_opt("opacity", None::<String>)
        .decl("top", "5%");
    assert_eq!(s.to_css(), "left:10%;top:5%");
    assert!(Style::new().is_empty());
}

#[test]
fn colors() {
    assert_eq!(css_color(&Color::rgb(255, 0, 16)), "#ff0010");
    assert_eq!(
        css_color(&Color {
            r: 0,
            g: 0,
            b: 0,
            a: 0.5
        }),
        "rgba(0,0,0,0.5)"
    );
}

#[test]
fn solid_fill() {
    let d = CssFillTranslator.declarations(&Fill::Solid(Color::rgb(0, 0, 0)));
    assert_eq!(d, vec![("background-color".to_string(), "#000000".to_string())]);
}

#[test]
fn linear_gradient_fill() {
    let g = Gradient {
        kind: GradientKind::Linear,
        stops: vec![
            ColorStop {
                color: Color::rgb(255, 255, 255),
                position: 0.0,
            },
            ColorStop {
                color: Color::rgb(0, 0, 0),
                position: 1.0,
            },
        ],
        rotation: 0.25,
    };
    let d = CssFillTranslator.declarations(&Fill::Gradient(g));
    assert_eq!(d[0].0, "background-image");
    assert_eq!(d[0].1, "linear-gradient(0.75turn,#ffffff 0%,#000000 100%)");
}

#[test]
fn image_fill_and_empty_image_fill() {
    let d = CssFillTranslator.declarations(&Fill::Image("https://x/p.png".to_string()));
    assert_eq!(d[0].1, "url(\"https://x/p.png\")");
    assert_eq!(d.len(), 3);
    assert!(CssFillTranslator.declarations(&Fill::Image(String::new())).is_empty());
}
