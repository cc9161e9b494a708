use super::*;

fn stop(position: f64) -> ColorStop {
    ColorStop {
        color: Color::rgb(0, 0, 0),
        position,
    }
}

#[test]
fn exactly_one_kind_resolves() {
    let fill = FillSpec::solid(Color::rgb(1, 2, 3)).resolve("shape").unwrap();
    assert_eq!(fill, Fill::Solid(Color::rgb(1, 2, 3)));

    let spec = FillSpec {
        image: Some("https://x/p.png".to_string()),
        ..FillSpec::default()
    };
    assert_eq!(
        spec.resolve("shape").unwrap(),
        Fill::Image("https://x/p.png".to_string())
    );
}

#[test]
fn zero_kinds_is_malformed() {
    let err = FillSpec::default().resolve("element 'a'").unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("found 0"));
}

#[test]
fn multiple_kinds_is_malformed() {
    let spec = FillSpec {
        solid: Some(Color::rgb(0, 0, 0)),
        gradient: Some(Gradient {
            kind: GradientKind::Linear,
            stops: vec![stop(0.0), stop(1.0)],
            rotation: 0.0,
        }),
        image: None,
    };
    let err = spec.resolve("element 'a'").unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("found 2"));
}

#[test]
fn gradient_without_stops_is_malformed() {
    let spec = FillSpec {
        gradient: Some(Gradient {
            kind: GradientKind::Radial,
            stops: vec![],
            rotation: 0.0,
        }),
        ..FillSpec::default()
    };
    assert!(spec.resolve("x").unwrap_err().is_malformed());
}

#[test]
fn json_alpha_defaults_to_opaque() {
    let spec: FillSpec = serde_json::from_str(r#"{ "solid": { "r": 10, "g": 20, "b": 30 } }"#).unwrap();
    assert_eq!(spec.solid.unwrap().a, 1.0);
}
