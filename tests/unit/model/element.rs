use super::*;

#[test]
fn override_wins_when_defined() {
    assert_eq!(override_or_default(Some("a"), Some("b")), Some("a"));
    assert_eq!(override_or_default(None, Some("b")), Some("b"));
    assert_eq!(override_or_default(None, None), None);
}

#[test]
fn empty_string_override_wins() {
    assert_eq!(override_or_default(Some(""), Some("https://x/img.jpg")), Some(""));
}

#[test]
fn video_json_parses_with_defaults() {
    let json = r#"{
        "id": "v1",
        "type": "video",
        "x": 10, "y": 20, "width": 100, "height": 50,
        "resource": { "src": "https://x/v.mp4", "mimeType": "video/mp4", "isMuted": true },
        "tracks": [{ "id": "t0", "track": "https://x/en.vtt", "srclang": "en" }]
    }"#;
    let el: Element = serde_json::from_str(json).unwrap();
    assert_eq!(el.id, "v1");
    assert_eq!(el.geometry.width, 100.0);
    assert_eq!(el.opacity, 100.0);
    assert!(!el.is_page_background());
    let ElementKind::Video(v) = &el.kind else {
        panic!("expected video, got {}", el.type_name());
    };
    assert!(v.resource.is_muted);
    assert!(!v.looping);
    assert!(v.poster.is_none());
    assert_eq!(v.tracks[0].kind, "captions");
}

#[test]
fn explicit_empty_poster_is_kept_distinct_from_absent() {
    let json = r#"{
        "id": "v1", "type": "video", "poster": "",
        "resource": { "src": "https://x/v.mp4", "poster": "https://x/p.jpg" }
    }"#;
    let el: Element = serde_json::from_str(json).unwrap();
    let ElementKind::Video(v) = el.kind else {
        panic!("expected video");
    };
    assert_eq!(v.poster.as_deref(), Some(""));
}

#[test]
fn unknown_type_parses_as_unknown() {
    let el: Element = serde_json::from_str(r#"{ "id": "z", "type": "hologram" }"#).unwrap();
    assert!(matches!(el.kind, ElementKind::Unknown));
    assert_eq!(el.type_name(), "unknown");
}

#[test]
fn background_type_counts_as_page_background() {
    let el: Element = serde_json::from_str(
        r#"{ "id": "bg", "type": "background", "fill": { "solid": { "r": 0, "g": 0, "b": 0 } } }"#,
    )
    .unwrap();
    assert!(el.is_page_background());
}

#[test]
fn mask_is_tagged() {
    let el: Element = serde_json::from_str(
        r#"{ "id": "i", "type": "image", "mask": { "type": "rounded", "radius": 8 },
             "resource": { "src": "https://x/a.png" } }"#,
    )
    .unwrap();
    assert_eq!(el.mask, Some(Mask::Rounded { radius: 8.0 }));
}

#[test]
fn partially_filled_elements_parse() {
    let json = r#"{
        "id": "v2",
        "type": "video",
        "resource": { "mimeType": "video/mp4", "poster": "https://x/p.jpg" },
        "tracks": [{ "id": "t", "srclang": "en" }]
    }"#;
    let el: Element = serde_json::from_str(json).unwrap();
    let ElementKind::Video(v) = &el.kind else {
        panic!("expected video, got {}", el.type_name());
    };
    assert_eq!(v.resource.src, "");
    assert_eq!(v.tracks[0].track, "");

    let product: Element =
        serde_json::from_str(r#"{ "id": "p", "type": "product", "product": { "productTitle": "Shoe" } }"#)
            .unwrap();
    let ElementKind::Product(p) = &product.kind else {
        panic!("expected product, got {}", product.type_name());
    };
    assert_eq!(p.product.product_id, "");

    let linked: Element = serde_json::from_str(
        r#"{ "id": "i", "type": "image", "link": { "desc": "d" }, "resource": { "output": [{}] } }"#,
    )
    .unwrap();
    assert_eq!(linked.link.map(|l| l.url), Some(String::new()));
}
