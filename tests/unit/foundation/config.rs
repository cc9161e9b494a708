use super::*;

#[test]
fn default_has_every_flag_off() {
    let args = RenderArgs::default();
    assert!(!args.enhanced_captions);
    assert!(!args.shopping);
    assert!(!args.page_outlinks);
}

#[test]
fn missing_and_unknown_keys_are_tolerated() {
    let args = RenderArgs::from_json(r#"{ "enhancedCaptions": true, "someFutureFlag": 1 }"#).unwrap();
    assert!(args.enhanced_captions);
    assert!(!args.shopping);
}

#[test]
fn bad_json_is_a_config_error() {
    let err = RenderArgs::from_json("{ nope").unwrap_err();
    assert!(err.to_string().contains("configuration error:"));
}

#[test]
fn union_ors_flags() {
    let a = RenderArgs {
        enhanced_captions: true,
        ..RenderArgs::default()
    };
    let b = RenderArgs {
        shopping: true,
        ..RenderArgs::default()
    };
    let u = a.union(b);
    assert!(u.enhanced_captions && u.shopping && !u.page_outlinks);
}

#[test]
fn missing_file_is_a_config_error() {
    let err = RenderArgs::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, StoryError::Config(_)));
}
