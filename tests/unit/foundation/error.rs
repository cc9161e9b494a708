use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StoryError::malformed("x")
            .to_string()
            .contains("malformed input:")
    );
    assert!(
        StoryError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        StoryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_malformed_input_is_malformed() {
    assert!(StoryError::malformed("two backgrounds").is_malformed());
    assert!(!StoryError::config("x").is_malformed());
    assert!(!StoryError::serde("x").is_malformed());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StoryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
