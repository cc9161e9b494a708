use super::*;

#[test]
fn blob_urls_are_transient() {
    let c = BlobUrlClassifier;
    assert!(c.is_transient("blob:https://editor.local/1234-abcd"));
    assert!(c.is_transient("BLOB:https://editor.local/1234"));
    assert!(!c.is_transient("https://cdn.example.com/a.mp4"));
    assert!(!c.is_transient("blo"));
    assert!(!c.is_transient(""));
}

#[test]
fn transient_resolves_to_empty_and_persisted_to_itself() {
    let r = ResourceResolver::new(&BlobUrlClassifier);
    assert_eq!(r.resolve("blob:https://editor.local/1"), "");
    assert_eq!(r.resolve("https://x/img.jpg"), "https://x/img.jpg");
    assert_eq!(r.resolve(""), "");
}

#[test]
fn optional_addresses_keep_absence() {
    let r = ResourceResolver::new(&BlobUrlClassifier);
    assert_eq!(r.resolve_opt(None), None);
    assert_eq!(r.resolve_opt(Some("blob:x")), Some(""));
    assert_eq!(r.resolve_opt(Some("https://x/p.jpg")), Some("https://x/p.jpg"));
}

#[test]
fn unset_addresses_stay_absent() {
    let r = ResourceResolver::new(&BlobUrlClassifier);
    assert_eq!(r.resolve_present(""), None);
    assert_eq!(r.resolve_present("blob:x"), Some(""));
    assert_eq!(r.resolve_present("https://x/a.mp4"), Some("https://x/a.mp4"));
}

struct EverythingTransient;

impl AddressClassifier for EverythingTransient {
    fn is_transient(&self, _address: &str) -> bool {
        true
    }
}

#[test]
fn classifier_is_injected() {
    let r = ResourceResolver::new(&EverythingTransient);
    assert_eq!(r.resolve("https://x/img.jpg"), "");
    assert!(!r.is_embeddable("https://x/img.jpg"));
}
