/// Decides whether a media address is a transient, editing-session-only handle.
///
/// Implementations must be pure: no network or disk access.
pub trait AddressClassifier: Send + Sync {
    /// `true` when `address` must never appear in compiled output.
    fn is_transient(&self, address: &str) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
/// Treats `blob:` object URLs as transient and everything else as persisted.
pub struct BlobUrlClassifier;

impl AddressClassifier for BlobUrlClassifier {
    fn is_transient(&self, address: &str) -> bool {
        address
            .get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("blob:"))
    }
}

#[derive(Clone, Copy)]
/// Maps media addresses to their embeddable form.
///
/// Persisted addresses pass through unchanged; transient ones become the empty string. Each
/// address-bearing field is resolved on its own.
pub struct ResourceResolver<'a> {
    classifier: &'a dyn AddressClassifier,
}

impl std::fmt::Debug for ResourceResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceResolver").finish_non_exhaustive()
    }
}

impl<'a> ResourceResolver<'a> {
    /// Resolver backed by `classifier`.
    pub fn new(classifier: &'a dyn AddressClassifier) -> Self {
        Self { classifier }
    }

    /// Embeddable form of `address`.
    pub fn resolve<'s>(&self, address: &'s str) -> &'s str {
        if self.classifier.is_transient(address) {
            tracing::warn!(
                address,
                "transient media address omitted from output (media still uploading?)"
            );
            ""
        } else {
            address
        }
    }

    /// Resolve an optional address; absence stays absent.
    pub fn resolve_opt<'s>(&self, address: Option<&'s str>) -> Option<&'s str> {
        address.map(|a| self.resolve(a))
    }

    /// Resolve an address field that may be unset. An empty input stays absent, so the attribute
    /// is dropped rather than emitted empty.
    pub fn resolve_present<'s>(&self, address: &'s str) -> Option<&'s str> {
        if address.is_empty() {
            None
        } else {
            Some(self.resolve(address))
        }
    }

    /// Whether `address` survives resolution with a non-empty value.
    pub fn is_embeddable(&self, address: &str) -> bool {
        !self.resolve(address).is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resource/resolve.rs"]
mod tests;
