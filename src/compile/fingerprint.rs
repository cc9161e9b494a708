use std::fmt;

use xxhash_rust::xxh3::Xxh3;

use crate::foundation::config::RenderArgs;
use crate::foundation::error::{StoryError, StoryResult};
use crate::model::story::Story;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit content hash used to key published documents and compile caches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for DocumentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint of compiled markup bytes.
pub fn fingerprint_markup(markup: &str) -> DocumentFingerprint {
    let mut h = StableHasher::new();
    h.write_str(markup);
    h.finish()
}

/// Fingerprint of a compilation input.
///
/// Two inputs with the same fingerprint compile to the same document, so callers can skip
/// recompiling unchanged stories. Object keys are hashed in sorted order, so field order in the
/// source JSON does not matter.
pub fn fingerprint_input(story: &Story, args: &RenderArgs) -> StoryResult<DocumentFingerprint> {
    let value = serde_json::to_value(story)
        .map_err(|e| StoryError::serde(format!("fingerprint story: {e}")))?;
    let mut h = StableHasher::new();
    h.write_bool(args.enhanced_captions);
    h.write_bool(args.shopping);
    h.write_bool(args.page_outlinks);
    write_json_value(&mut h, &value);
    Ok(h.finish())
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> DocumentFingerprint {
        let v = self.inner.digest128();
        DocumentFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_json_value(h: &mut StableHasher, v: &serde_json::Value) {
    match v {
        serde_json::Value::Null => h.write_u8(0),
        serde_json::Value::Bool(x) => {
            h.write_u8(1);
            h.write_bool(*x);
        }
        serde_json::Value::Number(n) => {
            h.write_u8(2);
            h.write_str(&n.to_string());
        }
        serde_json::Value::String(s) => {
            h.write_u8(3);
            h.write_str(s);
        }
        serde_json::Value::Array(items) => {
            h.write_u8(4);
            h.write_u64(items.len() as u64);
            for item in items {
                write_json_value(h, item);
            }
        }
        serde_json::Value::Object(map) => {
            h.write_u8(5);
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            h.write_u64(entries.len() as u64);
            for (k, v) in entries {
                h.write_str(k);
                write_json_value(h, v);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
