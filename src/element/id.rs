use super::ElementType;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex characters kept from the SHA-256 digest
const ID_HEX_LEN: usize = 32;

/// Stable identifier of an element within a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Wrap an identifier assigned by the extractor
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Content hash of the element's type and text.
    ///
    /// Identical elements hash identically; use [`ElementId::sequenced`] when
    /// a document repeats text verbatim.
    pub fn from_content(kind: ElementType, text: &str) -> Self {
        Self::digest([kind.as_str(), text])
    }

    /// Content hash salted with the element's position in the document
    pub fn sequenced(index: usize, kind: ElementType, text: &str) -> Self {
        Self::digest([index.to_string().as_str(), kind.as_str(), text])
    }

    /// Identifier derived from an ordered list of other ids
    pub fn combined<'a>(ids: impl IntoIterator<Item = &'a ElementId>) -> Self {
        let mut hasher = Sha256::new();
        for id in ids {
            hasher.update(id.0.as_bytes());
            hasher.update([0u8]);
        }
        Self::finish(hasher)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn digest<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part.as_bytes());
            // Separator keeps ("ab", "c") and ("a", "bc") apart
            hasher.update([0u8]);
        }
        Self::finish(hasher)
    }

    fn finish(hasher: Sha256) -> Self {
        let mut hex = hex::encode(hasher.finalize());
        hex.truncate(ID_HEX_LEN);
        Self(hex)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
