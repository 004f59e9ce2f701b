mod id;
mod kind;
mod metadata;


pub use id::ElementId;
pub use kind::{ElementType, UnknownElementType};
pub use metadata::{Coordinates, ElementMetadata};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// A unit of extracted document content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "element_id")]
    id: ElementId,
    /// Type tag driving hierarchy and chunking treatment
    #[serde(rename = "type")]
    pub kind: ElementType,
    /// Text content (empty for checkboxes, images, page breaks)
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub metadata: ElementMetadata,
}

impl Element {
    /// Create an element whose id is the hash of its type and text
    pub fn new(kind: ElementType, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: ElementId::from_content(kind, &text),
            kind,
            text,
            metadata: ElementMetadata::default(),
        }
    }

    /// Create an element with an id assigned elsewhere
    pub fn with_id(id: impl Into<ElementId>, kind: ElementType, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            text: text.into(),
            metadata: ElementMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: ElementMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.metadata.category_depth = Some(depth);
        self
    }

    pub fn with_page(mut self, page_number: u32) -> Self {
        self.metadata.page_number = Some(page_number);
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn parent_id(&self) -> Option<&ElementId> {
        self.metadata.parent_id.as_ref()
    }

    pub fn category_depth(&self) -> Option<u32> {
        self.metadata.category_depth
    }

    /// Text length in characters, the unit every budget is expressed in
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Give every element a position-salted id so repeated text stays unique
pub fn assign_sequence_ids(elements: &mut [Element]) {
    for (index, element) in elements.iter_mut().enumerate() {
        element.id = ElementId::sequenced(index, element.kind, &element.text);
    }
}

/// Re-id every repeat of an id already seen earlier in the document.
///
/// The first occurrence keeps its id; later ones get a position-salted id.
/// Returns the number of elements re-identified.
pub fn ensure_unique_ids(elements: &mut [Element]) -> usize {
    let mut seen: HashSet<ElementId> = HashSet::with_capacity(elements.len());
    let mut renamed = 0;

    for (index, element) in elements.iter_mut().enumerate() {
        if seen.contains(&element.id) {
            let id = ElementId::sequenced(index, element.kind, &element.text);
            warn!(index, duplicate = %element.id, %id, "Duplicate element id replaced");
            element.id = id;
            renamed += 1;
        }
        seen.insert(element.id.clone());
    }

    renamed
}
