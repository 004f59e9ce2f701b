use crate::element::{Element, ElementId, ElementMetadata, ElementType};
use serde::{Deserialize, Serialize};

/// Separator placed between element texts inside a chunk
pub const TEXT_JOINER: &str = " ";

/// A run of consecutive elements merged into one retrieval unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Element texts joined with [`TEXT_JOINER`]; empty texts are skipped
    pub text: String,
    /// The aggregated elements, in document order
    pub elements: Vec<Element>,
    /// Metadata merged from the elements
    pub metadata: ElementMetadata,
}

impl Chunk {
    /// Build a chunk from a non-empty run of elements
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let text = join_texts(&elements);
        let metadata = ElementMetadata::merged(elements.iter().map(|e| &e.metadata));
        Self {
            text,
            elements,
            metadata,
        }
    }

    /// Length of the merged text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// A lone table or table fragment
    pub fn is_table(&self) -> bool {
        matches!(self.elements.as_slice(), [only] if only.kind == ElementType::Table)
    }

    /// Chunks that are never merged with neighbours
    pub(crate) fn is_atomic(&self) -> bool {
        self.elements
            .iter()
            .any(|e| matches!(e.kind, ElementType::Table | ElementType::CompositeElement))
    }

    /// Concatenate two adjacent chunks
    pub(crate) fn merged(self, next: Chunk) -> Chunk {
        let mut elements = self.elements;
        elements.extend(next.elements);
        Chunk::from_elements(elements)
    }

    /// Collapse the chunk into a single composite element.
    ///
    /// Composite elements are atomic to the chunker, so feeding chunks back
    /// in reproduces them unchanged.
    pub fn into_element(self) -> Element {
        let id = ElementId::combined(self.elements.iter().map(|e| e.id()));
        Element::with_id(id, ElementType::CompositeElement, self.text).with_metadata(self.metadata)
    }
}

/// Character length of `texts` once joined, skipping empty ones
pub(crate) fn joined_len<'a>(texts: impl IntoIterator<Item = &'a str>) -> usize {
    let mut len = 0;
    let mut parts = 0usize;
    for text in texts.into_iter().filter(|t| !t.is_empty()) {
        len += text.chars().count();
        parts += 1;
    }
    len + parts.saturating_sub(1) * TEXT_JOINER.len()
}

fn join_texts(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| e.text.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(TEXT_JOINER)
}
