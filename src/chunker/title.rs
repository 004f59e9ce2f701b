use super::chunk::{TEXT_JOINER, joined_len};
use super::combine::combine_small_chunks;
use super::table::split_table;
use super::{Chunk, ChunkingError, ChunkingOptions};
use crate::element::{Element, ElementType};
use tracing::{debug, trace};

/// Why the open chunk was closed before an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Title,
    PageBreak,
    SectionChange,
    SoftLimit,
    HardLimit,
}

/// Accumulator for the chunk currently being filled
#[derive(Default)]
struct OpenChunk {
    elements: Vec<Element>,
    /// Joined text length so far
    len: usize,
    /// Last page number seen in this chunk
    page: Option<u32>,
    /// Last section seen in this chunk
    section: Option<String>,
}

impl OpenChunk {
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Joined length if `element` were appended
    fn len_with(&self, element: &Element) -> usize {
        if element.text.is_empty() {
            self.len
        } else if self.len == 0 {
            element.char_len()
        } else {
            self.len + TEXT_JOINER.len() + element.char_len()
        }
    }

    fn boundary_before(&self, element: &Element, options: &ChunkingOptions) -> Option<Boundary> {
        if self.is_empty() {
            return None;
        }

        if element.kind.is_title() {
            return Some(Boundary::Title);
        }

        if !options.multipage_sections {
            if let (Some(current), Some(next)) = (self.page, element.metadata.page_number) {
                if current != next {
                    return Some(Boundary::PageBreak);
                }
            }
        }

        if let (Some(current), Some(next)) = (&self.section, &element.metadata.section) {
            if current != next {
                return Some(Boundary::SectionChange);
            }
        }

        // Text-less elements never push a chunk over a limit
        if element.text.is_empty() {
            return None;
        }

        if self.len >= options.soft_max() {
            return Some(Boundary::SoftLimit);
        }

        if self.len_with(element) > options.max_characters {
            return Some(Boundary::HardLimit);
        }

        None
    }

    fn push(&mut self, element: Element) {
        self.len = self.len_with(&element);
        if let Some(page) = element.metadata.page_number {
            self.page = Some(page);
        }
        if let Some(section) = &element.metadata.section {
            self.section = Some(section.clone());
        }
        self.elements.push(element);
    }

    fn flush_into(&mut self, chunks: &mut Vec<Chunk>) {
        if self.is_empty() {
            return;
        }
        let open = std::mem::take(self);
        debug_assert_eq!(open.len, joined_len(open.elements.iter().map(|e| e.text.as_str())));
        chunks.push(Chunk::from_elements(open.elements));
    }
}

/// Group elements into chunks that start at titles and respect size limits.
///
/// Rules:
/// - A Title (or a page/section change when sections may not span them)
///   closes the open chunk
/// - Tables always stand alone; oversized tables are split along rows
/// - Other elements are appended until the soft or hard limit is reached
/// - An element longer than `max_characters` becomes an oversized chunk
///   of its own; text is never truncated
/// - Small chunks are then combined with their neighbours
pub fn chunk_by_title(
    elements: Vec<Element>,
    options: &ChunkingOptions,
) -> Result<Vec<Chunk>, ChunkingError> {
    options.validate()?;

    if elements.is_empty() {
        return Ok(vec![]);
    }

    let input_count = elements.len();
    let mut chunks = Vec::new();
    let mut open = OpenChunk::default();

    for element in elements {
        match element.kind {
            ElementType::Table => {
                open.flush_into(&mut chunks);
                if element.char_len() <= options.max_characters {
                    chunks.push(Chunk::from_elements(vec![element]));
                } else {
                    let fragments = split_table(&element, options.max_characters);
                    debug!(
                        table = %element.id(),
                        fragments = fragments.len(),
                        "Split oversized table"
                    );
                    chunks.extend(
                        fragments
                            .into_iter()
                            .map(|fragment| Chunk::from_elements(vec![fragment])),
                    );
                }
            }
            ElementType::CompositeElement => {
                open.flush_into(&mut chunks);
                chunks.push(Chunk::from_elements(vec![element]));
            }
            _ => {
                if let Some(boundary) = open.boundary_before(&element, options) {
                    trace!(?boundary, element = %element.id(), "Closing chunk");
                    open.flush_into(&mut chunks);
                }
                open.push(element);
            }
        }
    }
    open.flush_into(&mut chunks);

    let before_combining = chunks.len();
    let chunks = combine_small_chunks(chunks, options);

    debug!(
        elements = input_count,
        sections = before_combining,
        chunks = chunks.len(),
        "Chunked elements by title"
    );
    Ok(chunks)
}
