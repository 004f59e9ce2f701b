use crate::chunker::{Chunk, ChunkingError, chunk_by_title};
use crate::config::PostprocessConfig;
use crate::element::Element;
use crate::hierarchy::assign_hierarchy;
use tracing::debug;

/// Run hierarchy assignment followed by title-based chunking.
///
/// Options are validated before any element is touched.
pub fn postprocess(
    elements: Vec<Element>,
    config: &PostprocessConfig,
) -> Result<Vec<Chunk>, ChunkingError> {
    config.chunking.validate()?;

    let element_count = elements.len();
    let elements = assign_hierarchy(elements, &config.ruleset);
    let chunks = chunk_by_title(elements, &config.chunking)?;

    debug!(
        elements = element_count,
        chunks = chunks.len(),
        "Postprocessed document elements"
    );
    Ok(chunks)
}
