use super::chunk::joined_len;
use super::{Chunk, ChunkingOptions};
use tracing::trace;

/// Fold chunks shorter than `combine_text_under_n_chars` into the next one.
///
/// One left-to-right pass: a merged chunk is not reconsidered. A short final
/// chunk that was not itself produced by a merge is folded into its
/// predecessor instead. Merges never exceed `max_characters`, never touch
/// tables or composites, and never cross pages when sections may not.
pub(crate) fn combine_small_chunks(chunks: Vec<Chunk>, options: &ChunkingOptions) -> Vec<Chunk> {
    let threshold = options.combine_text_under_n_chars;
    if threshold == 0 || chunks.len() < 2 {
        return chunks;
    }

    let mut combined: Vec<Chunk> = Vec::with_capacity(chunks.len());
    let mut last_was_merged = false;
    let mut chunks = chunks.into_iter().peekable();

    while let Some(chunk) = chunks.next() {
        let absorbs_next = chunk.char_len() < threshold
            && chunks
                .peek()
                .is_some_and(|next| can_merge(&chunk, next, options));

        match (absorbs_next, chunks.next_if(|_| absorbs_next)) {
            (true, Some(next)) => {
                trace!(
                    small = chunk.char_len(),
                    next = next.char_len(),
                    "Combining small chunk"
                );
                combined.push(chunk.merged(next));
                last_was_merged = true;
            }
            _ => {
                combined.push(chunk);
                last_was_merged = false;
            }
        }
    }

    if !last_was_merged && combined.len() >= 2 {
        let last = &combined[combined.len() - 1];
        let previous = &combined[combined.len() - 2];
        if last.char_len() < threshold && can_merge(previous, last, options) {
            trace!(small = last.char_len(), "Combining trailing chunk");
            if let (Some(last), Some(previous)) = (combined.pop(), combined.pop()) {
                combined.push(previous.merged(last));
            }
        }
    }

    combined
}

fn can_merge(first: &Chunk, second: &Chunk, options: &ChunkingOptions) -> bool {
    if first.is_atomic() || second.is_atomic() {
        return false;
    }

    if !options.multipage_sections && first.metadata.page_number != second.metadata.page_number {
        return false;
    }

    joined_len([first.text.as_str(), second.text.as_str()]) <= options.max_characters
}
