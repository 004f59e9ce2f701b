mod chunk;
mod combine;
mod error;
mod options;
mod table;
mod title;


pub use chunk::{Chunk, TEXT_JOINER};
pub use error::ChunkingError;
pub use options::ChunkingOptions;
pub use table::split_table;
pub use title::chunk_by_title;

/// Default hard limit on chunk text, in characters
pub const DEFAULT_MAX_CHARACTERS: usize = 500;

/// Chunks shorter than this are combined with a neighbour by default
pub const DEFAULT_COMBINE_TEXT_UNDER_N_CHARS: usize = 500;
