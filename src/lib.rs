// Public API exports
pub mod chunker;
pub mod config;
pub mod element;
pub mod hierarchy;
pub mod pipeline;

// Re-export main types for convenience
pub use element::{
    Coordinates, Element, ElementId, ElementMetadata, ElementType, UnknownElementType,
    assign_sequence_ids, ensure_unique_ids,
};

pub use hierarchy::{
    MAX_CATEGORY_DEPTH, Outline, Ruleset, assign_hierarchy, assign_hierarchy_in_place,
};

pub use chunker::{
    Chunk, ChunkingError, ChunkingOptions, DEFAULT_COMBINE_TEXT_UNDER_N_CHARS,
    DEFAULT_MAX_CHARACTERS, TEXT_JOINER, chunk_by_title, split_table,
};

pub use config::PostprocessConfig;
pub use pipeline::postprocess;
