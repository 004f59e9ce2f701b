use super::{ChunkingError, DEFAULT_COMBINE_TEXT_UNDER_N_CHARS, DEFAULT_MAX_CHARACTERS};
use serde::{Deserialize, Serialize};

/// Parameters for [`chunk_by_title`](super::chunk_by_title)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingOptions {
    /// Hard cap on merged chunk text, in characters
    pub max_characters: usize,
    /// Soft cap; a chunk that reaches it takes no further elements.
    /// Defaults to `max_characters` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_after_n_chars: Option<usize>,
    /// Chunks shorter than this are folded into a neighbour when it fits
    pub combine_text_under_n_chars: usize,
    /// Whether a section may continue across a page boundary
    pub multipage_sections: bool,
}

impl ChunkingOptions {
    /// Create options with default limits
    pub fn new() -> Self {
        Self {
            max_characters: DEFAULT_MAX_CHARACTERS,
            new_after_n_chars: None,
            combine_text_under_n_chars: DEFAULT_COMBINE_TEXT_UNDER_N_CHARS,
            multipage_sections: true,
        }
    }

    /// Set the hard chunk size limit
    pub fn max_characters(mut self, max: usize) -> Self {
        self.max_characters = max;
        self
    }

    /// Set the soft chunk size limit
    pub fn new_after_n_chars(mut self, soft_max: usize) -> Self {
        self.new_after_n_chars = Some(soft_max);
        self
    }

    /// Set the size under which chunks get combined
    pub fn combine_text_under_n_chars(mut self, threshold: usize) -> Self {
        self.combine_text_under_n_chars = threshold;
        self
    }

    /// Allow or forbid sections spanning pages
    pub fn multipage_sections(mut self, multipage: bool) -> Self {
        self.multipage_sections = multipage;
        self
    }

    /// Effective soft limit
    pub fn soft_max(&self) -> usize {
        self.new_after_n_chars.unwrap_or(self.max_characters)
    }

    /// Check parameter constraints before any chunking happens
    pub fn validate(&self) -> Result<(), ChunkingError> {
        if self.max_characters == 0 {
            return Err(ChunkingError::ZeroMaxCharacters);
        }

        match self.new_after_n_chars {
            Some(0) => Err(ChunkingError::ZeroNewAfter),
            Some(new_after) if new_after > self.max_characters => {
                Err(ChunkingError::NewAfterExceedsMax {
                    new_after,
                    max: self.max_characters,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self::new()
    }
}
