use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkingError {
    #[error("max_characters must be greater than zero")]
    ZeroMaxCharacters,

    #[error("new_after_n_chars must be greater than zero")]
    ZeroNewAfter,

    #[error("new_after_n_chars ({new_after}) must not exceed max_characters ({max})")]
    NewAfterExceedsMax { new_after: usize, max: usize },
}
