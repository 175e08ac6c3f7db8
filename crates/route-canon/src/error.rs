use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonError {
    #[error("empty molecular string")]
    EmptyInput,
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("unbalanced '{0}' in molecular string")]
    Unbalanced(char),
    #[error("empty fragment in molecular string")]
    EmptyFragment,
    #[error("malformed reaction string: {0}")]
    MalformedReaction(String),
}
