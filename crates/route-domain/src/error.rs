use route_canon::CanonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("parsing error: {0}")]
    Parsing(#[from] CanonError),
    #[error("unknown input format '{0}'")]
    UnknownFormat(String),
    #[error("unknown identity policy '{0}'")]
    UnknownIdentityPolicy(String),
}
