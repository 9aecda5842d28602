use thiserror::Error;

pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors surfaced by the JSON options-document helpers.
///
/// The builder engine itself never errors: configuration it cannot resolve
/// is dropped, per the crate's best-effort contract.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("invalid options document: {0}")]
    InvalidDocument(String),
}
