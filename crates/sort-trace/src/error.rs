use thiserror::Error;

/// Reported conditions of the sorting facade. Both are caller mistakes;
/// retrying with the same input yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Array size must be between 5 and 50")]
    InvalidSize(usize),
}
