use thiserror::Error;

/// Errors that can occur while turning authored content into flow boxes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Invalid import data: {0}")]
    Validation(String),

    #[error("No valid data rows found")]
    NoValidRows,

    #[error("No parser registered for format '{0}'")]
    UnknownFormat(String),

    #[error("Storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl ImportError {
    /// Errors raised before any content is processed. These propagate to the caller
    /// instead of being folded into a failed `ImportOutcome`.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ImportError::Validation(_) | ImportError::UnknownFormat(_))
    }
}

/// Errors raised by a `GuideStore` implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("{0}")]
    Generic(String),

    #[error("Flow box '{0}' does not exist in the store")]
    FlowBoxNotFound(u64),

    #[error("Position would exceed the maximum of {}", u32::MAX)]
    PositionOverflow,
}
