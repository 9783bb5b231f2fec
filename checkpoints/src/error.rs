/// Type alias for checkpoint operations that may result in an error
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for checkpoint registry construction
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a checkpoint is added at an already occupied height
    /// with a different hash
    #[error("Conflicting hash for checkpoint at height {0}")]
    ConflictingCheckpoint(u64)
}
