use thiserror::Error;

/// Error for category operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
