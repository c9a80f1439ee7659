use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An image could not be decoded or re-encoded.
    #[error("Compression failed: {0}")]
    Compression(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
