use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A listing, search or filter produced an empty result window.
    #[error("No results: {0}")]
    NoResults(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
