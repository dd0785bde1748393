//! Data-access handle passed to every request handler.
//!
//! [`TriviaStore`] is the seam between HTTP handling and persistence.
//! [`PgStore`] delegates to the repositories; [`MemoryStore`] keeps rows in
//! process so the HTTP layer can be exercised without a database.

mod memory;
mod postgres;

use std::collections::BTreeMap;

use async_trait::async_trait;
use trivia_core::question::NewQuestion;
use trivia_core::quiz::QuizFilter;
use trivia_core::types::DbId;

use crate::models::category::Category;
use crate::models::question::Question;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a [`TriviaStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backend refused the operation (used by [`MemoryStore`] to
    /// simulate an unavailable database).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Every query and mutation the trivia service performs.
///
/// Listing methods return rows ordered by id ascending.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Verify the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// All categories.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>>;

    /// Total number of questions.
    async fn count_questions(&self) -> StoreResult<i64>;

    /// Question count per existing category (zero for empty categories).
    async fn count_questions_by_category(&self) -> StoreResult<BTreeMap<DbId, i64>>;

    /// All questions, or only those of `category` when given.
    async fn list_questions(&self, category: Option<DbId>) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring search on the question text.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn find_question(&self, id: DbId) -> StoreResult<Option<Question>>;

    /// Questions matching the quiz filter.
    async fn quiz_candidates(&self, filter: &QuizFilter) -> StoreResult<Vec<Question>>;

    /// Persist a new question. A failed insert leaves no row behind.
    async fn create_question(&self, input: &NewQuestion) -> StoreResult<Question>;

    /// Delete a question. Returns `false` if no such row existed.
    async fn delete_question(&self, id: DbId) -> StoreResult<bool>;
}
