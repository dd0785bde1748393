use std::collections::BTreeMap;

use async_trait::async_trait;
use trivia_core::question::NewQuestion;
use trivia_core::quiz::QuizFilter;
use trivia_core::types::DbId;

use super::{StoreResult, TriviaStore};
use crate::models::category::Category;
use crate::models::question::Question;
use crate::repositories::{CategoryRepo, QuestionRepo};
use crate::DbPool;

/// [`TriviaStore`] backed by a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for shutdown and maintenance tasks.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(CategoryRepo::list_all(&self.pool).await?)
    }

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(CategoryRepo::find_by_id(&self.pool, id).await?)
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        Ok(QuestionRepo::count(&self.pool).await?)
    }

    async fn count_questions_by_category(&self) -> StoreResult<BTreeMap<DbId, i64>> {
        let counts = QuestionRepo::count_by_category(&self.pool).await?;
        Ok(counts
            .into_iter()
            .map(|c| (c.category_id, c.question_count))
            .collect())
    }

    async fn list_questions(&self, category: Option<DbId>) -> StoreResult<Vec<Question>> {
        let questions = match category {
            Some(category_id) => QuestionRepo::list_by_category(&self.pool, category_id).await?,
            None => QuestionRepo::list_all(&self.pool).await?,
        };
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        Ok(QuestionRepo::search(&self.pool, term).await?)
    }

    async fn find_question(&self, id: DbId) -> StoreResult<Option<Question>> {
        Ok(QuestionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn quiz_candidates(&self, filter: &QuizFilter) -> StoreResult<Vec<Question>> {
        Ok(QuestionRepo::list_quiz_candidates(&self.pool, filter).await?)
    }

    async fn create_question(&self, input: &NewQuestion) -> StoreResult<Question> {
        Ok(QuestionRepo::create(&self.pool, input).await?)
    }

    async fn delete_question(&self, id: DbId) -> StoreResult<bool> {
        Ok(QuestionRepo::delete(&self.pool, id).await?)
    }
}
