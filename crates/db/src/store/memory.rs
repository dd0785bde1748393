use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::question::NewQuestion;
use trivia_core::quiz::QuizFilter;
use trivia_core::types::DbId;

use super::{StoreError, StoreResult, TriviaStore};
use crate::models::category::Category;
use crate::models::question::Question;

/// In-process [`TriviaStore`] holding rows in ordered maps.
///
/// Ids are assigned like a sequence: one past the highest id ever stored.
/// Writes can be made to fail with [`MemoryStore::set_fail_writes`] to
/// exercise the error paths of callers.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    fail_writes: AtomicBool,
}

#[derive(Default)]
struct Tables {
    categories: BTreeMap<DbId, Category>,
    questions: BTreeMap<DbId, Question>,
    last_question_id: DbId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with a fixed id.
    pub fn with_category(mut self, id: DbId, kind: &str) -> Self {
        self.tables.get_mut().categories.insert(
            id,
            Category {
                id,
                kind: kind.to_string(),
            },
        );
        self
    }

    /// Add a question with a fixed id.
    pub fn with_question(mut self, question: Question) -> Self {
        let tables = self.tables.get_mut();
        tables.last_question_id = tables.last_question_id.max(question.id);
        tables.questions.insert(question.id, question);
        self
    }

    /// Make every subsequent create and delete fail with
    /// [`StoreError::Unavailable`] without touching stored rows.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes are disabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        let count = self.tables.read().await.questions.len();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn count_questions_by_category(&self) -> StoreResult<BTreeMap<DbId, i64>> {
        let tables = self.tables.read().await;
        let mut counts: BTreeMap<DbId, i64> =
            tables.categories.keys().map(|&id| (id, 0)).collect();
        for question in tables.questions.values() {
            if let Some(count) = counts.get_mut(&question.category) {
                *count += 1;
            }
        }
        Ok(counts)
    }

    async fn list_questions(&self, category: Option<DbId>) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_question(&self, id: DbId) -> StoreResult<Option<Question>> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn quiz_candidates(&self, filter: &QuizFilter) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| filter.matches(q.id, q.category))
            .cloned()
            .collect())
    }

    async fn create_question(&self, input: &NewQuestion) -> StoreResult<Question> {
        self.check_writable()?;

        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let question = Question {
            id: tables.last_question_id,
            question: input.question.clone(),
            answer: input.answer.clone(),
            category: input.category,
            difficulty: input.difficulty,
        };
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: DbId) -> StoreResult<bool> {
        self.check_writable()?;

        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }
}
