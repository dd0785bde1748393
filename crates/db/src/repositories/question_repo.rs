//! Repository for the `questions` table.
//!
//! Listing queries return every matching row ordered by id; pagination is
//! applied by the caller. Writes run in a transaction that is rolled back
//! explicitly when the statement fails.

use sqlx::{PgPool, Postgres, Transaction};
use trivia_core::question::NewQuestion;
use trivia_core::quiz::QuizFilter;
use trivia_core::types::DbId;

use crate::models::category::CategoryQuestionCount;
use crate::models::question::Question;

/// Column list for `questions` queries.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides CRUD and search operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    /// Number of questions per category, including categories with none.
    pub async fn count_by_category(
        pool: &PgPool,
    ) -> Result<Vec<CategoryQuestionCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryQuestionCount>(
            "SELECT c.id AS category_id, COUNT(q.id) AS question_count \
             FROM categories c \
             LEFT JOIN questions q ON q.category = c.id \
             GROUP BY c.id \
             ORDER BY c.id",
        )
        .fetch_all(pool)
        .await
    }

    /// List every question ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List the questions of one category ordered by id.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the question text, ordered by id.
    ///
    /// LIKE wildcards in `term` are matched literally.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(term));
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE question ILIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Questions matching a quiz filter, ordered by id.
    pub async fn list_quiz_candidates(
        pool: &PgPool,
        filter: &QuizFilter,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE id <> ALL($1) \
               AND ($2::BIGINT IS NULL OR category = $2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&filter.exclude)
            .bind(filter.category)
            .fetch_all(pool)
            .await
    }

    /// Insert a new question, returning the stored row.
    pub async fn create(pool: &PgPool, input: &NewQuestion) -> Result<Question, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(&mut *tx)
            .await;

        match inserted {
            Ok(question) => {
                tx.commit().await?;
                Ok(question)
            }
            Err(err) => {
                rollback(tx).await;
                Err(err)
            }
        }
    }

    /// Delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match deleted {
            Ok(result) => {
                tx.commit().await?;
                Ok(result.rows_affected() > 0)
            }
            Err(err) => {
                rollback(tx).await;
                Err(err)
            }
        }
    }
}

/// Roll back a failed write. A rollback failure is logged; the original
/// statement error is what the caller reports.
async fn rollback(tx: Transaction<'_, Postgres>) {
    if let Err(err) = tx.rollback().await {
        tracing::warn!(error = %err, "Transaction rollback failed");
    }
}

/// Escape `%`, `_` and `\` so they match literally in a LIKE pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
