//! Question model.

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `questions` table.
///
/// Serializes to the public question representation
/// `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}
