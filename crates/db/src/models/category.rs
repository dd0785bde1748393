//! Category model.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category id to label mapping, serialized as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Collapse a category list into an id → label mapping.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Number of questions filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CategoryQuestionCount {
    pub category_id: DbId,
    pub question_count: i64,
}
