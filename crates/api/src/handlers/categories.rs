//! Handlers for category listing and per-category question pages.
//!
//! Categories are read-only; there are no create, update or delete
//! endpoints for them.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use trivia_core::error::CoreError;
use trivia_core::pagination::{paginate, PageParams};
use trivia_core::types::DbId;
use trivia_db::models::category::{category_map, CategoryMap};
use trivia_db::models::question::Question;

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::response::SuccessResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Payload of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesPayload {
    pub categories: CategoryMap,
    pub total_questions: i64,
    pub total_questions_by_category: BTreeMap<DbId, i64>,
}

/// Payload of `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsPayload {
    pub questions: Vec<Question>,
    /// Count of all questions in the store, not only this category.
    pub total_questions: i64,
    pub current_category: String,
    pub categories: CategoryMap,
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// List every category with global and per-category question counts.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.store.list_categories().await?;
    if categories.is_empty() {
        return Err(CoreError::NoResults("no categories exist".to_string()).into());
    }

    let total_questions = state.store.count_questions().await?;
    let total_questions_by_category = state.store.count_questions_by_category().await?;

    Ok(Json(SuccessResponse::new(CategoriesPayload {
        categories: category_map(&categories),
        total_questions,
        total_questions_by_category,
    })))
}

// ---------------------------------------------------------------------------
// GET /categories/{category_id}/questions
// ---------------------------------------------------------------------------

/// One page of the questions filed under a category.
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let category = state
        .store
        .find_category(category_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })?;

    let page = params.page();
    let questions = paginate(state.store.list_questions(Some(category_id)).await?, page);
    if questions.is_empty() {
        return Err(CoreError::NoResults(format!(
            "page {page} of category {category_id} is empty"
        ))
        .into());
    }

    let total_questions = state.store.count_questions().await?;
    let categories = state.store.list_categories().await?;

    Ok(Json(SuccessResponse::new(CategoryQuestionsPayload {
        questions,
        total_questions,
        current_category: category.kind,
        categories: category_map(&categories),
    })))
}
