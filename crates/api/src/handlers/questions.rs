//! Handlers for question listing, search, creation and deletion.
//!
//! `POST /questions` serves two purposes: a body with a non-empty
//! `searchTerm` runs a search, anything else creates a question.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_core::error::CoreError;
use trivia_core::pagination::{paginate, PageParams};
use trivia_core::question::NewQuestion;
use trivia_core::types::DbId;
use trivia_db::models::category::{category_map, CategoryMap};
use trivia_db::models::question::Question;

use crate::error::{write_failed, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::response::SuccessResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /questions`.
///
/// Create fields are kept as raw JSON and validated by
/// [`NewQuestion::from_raw`], so a wrongly typed field is a 422 rather than
/// a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct QuestionPostRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Payload of `GET /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionPagePayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// Payload of a search through `POST /questions`.
#[derive(Debug, Serialize)]
pub struct SearchPayload {
    pub questions: Vec<Question>,
    /// Number of questions in this response, not the full match count.
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedPayload {
    pub created: DbId,
}

#[derive(Debug, Serialize)]
pub struct DeletedPayload {
    pub deleted: DbId,
}

// ---------------------------------------------------------------------------
// GET /questions
// ---------------------------------------------------------------------------

/// One page of all questions, ordered by id.
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let all_questions = state.store.list_questions(None).await?;
    let total_questions = all_questions.len();

    let page = params.page();
    let questions = paginate(all_questions, page);
    if questions.is_empty() {
        return Err(CoreError::NoResults(format!("question page {page} is empty")).into());
    }

    let categories = state.store.list_categories().await?;

    Ok(Json(SuccessResponse::new(QuestionPagePayload {
        questions,
        total_questions,
        categories: category_map(&categories),
    })))
}

// ---------------------------------------------------------------------------
// DELETE /questions/{question_id}
// ---------------------------------------------------------------------------

/// Delete one question permanently.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let not_found = || CoreError::NotFound {
        entity: "Question",
        id: question_id,
    };

    state
        .store
        .find_question(question_id)
        .await
        .map_err(write_failed("look up question for delete"))?
        .ok_or_else(not_found)?;

    let deleted = state
        .store
        .delete_question(question_id)
        .await
        .map_err(write_failed("delete question"))?;
    if !deleted {
        return Err(not_found().into());
    }

    tracing::info!(question_id, "Question deleted");

    Ok(Json(SuccessResponse::new(DeletedPayload {
        deleted: question_id,
    })))
}

// ---------------------------------------------------------------------------
// POST /questions
// ---------------------------------------------------------------------------

/// Search or create, depending on whether `searchTerm` is set.
pub async fn post_question(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(input): AppJson<QuestionPostRequest>,
) -> AppResult<axum::response::Response> {
    match input.search_term.as_deref() {
        Some(term) if !term.is_empty() => {
            search_questions(&state, term, params.page())
                .await
                .map(IntoResponse::into_response)
        }
        _ => create_question(&state, &input)
            .await
            .map(IntoResponse::into_response),
    }
}

/// Case-insensitive substring search over question text.
async fn search_questions(
    state: &AppState,
    term: &str,
    page: i64,
) -> AppResult<Json<SuccessResponse<SearchPayload>>> {
    let matches = state.store.search_questions(term).await?;
    if matches.is_empty() {
        return Err(CoreError::NoResults(format!("no question matches '{term}'")).into());
    }

    let questions = paginate(matches, page);
    if questions.is_empty() {
        return Err(CoreError::NoResults(format!("search page {page} is empty")).into());
    }

    tracing::debug!(term, page, returned = questions.len(), "Question search");

    Ok(Json(SuccessResponse::new(SearchPayload {
        total_questions: questions.len(),
        questions,
    })))
}

/// Validate and persist a new question.
async fn create_question(
    state: &AppState,
    input: &QuestionPostRequest,
) -> AppResult<Json<SuccessResponse<CreatedPayload>>> {
    let new_question = NewQuestion::from_raw(
        input.question.as_ref(),
        input.answer.as_ref(),
        input.category.as_ref(),
        input.difficulty.as_ref(),
    )?;

    let category_exists = state
        .store
        .find_category(new_question.category)
        .await
        .map_err(write_failed("look up category for create"))?
        .is_some();
    if !category_exists {
        return Err(CoreError::Validation(format!(
            "category {} does not exist",
            new_question.category
        ))
        .into());
    }

    let created = state
        .store
        .create_question(&new_question)
        .await
        .map_err(write_failed("create question"))?;

    tracing::info!(
        question_id = created.id,
        category = created.category,
        "Question created"
    );

    Ok(Json(SuccessResponse::new(CreatedPayload {
        created: created.id,
    })))
}
