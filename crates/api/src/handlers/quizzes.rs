//! Handler for the quiz "next question" endpoint.
//!
//! The server keeps no quiz state: each call names the questions the
//! player has already seen and gets one random unseen question back.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_core::error::CoreError;
use trivia_core::question::parse_int_field;
use trivia_core::quiz::{choose_question, QuizFilter};
use trivia_core::types::DbId;
use trivia_db::models::question::Question;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<DbId>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The category selected by the player. `id` 0 or absent means all.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Value,
}

impl QuizRequest {
    /// Translate the request into a candidate filter.
    pub fn filter(self) -> Result<QuizFilter, CoreError> {
        let category_id = match self.quiz_category {
            Some(category) if !category.id.is_null() => {
                Some(parse_int_field("quiz_category.id", &category.id)?)
            }
            _ => None,
        };
        Ok(QuizFilter::new(
            self.previous_questions.unwrap_or_default(),
            category_id,
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionPayload {
    pub question: Question,
}

// ---------------------------------------------------------------------------
// POST /quizzes
// ---------------------------------------------------------------------------

/// Pick a random question the player has not seen yet.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let filter = input.filter()?;
    let candidates = state.store.quiz_candidates(&filter).await?;

    let question = choose_question(&candidates, &mut rand::rng())
        .cloned()
        .ok_or_else(|| {
            CoreError::NoResults(format!(
                "no quiz question left (category {:?}, {} seen)",
                filter.category,
                filter.exclude.len()
            ))
        })?;

    tracing::debug!(
        question_id = question.id,
        candidates = candidates.len(),
        "Quiz question selected"
    );

    Ok(Json(SuccessResponse::new(QuizQuestionPayload { question })))
}
