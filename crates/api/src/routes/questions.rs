use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes.
///
/// ```text
/// GET    /questions                 -> list_questions
/// POST   /questions                 -> post_question (search or create)
/// DELETE /questions/{question_id}   -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::post_question),
        )
        .route("/questions/{question_id}", delete(questions::delete_question))
}
