pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree (mounted at the root, not under a prefix).
///
/// Route hierarchy:
///
/// ```text
/// /categories                          list categories with counts (GET)
/// /categories/{category_id}/questions  paginated questions in a category (GET)
///
/// /questions                           paginated list (GET), search or create (POST)
/// /questions/{question_id}             delete (DELETE)
///
/// /quizzes                             next random unseen question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
}
