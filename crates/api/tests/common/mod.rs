#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use trivia_api::config::ServerConfig;
use trivia_api::router::build_app_router;
use trivia_api::state::AppState;
use trivia_db::models::question::Question;
use trivia_db::store::MemoryStore;

/// Number of seeded questions.
pub const SEED_QUESTION_COUNT: usize = 19;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_max_connections: 1,
    }
}

fn question(id: i64, text: &str, answer: &str, difficulty: i32, category: i64) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// An in-memory store holding the same rows as the seed migration.
pub fn seeded_store() -> MemoryStore {
    let questions = [
        question(2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
        question(4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 5),
        question(5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
        question(6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, 5),
        question(9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
        question(10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
        question(11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
        question(12, "Who invented Peanut Butter?", "George Washington Carver", 2, 4),
        question(13, "What is the largest lake in Africa?", "Lake Victoria", 2, 3),
        question(14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        question(15, "The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
        question(16, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 2),
        question(17, "La Giaconda is better known as what?", "Mona Lisa", 3, 2),
        question(18, "How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
        question(19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
        question(20, "What is the heaviest organ in the human body?", "The Liver", 4, 1),
        question(21, "Who discovered penicillin?", "Alexander Fleming", 3, 1),
        question(22, "Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
        question(23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ];

    let store = MemoryStore::new()
        .with_category(1, "Science")
        .with_category(2, "Art")
        .with_category(3, "Geography")
        .with_category(4, "History")
        .with_category(5, "Entertainment")
        .with_category(6, "Sports");

    questions
        .into_iter()
        .fold(store, |store, q| store.with_question(q))
}

/// Build the full application router over the given store.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Build an app over a freshly seeded store.
pub fn seeded_app() -> Router {
    build_test_app(Arc::new(seeded_store()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of the questions in a `questions` array.
pub fn question_ids(json: &serde_json::Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
