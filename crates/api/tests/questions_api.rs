//! HTTP-level tests for listing, searching, creating and deleting questions.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, build_test_app, delete, get, post_json, question_ids, seeded_app, seeded_store,
    send, SEED_QUESTION_COUNT,
};
use serde_json::json;
use trivia_db::store::{MemoryStore, TriviaStore};

fn new_question_body() -> serde_json::Value {
    json!({
        "question": "What is the capital of the USA?",
        "answer": "Washington DC",
        "category": 3,
        "difficulty": 2
    })
}

async fn question_count(store: &MemoryStore) -> usize {
    usize::try_from(store.count_questions().await.unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// GET /questions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_first_page_has_ten_questions() {
    let response = get(seeded_app(), "/questions?page=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(question_ids(&json), vec![2, 4, 5, 6, 9, 10, 11, 12, 13, 14]);
    assert_eq!(json["total_questions"], 19);
    assert_eq!(json["categories"].as_object().unwrap().len(), 6);
    assert_eq!(json["categories"]["1"], "Science");
}

#[tokio::test]
async fn test_total_is_independent_of_page() {
    let json = body_json(get(seeded_app(), "/questions?page=2").await).await;
    assert_eq!(question_ids(&json), vec![15, 16, 17, 18, 19, 20, 21, 22, 23]);
    assert_eq!(json["total_questions"], 19);
}

#[tokio::test]
async fn test_page_defaults_to_one() {
    let json = body_json(get(seeded_app(), "/questions").await).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["questions"][0]["id"], 2);
}

#[tokio::test]
async fn test_malformed_page_falls_back_to_first_page() {
    let json = body_json(get(seeded_app(), "/questions?page=two").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"][0]["id"], 2);
}

#[tokio::test]
async fn test_unreadable_query_string_returns_400_json() {
    for uri in ["/questions?page=1&page=2", "/categories/1/questions?page=1&page=2"] {
        let response = get(seeded_app(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response.headers()["content-type"], "application/json", "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 400);
        assert_eq!(json["message"], "bad request");
    }
}

#[tokio::test]
async fn test_search_with_unreadable_query_string_returns_400_json() {
    let response = post_json(
        seeded_app(),
        "/questions?page=1&page=2",
        json!({"searchTerm": "title"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "bad request");
}

#[tokio::test]
async fn test_page_beyond_range_returns_404() {
    let response = get(seeded_app(), "/questions?page=1000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "resource not found");
}

#[tokio::test]
async fn test_page_zero_returns_404() {
    let response = get(seeded_app(), "/questions?page=0").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_negative_page_returns_404() {
    let response = get(seeded_app(), "/questions?page=-1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_store_returns_404() {
    let app = build_test_app(Arc::new(MemoryStore::new()));
    let response = get(app, "/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_questions_without_categories_return_empty_mapping() {
    let store = MemoryStore::new().with_question(trivia_db::models::question::Question {
        id: 1,
        question: "Orphan?".to_string(),
        answer: "Yes".to_string(),
        category: 1,
        difficulty: 1,
    });
    let json = body_json(get(build_test_app(Arc::new(store)), "/questions").await).await;
    assert_eq!(json["categories"], json!({}));
    assert_eq!(json["total_questions"], 1);
}

// ---------------------------------------------------------------------------
// POST /questions (search)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_search_returns_matching_questions() {
    let response = post_json(seeded_app(), "/questions", json!({"searchTerm": "title"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(question_ids(&json), vec![5, 6]);
    assert_eq!(json["total_questions"], 2);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let json = body_json(post_json(seeded_app(), "/questions", json!({"searchTerm": "TiTlE"})).await).await;
    assert_eq!(question_ids(&json), vec![5, 6]);
}

#[tokio::test]
async fn test_search_total_counts_returned_page_only() {
    // "the" matches more than one page of questions.
    let json = body_json(post_json(seeded_app(), "/questions", json!({"searchTerm": "the"})).await).await;
    let returned = json["questions"].as_array().unwrap().len();
    assert_eq!(returned, 10);
    assert_eq!(json["total_questions"], 10);

    let app = seeded_app();
    let response = post_json(app, "/questions?page=2", json!({"searchTerm": "the"})).await;
    let json = body_json(response).await;
    let second_page = json["questions"].as_array().unwrap().len();
    assert!(second_page > 0);
    assert_eq!(json["total_questions"], second_page);
}

#[tokio::test]
async fn test_search_without_matches_returns_404() {
    let response = post_json(seeded_app(), "/questions", json!({"searchTerm": "zzzzzz"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "resource not found");
}

#[tokio::test]
async fn test_search_page_beyond_matches_returns_404() {
    let response = post_json(seeded_app(), "/questions?page=2", json!({"searchTerm": "title"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// POST /questions (create)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_question_returns_new_id() {
    let store = Arc::new(seeded_store());
    let response = post_json(build_test_app(store.clone()), "/questions", new_question_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["created"], 24);
    assert_eq!(question_count(&store).await, SEED_QUESTION_COUNT + 1);
}

#[tokio::test]
async fn test_created_question_is_found_by_search() {
    let store = Arc::new(seeded_store());
    let body = json!({
        "question": "Which planet is known as the Red Planet?",
        "answer": "Mars",
        "category": 1
    });
    let created = body_json(post_json(build_test_app(store.clone()), "/questions", body).await).await;
    let id = created["created"].as_i64().unwrap();

    let response = post_json(
        build_test_app(store),
        "/questions",
        json!({"searchTerm": "red planet"}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(
        json["questions"],
        json!([{
            "id": id,
            "question": "Which planet is known as the Red Planet?",
            "answer": "Mars",
            "category": 1,
            "difficulty": 1
        }])
    );
}

#[tokio::test]
async fn test_create_accepts_numeric_strings() {
    let body = json!({
        "question": "Q?",
        "answer": "A",
        "category": "2",
        "difficulty": "5"
    });
    let response = post_json(seeded_app(), "/questions", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_search_term_creates() {
    let mut body = new_question_body();
    body["searchTerm"] = json!("");
    let json = body_json(post_json(seeded_app(), "/questions", body).await).await;
    assert_eq!(json["created"], 24);
}

#[tokio::test]
async fn test_create_with_named_category_returns_422() {
    let store = Arc::new(seeded_store());
    let body = json!({
        "question": "What is the capital of the USA?",
        "answer": "Washington DC",
        "category": "Art",
        "difficulty": 1
    });
    let response = post_json(build_test_app(store.clone()), "/questions", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
    assert_eq!(question_count(&store).await, SEED_QUESTION_COUNT);
}

#[tokio::test]
async fn test_create_with_unknown_category_returns_422() {
    let mut body = new_question_body();
    body["category"] = json!(99);
    let response = post_json(seeded_app(), "/questions", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_with_out_of_range_difficulty_returns_422() {
    let mut body = new_question_body();
    body["difficulty"] = json!(9);
    let response = post_json(seeded_app(), "/questions", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_with_empty_body_returns_422() {
    let response = post_json(seeded_app(), "/questions", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_store_failure_returns_422_and_persists_nothing() {
    let store = Arc::new(seeded_store());
    store.set_fail_writes(true);

    let response = post_json(build_test_app(store.clone()), "/questions", new_question_body()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], "unprocessable");
    assert_eq!(question_count(&store).await, SEED_QUESTION_COUNT);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(seeded_app(), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 400);
    assert_eq!(json["message"], "bad request");
}

// ---------------------------------------------------------------------------
// DELETE /questions/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_question_removes_it() {
    let store = Arc::new(seeded_store());
    let response = delete(build_test_app(store.clone()), "/questions/20").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], 20);
    assert!(store.find_question(20).await.unwrap().is_none());
    assert_eq!(question_count(&store).await, SEED_QUESTION_COUNT - 1);

    // A second delete of the same id is a 404.
    let response = delete(build_test_app(store.clone()), "/questions/20").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The category page no longer lists it.
    let json = body_json(get(build_test_app(store), "/categories/1/questions").await).await;
    assert_eq!(question_ids(&json), vec![21, 22]);
}

#[tokio::test]
async fn test_delete_missing_question_returns_404() {
    let response = delete(seeded_app(), "/questions/1000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "resource not found");
}

#[tokio::test]
async fn test_delete_store_failure_returns_422() {
    let store = Arc::new(seeded_store());
    store.set_fail_writes(true);

    let response = delete(build_test_app(store.clone()), "/questions/20").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.find_question(20).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_non_numeric_id_returns_404() {
    let response = delete(seeded_app(), "/questions/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
