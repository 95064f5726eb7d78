use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use talentflow_backend::{
    config::{Config, NetworkProfile},
    routes::api_router,
    seed::Seed,
    store::EntityStore,
    AppState,
};
use tower::ServiceExt;

fn reliable_app() -> Router {
    let config = Config {
        network: NetworkProfile::reliable(),
        ..Config::default()
    };
    let mut store = EntityStore::new();
    store.seed_if_empty(Seed::demo());
    api_router(AppState::in_memory(&config, store))
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let req = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    if bytes.is_empty() {
        return (status, JsonValue::Null);
    }
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn lists_by_job() {
    let app = reliable_app();

    let (_, all) = call(&app, "GET", "/api/assessments", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, for_job) = call(&app, "GET", "/api/assessments?jobId=2", None).await;
    assert_eq!(for_job.as_array().unwrap().len(), 1);
    assert_eq!(for_job[0]["title"], "Backend Development Test");
    assert_eq!(for_job[0]["questions"][0]["type"], "multiple-choice");

    let (_, none) = call(&app, "GET", "/api/assessments?jobId=3", None).await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn submit_appends_response() {
    let app = reliable_app();
    let response = json!({
        "candidateId": 1,
        "responses": [
            { "questionId": 1, "answer": "Library" },
            { "questionId": 2, "answer": "A function with its captured scope" }
        ],
        "submittedAt": "2026-01-15T10:00:00Z"
    });

    let uri = "/api/assessments/1/submit";
    let (status, body) = call(&app, "POST", uri, Some(response.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, again) = call(&app, "POST", "/api/assessments/1/submit", Some(response)).await;
    assert_eq!(again, json!({ "success": true }));

    let (_, assessment) = call(&app, "GET", "/api/assessments/1", None).await;
    let responses = assessment["candidateResponses"].as_array().unwrap();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["candidateId"], 1);
    assert_eq!(responses[0]["responses"][0]["answer"], "Library");
}

#[tokio::test]
async fn submit_to_missing_assessment_is_not_found() {
    let app = reliable_app();
    let (status, body) = call(
        &app,
        "POST",
        "/api/assessments/42/submit",
        Some(json!({ "candidateId": 1, "responses": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_cannot_touch_responses() {
    let app = reliable_app();
    call(
        &app,
        "POST",
        "/api/assessments/2/submit",
        Some(json!({ "candidateId": 2, "responses": [] })),
    )
    .await;

    let (status, body) = call(
        &app,
        "PUT",
        "/api/assessments/2",
        Some(json!({ "title": "Backend Test v2", "timeLimit": 45, "candidateResponses": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Backend Test v2");
    assert_eq!(body["timeLimit"], 45);
    assert_eq!(body["candidateResponses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_assessment() {
    let app = reliable_app();

    let (status, _) = call(&app, "DELETE", "/api/assessments/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, "GET", "/api/assessments/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "DELETE", "/api/assessments/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The counter does not reuse the removed id.
    let (_, created) = call(
        &app,
        "POST",
        "/api/assessments",
        Some(json!({
            "jobId": 3,
            "title": "Design Review",
            "timeLimit": 30,
            "questions": [{ "id": 1, "question": "Walk us through a case study", "type": "text" }]
        })),
    )
    .await;
    assert_eq!(created["id"], 3);
    assert_eq!(created["candidateResponses"], json!([]));
}

#[tokio::test]
async fn health_and_openapi() {
    let app = reliable_app();

    let (status, health) = call(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["jobs"], 3);

    let (status, doc) = call(&app, "GET", "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/assessments/{id}/submit"].is_object());
    assert!(doc["components"]["schemas"]["Job"].is_object());
}
