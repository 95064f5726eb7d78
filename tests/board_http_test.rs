use std::sync::Arc;

use talentflow_backend::{
    board::{AssessmentsBoard, CandidatesBoard, DialogState, FetchOutcome, JobsBoard},
    client::{HttpApi, RemoteApi},
    config::{Config, NetworkProfile},
    dto::{
        assessment_dto::SubmitAssessmentPayload, candidate_dto::CreateCandidatePayload,
        job_dto::{CreateJobPayload, JobListQuery},
    },
    error::Error,
    routes::api_router,
    runtime::AssessmentRuntime,
    seed::Seed,
    store::EntityStore,
    AppState,
};
use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

async fn serve(seed: Seed, network: NetworkProfile) -> (HttpApi, AppState) {
    let config = Config {
        network,
        ..Config::default()
    };
    let mut store = EntityStore::new();
    store.seed_if_empty(seed);
    let state = AppState::in_memory(&config, store);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api_router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (HttpApi::new(format!("http://{}", addr)).unwrap(), state)
}

#[tokio::test]
async fn jobs_board_round_trip_over_http() {
    let (api, _) = serve(Seed::demo(), NetworkProfile::reliable()).await;
    let mut board = JobsBoard::default();

    let outcome = board
        .apply_query(
            &api,
            JobListQuery {
                department: Some("Engineering".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(board.total(), 2);

    board.open_create();
    let created = board
        .submit(
            &api,
            CreateJobPayload {
                title: "Site Reliability Engineer".to_string(),
                department: "Engineering".to_string(),
                description: "Keep it running".to_string(),
                location: "Remote".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, 4);
    assert_eq!(board.dialog(), DialogState::Closed);
    assert_eq!(board.total(), 3);

    board.archive(&api, created.id).await.unwrap();
    assert_eq!(board.total(), 2);
}

#[tokio::test]
async fn not_found_and_server_errors_map_back() {
    let (api, _) = serve(Seed::demo(), NetworkProfile::reliable()).await;
    let err = api.delete_assessment(99).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let failing = NetworkProfile {
        latency_min_ms: 0,
        latency_max_ms: 0,
        failure_rate: 1.0,
        seed: None,
    };
    let (api, state) = serve(Seed::demo(), failing).await;
    let mut board = CandidatesBoard::paged(10);
    board.refresh(&api).await;
    assert_eq!(board.total(), 3);

    board.open_create();
    let err = board
        .submit(
            &api,
            CreateCandidatePayload {
                name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
                phone: "555-0101".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_transient());
    assert_eq!(board.dialog(), DialogState::Creating);
    assert_eq!(state.store.read().await.candidates.len(), 3);
}

#[tokio::test]
async fn taking_an_assessment_posts_answers() {
    let (api, state) = serve(Seed::demo(), NetworkProfile::reliable()).await;
    let mut board = AssessmentsBoard::default();
    board.refresh(&api).await;
    let assessment = board.items()[0].clone();

    let runtime = Arc::new(tokio::sync::Mutex::new(AssessmentRuntime::start(&assessment)));
    {
        let mut runtime = runtime.lock().await;
        runtime.answer(1, "Library");
        runtime.next();
        runtime.answer(2, "A closure captures its environment");
    }

    let (response, submission) = {
        let mut runtime = runtime.lock().await;
        (runtime.to_response(1), runtime.submit().unwrap())
    };
    assert_eq!(submission.answered, 2);
    assert_eq!(submission.total, 2);

    api.submit_assessment(assessment.id, SubmitAssessmentPayload::from(response))
        .await
        .unwrap();

    let store = state.store.read().await;
    let stored = store.assessments.get(assessment.id).unwrap();
    assert_eq!(stored.candidate_responses.len(), 1);
    assert_eq!(stored.candidate_responses[0].responses.len(), 2);
}

#[tokio::test]
async fn real_server_faults_are_not_transient() {
    let faulty = Router::new().route(
        "/api/jobs",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "pool timed out while waiting for an open connection" })),
            )
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, faulty).await.unwrap();
    });
    let api = HttpApi::new(format!("http://{}", addr)).unwrap();

    let err = api.create_job(CreateJobPayload::default()).await.unwrap_err();
    assert!(!err.is_transient());
    match err {
        Error::Remote { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("pool timed out"));
        }
        other => panic!("expected a remote error, got {:?}", other),
    }
}
