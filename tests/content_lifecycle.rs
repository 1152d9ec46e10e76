//! End-to-end content lifecycle against a real PostgreSQL
//!
//! Requires Docker; run with `cargo test -- --ignored`.

use std::sync::{Arc, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use tower::ServiceExt;

use bilingual_cms::{
    db::{self, PgExecutor},
    handlers,
    models::{Submission, ARTICLES, EVENTS, QUESTIONS},
    services::ContentManager,
    state::AppState,
    utils::SystemClock,
    AppError,
};

static POSTGRES: OnceLock<ContainerAsync<Postgres>> = OnceLock::new();

/// Get or start a PostgreSQL container (lazy initialization)
async fn postgres_url() -> String {
    if POSTGRES.get().is_none() {
        let container = Postgres::default()
            .with_user("cms")
            .with_password("cms_test")
            .with_db_name("cms_test")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let _ = POSTGRES.set(container);
    }

    let container = POSTGRES.get().unwrap();
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    format!("postgres://cms:cms_test@{}:{}/cms_test", host, port)
}

async fn test_pool() -> PgPool {
    let url = postgres_url().await;
    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

fn manager(pool: &PgPool, schema: &'static bilingual_cms::models::EntitySchema) -> ContentManager {
    ContentManager::new(
        schema,
        Arc::new(PgExecutor::new(pool.clone())),
        Arc::new(SystemClock),
    )
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn article_create_read_delete() {
    let pool = test_pool().await;
    let articles = manager(&pool, &ARTICLES);

    let id = articles
        .create(
            Submission::new()
                .with_field("title", "Zakat")
                .with_field("englishDescription", "<p>Pay <b>2.5%</b></p>")
                .with_field("topic", "Fiqh")
                .with_field("writers", "Ali")
                .with_field("language", "English")
                .with_field("date", "2025-01-01")
                .with_field("isPublished", "true"),
        )
        .await
        .unwrap();

    let row = articles.get(id).await.unwrap();
    assert_eq!(row.get("views"), Some(&json!(0)));
    assert_eq!(row.get("isDeleted"), Some(&json!(0)));
    assert_eq!(row.get("isPublished"), Some(&json!(1)));
    assert_eq!(row.get("date"), Some(&json!("2025-01-01")));
    assert_eq!(row.get("createdOn"), row.get("modifiedOn"));
    assert_eq!(row.text("englishDescription"), Some("<p>Pay <b>2.5%</b></p>"));

    let listed = articles.list().await.unwrap();
    let entry = listed
        .iter()
        .find(|r| r.get("id") == Some(&json!(id)))
        .expect("article listed");
    assert_eq!(entry.text("englishDescription"), Some("Pay 2.5%"));

    articles.delete(id).await.unwrap();
    assert!(matches!(articles.get(id).await, Err(AppError::NotFound(_))));
    assert!(articles
        .list()
        .await
        .unwrap()
        .iter()
        .all(|r| r.get("id") != Some(&json!(id))));

    // repeated delete of an article is still reported as success
    articles.delete(id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn event_patch_and_scoped_delete() {
    let pool = test_pool().await;
    let events = manager(&pool, &EVENTS);

    let id = events
        .create(
            Submission::new()
                .with_field("title", "Seerat Conference")
                .with_field("content", "<p>Annual gathering</p>")
                .with_field("topic", "Seerat")
                .with_field("language", "Urdu")
                .with_field("writers", "Ali")
                .with_field("eventDate", "2025-09-14")
                .with_image(vec![0xFF, 0xD8, 0xFF]),
        )
        .await
        .unwrap();

    let outcome = events
        .patch(id, Submission::new().with_field("content", "<h1>Moved</h1> online"))
        .await
        .unwrap();

    let row = events.get(id).await.unwrap();
    assert_eq!(row.text("content"), Some("Moved online"));
    assert_eq!(row.text("title"), Some("Seerat Conference"));
    assert!(row.text("modifiedOn") >= row.text("createdOn"));
    assert_eq!(
        outcome.echo.get("modifiedOn"),
        row.get("modifiedOn"),
    );
    assert_eq!(events.image(id).await.unwrap(), vec![0xFF, 0xD8, 0xFF]);

    events.delete(id).await.unwrap();
    assert!(matches!(events.delete(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        events.patch(id, Submission::new().with_field("title", "Again")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(events.image(id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn question_slug_follows_question_text() {
    let pool = test_pool().await;
    let questions = manager(&pool, &QUESTIONS);

    let id = questions
        .create(
            Submission::new()
                .with_field("questionEnglish", "What is Zakat?")
                .with_field("answerEnglish", "<p>A due on wealth</p>")
                .with_field("writer", "Ali")
                .with_field("date", "2025-02-02")
                .with_field("language", "English")
                .with_field("topic", "Fiqh")
                .with_image(vec![1, 2, 3]),
        )
        .await
        .unwrap();

    let row = questions.get(id).await.unwrap();
    assert_eq!(row.text("slug"), Some("what-is-zakat"));
    assert_eq!(row.get("isPublished"), Some(&json!(0)));
    assert_eq!(row.text("answerEnglish"), Some("A due on wealth"));

    questions
        .patch(id, Submission::new().with_field("questionEnglish", "Who pays Zakat?"))
        .await
        .unwrap();
    let row = questions.get(id).await.unwrap();
    assert_eq!(row.text("slug"), Some("who-pays-zakat"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn writer_over_http() {
    let pool = test_pool().await;
    let app = handlers::routes().with_state(AppState::new(pool));

    let create = Request::builder()
        .method("POST")
        .uri("/writers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "name": "Ayesha",
                "designation": "Editor",
                "englishDescription": "<p>Edits the Urdu desk</p>",
                "urduDescription": "مدیر",
                "isTeamMember": "1",
                "image": "/9j/"
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/writers").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let list: Vec<Value> = serde_json::from_slice(&bytes).unwrap();
    let writer = list
        .iter()
        .find(|w| w["name"] == "Ayesha")
        .expect("writer listed");
    assert_eq!(writer["isTeamMember"], 1);
    assert_eq!(writer["englishDescription"], "Edits the Urdu desk");
    assert!(writer.get("image").is_none());

    let id = writer["id"].as_i64().unwrap();
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/writers/{}/image", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], &[0xFF, 0xD8, 0xFF]);
}
