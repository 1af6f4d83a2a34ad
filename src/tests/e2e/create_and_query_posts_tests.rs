use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::posts::adapters::outbound::in_memory::InMemoryPostsDatabase;
use crate::modules::posts::adapters::outbound::write_store::PostWriteStore;
use crate::modules::posts::core::events::PostEventKind;
use crate::modules::posts::use_cases::create_post::handler::CreatePostSettings;
use crate::shared::infrastructure::unit_of_work::UnitOfWork;
use crate::shell::http::{CORRELATION_ID_HEADER, router};
use crate::shell::state::{AppState, projecting_event_bus};
use crate::tests::fixtures::clock::SteppingClock;
use crate::tests::fixtures::handlers::FailOnNextEvent;
use crate::tests::fixtures::users::{alice, bob};

async fn seeded_database() -> Arc<InMemoryPostsDatabase> {
    let database = InMemoryPostsDatabase::new();
    database.insert_user(alice()).await.unwrap();
    database.insert_user(bob()).await.unwrap();
    Arc::new(database)
}

fn app(database: Arc<InMemoryPostsDatabase>) -> Router {
    router(AppState::compose(
        database,
        Arc::new(SteppingClock::new()),
        CreatePostSettings::default(),
    ))
}

fn create(user_id: i64, content: &str) -> Request<Body> {
    let body = serde_json::json!({ "userId": user_id, "content": content });
    Request::post("/posts")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn assert_no_post(app: &Router, database: &InMemoryPostsDatabase, post_id: i64) {
    let tx = database.begin().await.unwrap();
    assert_eq!(tx.find_post(post_id).await.unwrap(), None);
    drop(tx);

    let response = app
        .clone()
        .oneshot(get(&format!("/posts/{post_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.clone().oneshot(get("/posts/recent")).await.unwrap();
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

async fn assert_rows_match_posts(database: &InMemoryPostsDatabase, rows: &serde_json::Value) {
    let tx = database.begin().await.unwrap();
    for row in rows.as_array().unwrap() {
        let post_id = row["postId"].as_i64().unwrap();
        let post = tx.find_post(post_id).await.unwrap();
        let post = post.unwrap_or_else(|| panic!("read row {post_id} has no post"));
        assert_eq!(row["userId"], post.user_id);
        assert_eq!(row["content"], post.content.as_str());
    }
}

#[tokio::test]
async fn creates_a_post_and_reads_the_projected_row() {
    let app = app(seeded_database().await);

    let response = app.clone().oneshot(create(1, "hi")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let post = json_body(response).await;
    assert_eq!(post["postId"], 1);
    assert_eq!(post["userId"], 1);
    assert_eq!(post["content"], "hi");

    let response = app.oneshot(get("/posts/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let row = json_body(response).await;
    assert_eq!(row["username"], "alice");
    assert_eq!(row["fullName"], "Alice A.");
    assert_eq!(row["commentCount"], 0);
    assert_eq!(row["likeCount"], 0);
    assert_eq!(row["createdAt"], post["createdAt"]);
    assert_eq!(row["updatedAt"], post["createdAt"]);
}

#[tokio::test]
async fn rejects_an_unknown_author_without_side_effects() {
    let database = seeded_database().await;
    let app = app(database.clone());

    let response = app.clone().oneshot(create(999, "x")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_no_post(&app, &database, 1).await;
}

#[tokio::test]
async fn rejects_empty_content_without_side_effects() {
    let database = seeded_database().await;
    let app = app(database.clone());

    let response = app.clone().oneshot(create(1, "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_no_post(&app, &database, 1).await;
}

#[tokio::test]
async fn lists_recent_posts_newest_first() {
    let database = seeded_database().await;
    let app = app(database.clone());

    for (user_id, content) in [(1, "a"), (2, "b"), (1, "c")] {
        let response = app.clone().oneshot(create(user_id, content)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/posts/recent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let rows = json_body(response).await;
    let contents: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["c", "b", "a"]);
    assert_eq!(rows[1]["username"], "bob");
    assert_rows_match_posts(&database, &rows).await;
}

#[tokio::test]
async fn rolls_back_the_post_when_a_subscriber_fails() {
    let database = seeded_database().await;
    let settings = CreatePostSettings::default();
    let mut bus = projecting_event_bus(settings.storage_timeout);
    bus.subscribe(PostEventKind::PostCreated, Arc::new(FailOnNextEvent::armed()));
    let app = router(AppState::with_bus(
        database.clone(),
        bus,
        Arc::new(SteppingClock::new()),
        settings,
    ));

    let response = app.clone().oneshot(create(1, "z")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key(CORRELATION_ID_HEADER));
    assert_no_post(&app, &database, 1).await;

    let response = app.clone().oneshot(create(1, "z")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["postId"], 1);
}

#[tokio::test]
async fn caps_recent_posts_at_ten_and_drops_the_earliest() {
    let database = seeded_database().await;
    let app = app(database.clone());

    for n in 1..=11 {
        let response = app
            .clone()
            .oneshot(create(1, &format!("post {n}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/posts/recent")).await.unwrap();
    let rows = json_body(response).await;
    let ids: Vec<i64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["postId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (2..=11).rev().collect::<Vec<i64>>());
    assert_rows_match_posts(&database, &rows).await;
}

#[tokio::test]
async fn serves_graphql_on_the_same_state() {
    let app = app(seeded_database().await);

    let response = app.clone().oneshot(create(1, "hi")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let query = serde_json::json!({ "query": "{ post(postId: 1) { content username } }" });
    let response = app
        .oneshot(
            Request::post("/gql")
                .header("content-type", "application/json")
                .body(Body::from(query.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["data"]["post"]["content"], "hi");
    assert_eq!(json["data"]["post"]["username"], "alice");
}
