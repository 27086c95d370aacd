use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

use feed_server::entity::post;

use crate::common::{FilePart, TestApp, routes};

async fn insert_post(app: &TestApp, caption: &str, created_at: DateTime<Utc>) {
    post::ActiveModel {
        id: Set(Uuid::now_v7()),
        caption: Set(caption.to_string()),
        url: Set(format!("https://ik.example.test/demo/{caption}.png")),
        file_type: Set("image".to_string()),
        file_name: Set(format!("{caption}.png")),
        created_at: Set(created_at),
    }
    .insert(&app.db)
    .await
    .expect("Failed to insert post");
}

fn captions(body: &serde_json::Value) -> Vec<String> {
    body["posts"]
        .as_array()
        .expect("feed should contain a posts array")
        .iter()
        .map(|p| p["caption"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn empty_feed_has_posts_envelope() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::FEED).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, serde_json::json!({ "posts": [] }));
}

#[tokio::test]
async fn feed_is_newest_first_regardless_of_insert_order() {
    let app = TestApp::spawn().await;
    insert_post(&app, "middle", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()).await;
    insert_post(&app, "newest", Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap()).await;
    insert_post(&app, "oldest", Utc.with_ymd_and_hms(2023, 3, 3, 9, 0, 0).unwrap()).await;

    let res = app.get(routes::FEED).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(captions(&res.body), vec!["newest", "middle", "oldest"]);

    let stamps: Vec<DateTime<Utc>> = res.body["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            DateTime::parse_from_rfc3339(p["created_at"].as_str().unwrap())
                .expect("created_at should be RFC 3339")
                .with_timezone(&Utc)
        })
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn feed_entries_carry_every_field() {
    let app = TestApp::spawn().await;
    insert_post(&app, "only", Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()).await;

    let res = app.get(routes::FEED).await;

    let entry = &res.body["posts"][0];
    assert_eq!(entry["caption"], "only");
    assert_eq!(entry["url"], "https://ik.example.test/demo/only.png");
    assert_eq!(entry["file_type"], "image");
    assert_eq!(entry["file_name"], "only.png");
    assert_eq!(entry["created_at"], "2025-01-02T03:04:05Z");
    assert!(Uuid::parse_str(entry["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn uploads_appear_newest_first() {
    let app = TestApp::spawn().await;

    let first = app.upload(Some(FilePart::png("first.png")), Some("first")).await;
    assert_eq!(first.status, 201, "{}", first.text);
    let second = app.upload(Some(FilePart::png("second.png")), Some("second")).await;
    assert_eq!(second.status, 201, "{}", second.text);

    let res = app.get(routes::FEED).await;

    assert_eq!(captions(&res.body), vec!["second", "first"]);
}

#[tokio::test]
async fn openapi_document_lists_feed_routes() {
    let app = TestApp::spawn().await;

    let res = app.get("/api-docs/openapi.json").await;

    assert_eq!(res.status, 200);
    assert!(res.body["paths"]["/feed"].is_object());
    assert!(res.body["paths"]["/upload"].is_object());
}
