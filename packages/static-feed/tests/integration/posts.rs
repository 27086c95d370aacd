use crate::common::{TestApp, routes};

mod get_post {
    use super::*;

    #[tokio::test]
    async fn returns_seeded_post() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::post(1)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], 1);
        assert_eq!(res.body["title"], "New Post");
        assert_eq!(res.body["content"], "Cool post");
    }

    #[tokio::test]
    async fn every_seeded_id_is_reachable() {
        let app = TestApp::spawn().await;

        for id in 1..=20 {
            let res = app.get(&routes::post(id)).await;
            assert_eq!(res.status, 200, "id {id}: {}", res.text);
            assert_eq!(res.body["id"], id);
        }

        let last = app.get(&routes::post(20)).await;
        assert_eq!(last.body["title"], "Tailwind CSS Tips");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        for id in [0, 21, -1, 9999] {
            let res = app.get(&routes::post(id)).await;
            assert_eq!(res.status, 404, "id {id}");
            assert_eq!(res.body["code"], "NOT_FOUND");
            assert_eq!(res.body["message"], "Post not found");
        }
    }

    #[tokio::test]
    async fn non_integer_id_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::post("abc")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod list_posts {
    use super::*;

    #[tokio::test]
    async fn without_limit_returns_mapping_of_all_posts() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::POSTS).await;

        assert_eq!(res.status, 200);
        let map = res.body.as_object().expect("expected an object keyed by id");
        assert_eq!(map.len(), 20);
        assert_eq!(map["1"]["title"], "New Post");
        assert_eq!(map["20"]["title"], "Tailwind CSS Tips");
    }

    #[tokio::test]
    async fn positive_limit_returns_prefix_in_order() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::posts_with_limit(5)).await;

        assert_eq!(res.status, 200);
        let posts = res.body.as_array().expect("expected an array");
        assert_eq!(posts.len(), 5);
        let ids: Vec<i64> = posts.iter().map(|p| p["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(posts[1]["title"], "Django Ninja 101");
    }

    #[tokio::test]
    async fn limit_above_total_returns_everything_as_array() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::posts_with_limit(100)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body.as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn zero_or_negative_limit_falls_back_to_all() {
        let app = TestApp::spawn().await;

        for limit in [0, -3] {
            let res = app.get(&routes::posts_with_limit(limit)).await;
            assert_eq!(res.status, 200);
            assert_eq!(
                res.body.as_object().map(|m| m.len()),
                Some(20),
                "limit {limit}"
            );
        }
    }

    #[tokio::test]
    async fn non_integer_limit_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::posts_with_limit("ten")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn openapi_document_lists_post_routes() {
    let app = TestApp::spawn().await;

    let res = app.get("/api-docs/openapi.json").await;

    assert_eq!(res.status, 200);
    assert!(res.body["paths"]["/posts"].is_object());
    assert!(res.body["paths"]["/posts/{id}"].is_object());
}
