//! Room handler integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{parse_body, request, TestApp};

mod test_create_room {
    use super::*;

    #[tokio::test]
    async fn test_create_room_returns_201() {
        let app = TestApp::new().await.unwrap();

        let req = request(Method::POST, "/api/rooms", Some(json!({"name": "General"})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = parse_body(resp).await;
        assert_eq!(body["room"]["name"], "General");
        assert!(body["room"]["id"].as_i64().unwrap() > 0);
        assert!(body["room"]["chatbot_endpoint_url"].is_null());
    }

    #[tokio::test]
    async fn test_create_room_with_endpoint() {
        let app = TestApp::new().await.unwrap();

        let req = request(
            Method::POST,
            "/api/rooms",
            Some(json!({"name": "Bot", "chatbot_endpoint_url": "https://x"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;
        assert_eq!(body["room"]["chatbot_endpoint_url"], "https://x");
    }

    #[tokio::test]
    async fn test_create_room_empty_name_returns_400() {
        let app = TestApp::new().await.unwrap();

        let req = request(Method::POST, "/api/rooms", Some(json!({"name": ""})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_create_room_whitespace_fields_return_400() {
        let app = TestApp::new().await.unwrap();

        for body in [
            json!({"name": "   "}),
            json!({"name": "Bot", "chatbot_endpoint_url": " \t "}),
        ] {
            let req = request(Method::POST, "/api/rooms", Some(body));
            let resp = app.test_router().oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(parse_body(resp).await["error"]["code"], "INVALID_ARGUMENT");
        }

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/api/rooms", None))
            .await
            .unwrap();
        assert!(parse_body(resp).await["rooms"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_room_missing_name_returns_400() {
        let app = TestApp::new().await.unwrap();

        let req = request(Method::POST, "/api/rooms", Some(json!({})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_room_empty_endpoint_returns_400() {
        let app = TestApp::new().await.unwrap();

        let req = request(
            Method::POST,
            "/api/rooms",
            Some(json!({"name": "Bot", "chatbot_endpoint_url": ""})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

mod test_list_and_get_rooms {
    use super::*;

    #[tokio::test]
    async fn test_list_rooms_empty() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/api/rooms", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(parse_body(resp).await, json!({"rooms": []}));
    }

    #[tokio::test]
    async fn test_list_rooms_in_creation_order() {
        let app = TestApp::new().await.unwrap();
        for name in ["a", "b", "c"] {
            let req = request(Method::POST, "/api/rooms", Some(json!({"name": name})));
            app.test_router().oneshot(req).await.unwrap();
        }

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/api/rooms", None))
            .await
            .unwrap();
        let body = parse_body(resp).await;
        let names: Vec<&str> = body["rooms"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_get_missing_room_returns_404() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/api/rooms/99999", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(parse_body(resp).await["error"]["code"], "ROOM_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_non_numeric_room_id_returns_400() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/api/rooms/abc", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_body(resp).await["error"]["code"], "INVALID_ARGUMENT");

        let req = request(
            Method::PATCH,
            "/api/rooms/abc/endpoint",
            Some(json!({"chatbot_endpoint_url": "https://x"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_body(resp).await["error"]["code"], "INVALID_ARGUMENT");
    }
}

mod test_update_room {
    use super::*;

    #[tokio::test]
    async fn test_set_endpoint_last_write_wins() {
        let app = TestApp::new().await.unwrap();
        let req = request(
            Method::POST,
            "/api/rooms",
            Some(json!({"name": "Bot", "chatbot_endpoint_url": "https://x"})),
        );
        app.test_router().oneshot(req).await.unwrap();

        for url in ["https://y", "https://z"] {
            let req = request(
                Method::PATCH,
                "/api/rooms/1/endpoint",
                Some(json!({"chatbot_endpoint_url": url})),
            );
            let resp = app.test_router().oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/api/rooms/1", None))
            .await
            .unwrap();
        let body = parse_body(resp).await;
        assert_eq!(body["room"]["chatbot_endpoint_url"], "https://z");
    }

    #[tokio::test]
    async fn test_set_endpoint_missing_room_returns_404() {
        let app = TestApp::new().await.unwrap();

        let req = request(
            Method::PATCH,
            "/api/rooms/99999/endpoint",
            Some(json!({"chatbot_endpoint_url": "https://x"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_set_endpoint_empty_url_returns_400() {
        let app = TestApp::new().await.unwrap();
        let req = request(Method::POST, "/api/rooms", Some(json!({"name": "Bot"})));
        app.test_router().oneshot(req).await.unwrap();

        let req = request(
            Method::PATCH,
            "/api/rooms/1/endpoint",
            Some(json!({"chatbot_endpoint_url": ""})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rename_room() {
        let app = TestApp::new().await.unwrap();
        let req = request(Method::POST, "/api/rooms", Some(json!({"name": "old"})));
        app.test_router().oneshot(req).await.unwrap();

        let req = request(Method::PATCH, "/api/rooms/1", Some(json!({"name": "new"})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(parse_body(resp).await["room"]["name"], "new");
    }
}
