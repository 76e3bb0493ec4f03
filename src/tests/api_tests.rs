//! Capability document and routing misses.

#[cfg(test)]
mod api_root_tests {
    use crate::tests::test_utils::*;
    use axum::http::{Request, StatusCode, header};
    use axum::body::Body;

    #[tokio::test]
    async fn api_root_serves_capability_document() {
        let app = test_app(test_state());
        let response = send(&app, get("/api/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let doc = body_json(response).await;
        assert_eq!(doc["links"]["self"], "http://localhost:8000/api/");
        assert_eq!(doc["links"]["events"], "http://localhost:8000/api/events/");
        assert_eq!(
            doc["templates"]["event-log-detail-template"],
            "http://localhost:8000/api/events/{graceid}/log/{N}"
        );
        assert_eq!(doc["pipelines"], serde_json::json!(["pycbc"]));
        assert_eq!(doc["searches"], serde_json::json!(["AllSky"]));
        assert_eq!(doc["server-version"], "2.28.1");
    }

    #[tokio::test]
    async fn api_root_uses_request_host() {
        let app = test_app(test_state());
        let request = Request::builder()
            .uri("/api/")
            .header(header::HOST, "ldas-pcdev1:8000")
            .body(Body::empty())
            .unwrap();

        let doc = body_json(send(&app, request).await).await;
        assert_eq!(doc["links"]["self"], "http://ldas-pcdev1:8000/api/");
    }

    #[tokio::test]
    async fn api_root_is_byte_identical_across_calls() {
        let app = test_app(test_state());
        let first = body_bytes(send(&app, get("/api/")).await).await;
        let second = body_bytes(send(&app, get("/api/")).await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_paths_are_404_with_empty_body() {
        let app = test_app(test_state());

        let response = send(&app, get("/api/unknown")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());

        let response = send(&app, empty_post("/api/unknown")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn wrong_method_on_known_path_is_404() {
        let app = test_app(test_state());

        assert_eq!(
            send(&app, empty_post("/api/")).await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            send(&app, get("/api/events/")).await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            send(&app, get("/api/events/G1/log")).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn paths_below_log_entry_are_404() {
        let app = test_app(test_state());

        let response = send(&app, empty_post("/api/events/G1/log/5")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            send(&app, empty_post("/api/events/G1/log/")).await.status(),
            StatusCode::OK
        );
    }
}
