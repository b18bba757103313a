pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers::handle_login;
use crate::ingest::handlers as ingest;
use crate::onboarding::handlers::handle_onboarding;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/login", post(handle_login))
        // Working set
        .route(
            "/api/v1/candidates",
            get(ingest::handle_list)
                .put(ingest::handle_replace)
                .delete(ingest::handle_clear),
        )
        .route("/api/v1/candidates/sample", post(ingest::handle_load_sample))
        .route("/api/v1/candidates/upload", post(ingest::handle_upload))
        // Screening
        .route("/api/v1/screen", post(screening::handle_screen))
        .route("/api/v1/screen/compare", post(screening::handle_compare))
        .route("/api/v1/screen/print", post(screening::handle_print))
        // Onboarding
        .route("/api/v1/onboarding", post(handle_onboarding))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::ingest::importer::UnconfiguredImporter;
    use crate::ingest::sample::sample_candidates;
    use crate::onboarding::provisioning::LocalProvisioner;
    use crate::state::WorkingSet;

    fn test_state() -> AppState {
        AppState {
            working_set: WorkingSet::new(sample_candidates()),
            importer: Arc::new(UnconfiguredImporter),
            provisioner: Arc::new(LocalProvisioner),
        }
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload_request(file_name: &str, content: &str) -> Request<Body> {
        let boundary = "screener-test-boundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\r\n{content}\r\n--{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/candidates/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_login_roles() {
        let app = build_router(test_state());

        let ok = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/login", json!({"username": "hr", "password": "hr123"})))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        let body = body_json(ok).await;
        assert_eq!(body["role"], "hr");
        assert_eq!(body["can_access_screener"], true);

        let bad = app
            .oneshot(json_request("POST", "/api/v1/login", json!({"username": "hr", "password": "HR123"})))
            .await
            .unwrap();
        assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(bad).await["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_screen_ranks_sample_set() {
        let app = build_router(test_state());
        let response = app
            .oneshot(json_request("POST", "/api/v1/screen", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["loaded"]["count"], 4);
        let names: Vec<&str> = body["ranked"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Ben Tan", "Divya Nair", "Aisha Rahman", "Chong Wei Lim"]);
        assert_eq!(body["ranked"][2]["score"], 44.0);
        assert_eq!(body["ranked"][2]["yearsExp"], 3.0);
    }

    #[tokio::test]
    async fn test_replace_rejects_non_array_and_keeps_set() {
        let app = build_router(test_state());

        let rejected = app
            .clone()
            .oneshot(json_request("PUT", "/api/v1/candidates", json!({"id": "R-9"})))
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(rejected).await["error"]["message"],
            "JSON must be an array of resumes"
        );

        let listed = app
            .oneshot(Request::builder().uri("/api/v1/candidates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(listed).await["summary"]["count"], 4);
    }

    #[tokio::test]
    async fn test_replace_with_malformed_json_uses_error_envelope() {
        let app = build_router(test_state());

        let truncated = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/candidates")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("[{"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(truncated.status(), StatusCode::BAD_REQUEST);
        let body = body_json(truncated).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().starts_with("Invalid JSON"));

        let untyped = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/candidates")
                    .body(Body::from(r#"[{"id":"P-1","name":"Pasted"}]"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(untyped.status(), StatusCode::OK);
        assert_eq!(body_json(untyped).await["loaded"], 1);
    }

    #[tokio::test]
    async fn test_replace_then_clear_then_sample() {
        let app = build_router(test_state());

        let replaced = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/v1/candidates",
                json!([{"id": 7, "name": "Solo", "yearsExp": null}]),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(replaced).await["loaded"], 1);

        let cleared = app
            .clone()
            .oneshot(Request::builder().method("DELETE").uri("/api/v1/candidates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(cleared).await["loaded"], 0);

        let empty = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/screen", json!({})))
            .await
            .unwrap();
        let body = body_json(empty).await;
        assert_eq!(body["ranked"], json!([]));
        assert_eq!(body["filtered"]["avg_years"], 0.0);

        let sample = app
            .oneshot(Request::builder().method("POST").uri("/api/v1/candidates/sample").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(sample).await["loaded"], 4);
    }

    #[tokio::test]
    async fn test_compare_caps_at_three() {
        let app = build_router(test_state());
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/screen/compare",
                json!({"selected": ["R-001", "R-002", "R-003", "R-004"]}),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["candidates"].as_array().unwrap().len(), 3);
        assert_eq!(body["candidates"][0]["name"], "Ben Tan");
    }

    #[tokio::test]
    async fn test_print_returns_html_for_selection() {
        let app = build_router(test_state());
        let response = app
            .oneshot(json_request("POST", "/api/v1/screen/print", json!({"selected": ["R-001"]})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("Aisha Rahman"));
        assert!(html.contains("Score: 44"));
        assert!(!html.contains("Ben Tan"));
    }

    #[tokio::test]
    async fn test_upload_json_file() {
        let app = build_router(test_state());
        let response = app
            .clone()
            .oneshot(upload_request("resumes.JSON", r#"[{"id":"U-1","name":"Up Loaded"}]"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["loaded"], 1);

        let listed = app
            .oneshot(Request::builder().uri("/api/v1/candidates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(listed).await["candidates"][0]["name"], "Up Loaded");
    }

    #[tokio::test]
    async fn test_upload_rejects_other_types() {
        let app = build_router(test_state());
        let response = app.oneshot(upload_request("cv.docx", "whatever")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "Only .json or .pdf supported"
        );
    }

    #[tokio::test]
    async fn test_upload_pdf_without_importer_is_upstream_error() {
        let app = build_router(test_state());
        let response = app.clone().oneshot(upload_request("cv.pdf", "%PDF-1.4")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let listed = app
            .oneshot(Request::builder().uri("/api/v1/candidates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(listed).await["summary"]["count"], 4);
    }

    #[tokio::test]
    async fn test_onboarding_flow() {
        let app = build_router(test_state());
        let form = json!({
            "fullName": "Aisha Rahman",
            "personalEmail": "aisha@example.com",
            "phone": "+60-12-3456789",
            "positionTitle": "Software Engineer",
            "department": "Engineering",
            "startDate": "2026-11-02",
            "skills": "Python, Docker",
            "preferredUsername": "Aisha Rahman",
            "preferredPassword": "secret1",
            "emName": "Farid",
            "emPhone": "+60-12-0000000"
        });

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/onboarding", form))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["accountEmail"], "aisha.rahman@gmail.com");
        assert_eq!(body["mentor"]["name"], "Dr. Sarah Tan");
        assert_eq!(body["source"], "local");
        assert_eq!(body["startDate"], "2026-11-02");
        assert!(body.get("notice").is_none());
        assert!(!body.to_string().contains("secret1"));

        let missing = app
            .oneshot(json_request("POST", "/api/v1/onboarding", json!({"fullName": "Only Name"})))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
        let message = body_json(missing).await["error"]["message"].as_str().unwrap().to_string();
        assert!(message.starts_with("Please fill required fields:"));
        assert!(message.contains("- Personal Email"));
        assert!(!message.contains("- Full Name"));
    }
}
