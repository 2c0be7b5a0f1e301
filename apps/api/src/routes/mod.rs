pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::form::page::form_page;
use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/health", get(health::health_handler))
        // The one rendering endpoint. Non-POST methods fall through to the
        // structured 405 instead of Axum's bare default.
        .route(
            "/api/v1/leave-letter",
            post(handlers::handle_generate_letter).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::pdf::letter_page_config;

    fn make_app() -> Router {
        build_router(AppState {
            page_config: letter_page_config(),
        })
    }

    fn valid_record() -> Value {
        json!({
            "fullName": "A. Sharma",
            "course": "B.Tech CSE",
            "roomNumber": "12",
            "hostelAddress": "Block A",
            "leaveStart": "2024-05-01",
            "leaveEnd": "2024-05-10",
            "reason": "family function",
            "homeAddress": "123 Main St",
            "returnDate": "2024-05-10",
            "rollNumber": "CS101",
            "contactNumber": "9999999999"
        })
    }

    fn post_letter(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/leave-letter")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_valid_record_returns_pdf_attachment() {
        let response = make_app().oneshot(post_letter(valid_record())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=Hostel_Leave_Letter.pdf"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.starts_with(b"%PDF-"), "body should be a PDF document");
    }

    #[tokio::test]
    async fn test_rendered_pdf_carries_the_submitted_values() {
        let response = make_app().oneshot(post_letter(valid_record())).await.unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        let text = pdf_extract::extract_text_from_mem(&body).unwrap();
        assert!(text.contains("Warden"), "addressee block missing");
        assert!(text.contains("Sharma"), "full name missing");
        assert!(text.contains("CS101"), "roll number missing");
        assert!(text.contains("9999999999"), "contact number missing");
        // Derived-field invariant: the return date equals the submitted leaveEnd.
        assert!(text.contains("2024-05-10"), "return date missing");
    }

    #[tokio::test]
    async fn test_get_on_letter_endpoint_is_structured_405() {
        let request = Request::builder()
            .method("GET")
            .uri("/api/v1/leave-letter")
            .body(Body::empty())
            .unwrap();
        let response = make_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED");
    }

    #[tokio::test]
    async fn test_post_with_empty_field_is_rejected_before_rendering() {
        let mut record = valid_record();
        record["reason"] = json!("");
        let response = make_app().oneshot(post_letter(record)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("reason"));
    }

    #[tokio::test]
    async fn test_post_with_unlisted_course_is_rejected_before_rendering() {
        let mut record = valid_record();
        record["course"] = json!("B.Sc Astronomy");
        let response = make_app().oneshot(post_letter(record)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("course"));
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = make_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "leave-letter-api");
    }

    #[tokio::test]
    async fn test_root_serves_the_form_page() {
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = make_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<form id=\"leave-form\">"));
        assert!(html.contains("name=\"fullName\""));
    }
}
