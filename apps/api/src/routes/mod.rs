pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::career::handlers as career;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career context API
        .route(
            "/api/v1/career-context/analyze",
            post(career::handle_analyze),
        )
        .route(
            "/api/v1/career-context/guidance",
            get(career::handle_guidance),
        )
        // Requirement matching API
        .route("/api/v1/requirements/match", post(matching::handle_match))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with_limit(max_vault_items: usize) -> Router {
        build_router(AppState::new(Config {
            max_vault_items,
            ..Config::default()
        }))
    }

    fn app() -> Router {
        app_with_limit(Config::default().max_vault_items)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-api");
    }

    #[tokio::test]
    async fn test_analyze_empty_vault() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/career-context/analyze", json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ctx = &body["careerContext"];
        assert_eq!(ctx["inferredSeniority"], "Junior IC");
        assert_eq!(ctx["seniorityConfidence"], 70);
        assert_eq!(ctx["yearsOfExperience"], 3);
        assert_eq!(ctx["strategicDepth"], 15);
        assert_eq!(ctx["careerArchetype"], "generalist");
        assert_eq!(ctx["impactScale"], "individual");
        assert_eq!(ctx["teamSizesManaged"], json!([]));
        assert!(body["levelGuidance"]
            .as_str()
            .unwrap()
            .starts_with("FOCUS:"));
    }

    #[tokio::test]
    async fn test_analyze_vp_profile() {
        let vault = json!({
            "powerPhrases": [
                {"power_phrase": "Presented the growth plan to the board"},
                {"power_phrase": "Owned a $60M budget"},
                "Led a team of 60 across three regions"
            ],
            "skills": ["Python"],
            "certifications": null
        });
        let (status, body) = send(app(), post_json("/api/v1/career-context/analyze", vault)).await;
        assert_eq!(status, StatusCode::OK);
        let ctx = &body["careerContext"];
        assert_eq!(ctx["inferredSeniority"], "VP");
        assert_eq!(ctx["seniorityConfidence"], 90);
        assert_eq!(ctx["budgetSizesManaged"], json!([60000000.0]));
        assert_eq!(ctx["teamSizesManaged"], json!([60]));
        assert_eq!(ctx["impactScale"], "company");
    }

    #[tokio::test]
    async fn test_analyze_tolerates_null_and_duplicate_text_columns() {
        let vault = json!({
            "powerPhrases": [
                {"id": "a", "power_phrase": null},
                "Led a team of 12 engineers"
            ],
            "skills": [{"skill_name": "Python", "name": "Python"}]
        });
        let (status, body) = send(app(), post_json("/api/v1/career-context/analyze", vault)).await;
        assert_eq!(status, StatusCode::OK);
        let ctx = &body["careerContext"];
        assert_eq!(ctx["teamSizesManaged"], json!([12]));
        assert_eq!(ctx["technicalDepth"], 100);
    }

    #[tokio::test]
    async fn test_analyze_rejects_oversized_vault() {
        let vault = json!({
            "skills": ["Python", "Go"],
            "leadership": ["Ran offsites"]
        });
        let (status, body) = send(
            app_with_limit(2),
            post_json("/api/v1/career-context/analyze", vault),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_rejects_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/career-context/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(app(), request).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_guidance_known_level() {
        let (status, body) = send(
            app(),
            get_request("/api/v1/career-context/guidance?level=Senior%20IC"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["requestedLevel"], "Senior IC");
        assert_eq!(body["resolvedLevel"], "Senior IC");
    }

    #[tokio::test]
    async fn test_guidance_unknown_level_falls_back() {
        let (_, unknown) = send(
            app(),
            get_request("/api/v1/career-context/guidance?level=Wizard"),
        )
        .await;
        let (_, mid) = send(
            app(),
            get_request("/api/v1/career-context/guidance?level=Mid-Level%20IC"),
        )
        .await;
        assert_eq!(unknown["resolvedLevel"], "Mid-Level IC");
        assert_eq!(unknown["guidance"], mid["guidance"]);
    }

    #[tokio::test]
    async fn test_guidance_without_level() {
        let (status, body) = send(app(), get_request("/api/v1/career-context/guidance")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resolvedLevel"], "Mid-Level IC");
    }

    #[tokio::test]
    async fn test_match_report() {
        let request = json!({
            "bullets": ["Built Kafka pipelines on Kubernetes"],
            "requirements": [
                {"text": "Kafka and Kubernetes"},
                {"text": "Terraform", "is_required": false}
            ]
        });
        let (status, body) = send(app(), post_json("/api/v1/requirements/match", request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["strong_matches"].as_array().unwrap().len(), 1);
        assert_eq!(body["gaps"][0]["requirement"], "Terraform");
        assert_eq!(body["gaps"][0]["is_required"], false);
        assert_eq!(body["scorer_backend"], "token_overlap");
    }

    #[tokio::test]
    async fn test_match_requires_requirements() {
        let request = json!({"bullets": ["Anything"], "requirements": []});
        let (status, body) = send(app(), post_json("/api/v1/requirements/match", request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_rejects_too_many_bullets() {
        let request = json!({
            "bullets": ["a", "b", "c"],
            "requirements": [{"text": "Rust"}]
        });
        let (status, _) = send(
            app_with_limit(2),
            post_json("/api/v1/requirements/match", request),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
