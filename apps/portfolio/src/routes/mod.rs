pub mod health;
pub mod pages;

use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.public_dir)
        .not_found_service(pages::handle_not_found.into_service());

    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(pages::handle_page))
        .route("/navigate", post(pages::handle_navigate))
        // JSON API
        .route(
            "/api/v1/view",
            get(pages::handle_get_view).put(pages::handle_select_view),
        )
        .route("/api/v1/content", get(pages::handle_get_content))
        .route(
            "/api/v1/content/health",
            get(pages::handle_content_health),
        )
        // Resume PDF and other static assets
        .fallback_service(assets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::ContentRepository;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn selection(view: &str) -> pages::ViewSelection {
        pages::ViewSelection {
            view: view.to_string(),
        }
    }

    fn make_server() -> TestServer {
        let config = Config {
            public_dir: "./does-not-exist".into(),
            ..Config::default()
        };
        let state = AppState::new(config, ContentRepository::load());
        TestServer::new(build_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = make_server();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "portfolio");
    }

    #[tokio::test]
    async fn test_default_page_is_home() {
        let server = make_server();
        let response = server.get("/").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<main data-view="home">"#));

        let view: Value = server.get("/api/v1/view").await.json();
        assert_eq!(view, json!({ "view": "home" }));
    }

    #[tokio::test]
    async fn test_navigate_to_experience_scenario() {
        let server = make_server();
        assert!(server.get("/").await.text().contains(r#"data-view="home""#));

        let response = server
            .post("/navigate")
            .form(&selection("experience"))
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");

        let html = server.get("/").await.text();
        assert!(html.contains(r#"<main data-view="experience">"#));
        let sun = html.find("IT Delivery Manager – Sun Life Financial").unwrap();
        let cipla = html.find("IT Senior Manager – Cipla Pharmaceuticals").unwrap();
        let consulting = html.find("Enterprise Software Consultant – Capgemini").unwrap();
        assert!(sun < cipla && cipla < consulting);
        assert!(html[sun..cipla].matches("<li>").count() >= 5);
    }

    #[tokio::test]
    async fn test_navigate_rejects_unknown_view() {
        let server = make_server();
        let response = server.post("/navigate").form(&selection("about")).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let view: Value = server.get("/api/v1/view").await.json();
        assert_eq!(view["view"], "home");
    }

    #[tokio::test]
    async fn test_repeated_home_selection_is_stable() {
        let server = make_server();
        let before = server.get("/").await.text();
        for _ in 0..3 {
            server
                .post("/navigate")
                .form(&selection("home"))
                .await
                .assert_status(StatusCode::SEE_OTHER);
        }
        assert_eq!(server.get("/").await.text(), before);
    }

    #[tokio::test]
    async fn test_put_view_round_trip() {
        let server = make_server();
        let response = server
            .put("/api/v1/view")
            .json(&json!({ "view": "experience" }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["view"], "experience");

        let response = server
            .put("/api/v1/view")
            .json(&json!({ "view": "contact" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let view: Value = server.get("/api/v1/view").await.json();
        assert_eq!(view["view"], "experience");
    }

    #[tokio::test]
    async fn test_content_endpoint() {
        let server = make_server();
        let body: Value = server.get("/api/v1/content").await.json();
        assert_eq!(body["work_history"][0]["organization"], "Sun Life Financial");
        assert_eq!(body["education"].as_array().unwrap().len(), 4);
        assert_eq!(body["notes"][0], "Canadian PR");
    }

    #[tokio::test]
    async fn test_content_health_passes() {
        let server = make_server();
        let body: Value = server.get("/api/v1/content/health").await.json();
        assert_eq!(body["passed"], true);
        assert!(body["violations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let server = make_server();
        let response = server.get("/Asad_Khan_Resume.pdf").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
