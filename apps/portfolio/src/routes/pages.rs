use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::content::{run_self_check, ContentRepository, IntegrityReport};
use crate::errors::AppError;
use crate::models::view::View;
use crate::state::AppState;

/// Body of the navigation form and of `PUT /api/v1/view`.
///
/// `view` stays a raw string here so unknown names surface as our own
/// `VALIDATION_ERROR` instead of the extractor's rejection.
#[derive(Serialize, Deserialize)]
pub struct ViewSelection {
    pub view: String,
}

#[derive(Serialize)]
pub struct ViewResponse {
    pub view: View,
}

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    Html(state.portfolio.read().await.render())
}

/// POST /navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Form(req): Form<ViewSelection>,
) -> Result<Redirect, AppError> {
    let view: View = req.view.parse()?;
    state.portfolio.write().await.select(view);
    Ok(Redirect::to("/"))
}

/// GET /api/v1/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    Json(ViewResponse {
        view: state.portfolio.read().await.view(),
    })
}

/// PUT /api/v1/view
pub async fn handle_select_view(
    State(state): State<AppState>,
    Json(req): Json<ViewSelection>,
) -> Result<Json<ViewResponse>, AppError> {
    let view: View = req.view.parse()?;
    let mut portfolio = state.portfolio.write().await;
    portfolio.select(view);
    Ok(Json(ViewResponse {
        view: portfolio.view(),
    }))
}

/// GET /api/v1/content
pub async fn handle_get_content(State(state): State<AppState>) -> Json<ContentRepository> {
    Json(state.portfolio.read().await.content().clone())
}

/// GET /api/v1/content/health
pub async fn handle_content_health(State(state): State<AppState>) -> Json<IntegrityReport> {
    Json(run_self_check(state.portfolio.read().await.content()))
}

pub async fn handle_not_found() -> AppError {
    AppError::NotFound("No such page or asset".to_string())
}
