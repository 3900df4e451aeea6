use axum::{
    extract::{MatchedPath, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, info_span, instrument, warn};

use crate::auth::{issue_token, BearerToken, Credentials};
use crate::error::ApiError;
use crate::models::{
    CreateItemParams, CreateItemResponse, ItemsResponse, LoginParams, ProfileResponse,
    StatusResponse, TokenResponse,
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub credentials: Credentials,
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/profile", get(profile))
        .route("/items", get(get_items).post(create_item))
        .route("/status", get(status))
        .layer(axum::middleware::from_fn(trace_requests))
        .with_state(state)
}

async fn trace_requests(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string());

    let path_display = path.as_deref().unwrap_or(uri.path());

    let span = info_span!(
        "http_request",
        method = %method,
        path = path_display,
    );

    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();
    let status = response.status().as_u16();

    span.record("status", status);
    span.record("duration_ms", duration.as_millis());

    if status >= 500 {
        error!(
            parent: &span,
            method = %method,
            path = path_display,
            status = status,
            duration_ms = duration.as_millis(),
            "HTTP request completed"
        );
    } else if status >= 400 {
        warn!(
            parent: &span,
            method = %method,
            path = path_display,
            status = status,
            duration_ms = duration.as_millis(),
            "HTTP request completed"
        );
    } else {
        info!(
            parent: &span,
            method = %method,
            path = path_display,
            status = status,
            duration_ms = duration.as_millis(),
            "HTTP request completed"
        );
    }

    response
}

#[instrument(skip(state, params))]
pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<Json<TokenResponse>, ApiError> {
    if !state.credentials.verify(&params.username, &params.password) {
        warn!(username = %params.username, "Login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = issue_token(&params.username);
    info!(username = %params.username, "Login succeeded");

    Ok(Json(TokenResponse { access_token }))
}

/// Succeeds for any bearer token the extractor lets through. There is no
/// token store to check against, so the raw value is echoed back.
#[instrument(skip(token))]
pub async fn profile(BearerToken(token): BearerToken) -> impl IntoResponse {
    Json(ProfileResponse {
        msg: format!("Your profile. Token: {token}"),
    })
}

#[instrument]
pub async fn get_items() -> impl IntoResponse {
    // Rebuilt on every call. Created items are never added here.
    Json(ItemsResponse {
        items: vec![
            "item1".to_string(),
            "item2".to_string(),
            "item3".to_string(),
        ],
    })
}

#[instrument]
pub async fn create_item(Query(params): Query<CreateItemParams>) -> impl IntoResponse {
    info!(item_name = %params.name, "Item created");
    Json(CreateItemResponse {
        msg: "Item created".to_string(),
        name: params.name,
    })
}

#[instrument]
pub async fn status() -> impl IntoResponse {
    Json(StatusResponse {
        status: "ok".to_string(),
    })
}
