//! axum surface over the developer registry.
//!
//! GET    /developers       - list every record
//! GET    /developers/:id   - one record, 404 when absent
//! POST   /developers       - create (201), 400 on a missing field
//! PUT    /developers/:id   - replace, 404 when absent, 400 on a bad body
//! DELETE /developers/:id   - remove, 404 when absent

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::{DeleteResponse, Developer, DeveloperRegistry, DeveloperRequest};
use crate::utils::error::RegistryError;

pub type SharedRegistry = Arc<DeveloperRegistry>;

/// Error wrapper that turns registry and body errors into status codes.
#[derive(Debug)]
pub enum ApiError {
    Registry(RegistryError),
    MalformedBody(String),
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        ApiError::Registry(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Registry(e) if e.is_not_found() => StatusCode::NOT_FOUND.into_response(),
            ApiError::Registry(e) if e.is_validation() => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.user_friendly_message() })),
            )
                .into_response(),
            ApiError::Registry(e) => {
                tracing::error!("Unexpected registry error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::MalformedBody(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

/// Builds the developer routes, mounted under `context_path` unless it is
/// empty or `/`.
pub fn build_router(registry: SharedRegistry, context_path: &str) -> Router {
    let api = Router::new()
        .route("/developers", get(list_developers).post(create_developer))
        .route(
            "/developers/:id",
            get(get_developer)
                .put(update_developer)
                .delete(delete_developer),
        )
        .with_state(registry);

    let prefix = context_path.trim_end_matches('/');
    let app = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(prefix, api)
    };

    app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

pub async fn list_developers(State(registry): State<SharedRegistry>) -> Json<Vec<Developer>> {
    Json(registry.list_all())
}

pub async fn get_developer(
    State(registry): State<SharedRegistry>,
    Path(id): Path<i32>,
) -> Result<Json<Developer>, ApiError> {
    Ok(Json(registry.get_by_id(id)?))
}

pub async fn create_developer(
    State(registry): State<SharedRegistry>,
    payload: Result<Json<DeveloperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Developer>), ApiError> {
    let Json(request) = payload?;
    let created = registry.create(&request)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_developer(
    State(registry): State<SharedRegistry>,
    Path(id): Path<i32>,
    payload: Result<Json<DeveloperRequest>, JsonRejection>,
) -> Result<Json<Developer>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // an absent id wins over an unreadable body
        Err(_) if !registry.contains(id) => return Err(RegistryError::NotFound { id }.into()),
        Err(rejection) => return Err(rejection.into()),
    };

    Ok(Json(registry.update(id, &request)?))
}

pub async fn delete_developer(
    State(registry): State<SharedRegistry>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let removed = registry.delete(id)?;
    Ok(Json(DeleteResponse::deleted(removed)))
}
