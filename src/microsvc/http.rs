//! HTTP transport - maps REST requests onto command dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /health` - `{ "ok": true, "commands": [...] }`
//! - `GET /:resource` - `<command>.list` with `page`, `perPage`, `search`, `sort`, `dir`
//! - `POST /:resource` - `<command>.create`, 201 with a `Location` header
//! - `GET /:resource/:id` - `<command>.get`
//! - `PUT /:resource/:id` - `<command>.update`, body plus the path id
//! - `DELETE /:resource/:id` - `<command>.delete`, 204
//!
//! Resources are `categories`, `genres` and `cast_members`. Errors are
//! returned as `{ "message", "errors": [{ "message" }] }`.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use super::error::HandlerError;
use super::service::Service;

/// Command prefix for a URL resource segment.
fn command_prefix(resource: &str) -> Option<&'static str> {
    match resource {
        "categories" => Some("category"),
        "genres" => Some("genre"),
        "cast_members" => Some("cast_member"),
        _ => None,
    }
}

fn command_for(resource: &str, action: &str) -> Result<String, HandlerError> {
    command_prefix(resource)
        .map(|prefix| format!("{}.{}", prefix, action))
        .ok_or_else(|| HandlerError::UnknownCommand(resource.to_string()))
}

/// Build an axum `Router` that dispatches through the given service.
pub fn router<R: Send + Sync + 'static>(service: Arc<Service<R>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/:resource", get(list_handler).post(create_handler))
        .route(
            "/:resource/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(service)
}

/// Serve the service on `addr` until `shutdown` resolves.
pub async fn serve<R, F>(service: Arc<Service<R>>, addr: &str, shutdown: F) -> Result<(), std::io::Error>
where
    R: Send + Sync + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "http listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}

fn error_response(err: HandlerError) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.body())).into_response()
}

fn respond(result: Result<Response, HandlerError>) -> Response {
    result.unwrap_or_else(error_response)
}

/// Parse a request body as a JSON object. An empty body is an empty object.
fn body_object(body: &Bytes) -> Result<Map<String, Value>, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(HandlerError::DecodeFailed("request body must be a JSON object".into())),
    }
}

/// Query parameters as command input. Numeric paging values become numbers.
fn query_input(params: HashMap<String, String>) -> Value {
    let object: Map<String, Value> = params
        .into_iter()
        .map(|(key, value)| {
            let value = match key.as_str() {
                "page" | "perPage" => value
                    .parse::<u64>()
                    .map(Value::from)
                    .unwrap_or(Value::String(value)),
                _ => Value::String(value),
            };
            (key, value)
        })
        .collect();
    Value::Object(object)
}

/// `GET /health` - returns `{ "ok": true, "commands": [...] }`.
async fn health_handler<R: Send + Sync + 'static>(
    State(service): State<Arc<Service<R>>>,
) -> impl IntoResponse {
    Json(json!({ "ok": true, "commands": service.commands() }))
}

async fn list_handler<R: Send + Sync + 'static>(
    State(service): State<Arc<Service<R>>>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond(list(&service, &resource, params))
}

fn list<R: Send + Sync + 'static>(
    service: &Service<R>,
    resource: &str,
    params: HashMap<String, String>,
) -> Result<Response, HandlerError> {
    let command = command_for(resource, "list")?;
    let page = service.dispatch(&command, query_input(params))?;
    Ok((StatusCode::OK, Json(page)).into_response())
}

async fn create_handler<R: Send + Sync + 'static>(
    State(service): State<Arc<Service<R>>>,
    Path(resource): Path<String>,
    body: Bytes,
) -> Response {
    respond(create(&service, &resource, &body))
}

fn create<R: Send + Sync + 'static>(
    service: &Service<R>,
    resource: &str,
    body: &Bytes,
) -> Result<Response, HandlerError> {
    let command = command_for(resource, "create")?;
    let input = body_object(body)?;
    let created = service.dispatch(&command, Value::Object(input))?;
    let id = created.get("id").and_then(Value::as_str).unwrap_or_default();
    let location = format!("/{}/{}", resource, id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}

async fn get_handler<R: Send + Sync + 'static>(
    State(service): State<Arc<Service<R>>>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    respond(fetch(&service, &resource, id))
}

fn fetch<R: Send + Sync + 'static>(
    service: &Service<R>,
    resource: &str,
    id: String,
) -> Result<Response, HandlerError> {
    let command = command_for(resource, "get")?;
    let found = service.dispatch(&command, json!({ "id": id }))?;
    Ok((StatusCode::OK, Json(found)).into_response())
}

async fn update_handler<R: Send + Sync + 'static>(
    State(service): State<Arc<Service<R>>>,
    Path((resource, id)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    respond(update(&service, &resource, id, &body))
}

fn update<R: Send + Sync + 'static>(
    service: &Service<R>,
    resource: &str,
    id: String,
    body: &Bytes,
) -> Result<Response, HandlerError> {
    let command = command_for(resource, "update")?;
    let mut input = body_object(body)?;
    input.insert("id".to_string(), Value::String(id));
    let updated = service.dispatch(&command, Value::Object(input))?;
    Ok((StatusCode::OK, Json(updated)).into_response())
}

async fn delete_handler<R: Send + Sync + 'static>(
    State(service): State<Arc<Service<R>>>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    respond(delete(&service, &resource, id))
}

fn delete<R: Send + Sync + 'static>(
    service: &Service<R>,
    resource: &str,
    id: String,
) -> Result<Response, HandlerError> {
    let command = command_for(resource, "delete")?;
    service.dispatch(&command, json!({ "id": id }))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
