use axum::Json;
use axum::extract::{Path, Query};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{patch, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{Todo, TodoPeriod, TodoRequest};
use crate::services::TodoService;
use crate::state::AppState;

#[derive(Deserialize)]
struct IncomingParams {
    period: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PercentParams {
    percent_complete: i32,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todo", get(list_todos).post(create_todo))
        .route("/todo/incoming", get(incoming_todos))
        .route("/todo/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/todo/{id}/percent", patch(set_percent_complete))
        .route("/todo/{id}/done", post(mark_as_done))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = TodoService::new(state.db.clone()).get_all_todos().await?;
    Ok(Json(todos))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::new(state.db.clone()).get_todo_by_id(id).await?;
    Ok(Json(todo))
}

async fn incoming_todos(
    State(state): State<AppState>,
    Query(params): Query<IncomingParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    // Unrecognized period values fall back to an unfiltered listing.
    let period = params.period.as_deref().and_then(TodoPeriod::parse);
    let todos = TodoService::new(state.db.clone())
        .get_incoming_todos(period)
        .await?;
    Ok(Json(todos))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<TodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let todo = TodoService::new(state.db.clone()).create_todo(req).await?;
    let location = format!("/todo/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    ))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::new(state.db.clone()).update_todo(id, req).await?;
    Ok(Json(todo))
}

async fn set_percent_complete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PercentParams>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::new(state.db.clone())
        .set_todo_percent_complete(id, params.percent_complete)
        .await?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = TodoService::new(state.db.clone()).delete_todo(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn mark_as_done(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::new(state.db.clone()).mark_todo_as_done(id).await?;
    Ok(Json(todo))
}
