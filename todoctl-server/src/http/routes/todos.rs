//! Todo endpoints
//!
//! Every mutating route redirects back to `/`. Unknown ids and blank task
//! text are silent no-ops, so those redirect too.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::db::{ConnectionScope, TodoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::TodoIdPath;
use crate::http::server::AppState;

/// Form body for add and edit. A missing field counts as blank text.
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub task: String,
}

/// GET / - render all items
async fn index(
    State(state): State<Arc<AppState>>,
    mut scope: ConnectionScope,
) -> Result<Html<String>, ApiError> {
    let todos = TodoRepo::new(scope.acquire().await?).list_all().await?;
    Ok(Html(state.templates.index(&todos)?))
}

/// POST /add - add an item
async fn add(
    mut scope: ConnectionScope,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, ApiError> {
    TodoRepo::new(scope.acquire().await?).add(&form.task).await?;
    Ok(Redirect::to("/"))
}

/// GET /edit/{id} - render the edit form, or go home if the item is gone
async fn edit_form(
    State(state): State<Arc<AppState>>,
    mut scope: ConnectionScope,
    TodoIdPath(id): TodoIdPath,
) -> Result<Response, ApiError> {
    let todo = TodoRepo::new(scope.acquire().await?).get(id).await?;

    match todo {
        Some(todo) => Ok(Html(state.templates.edit(&todo)?).into_response()),
        None => Ok(Redirect::to("/").into_response()),
    }
}

/// POST /edit/{id} - replace the task text
async fn edit_submit(
    mut scope: ConnectionScope,
    TodoIdPath(id): TodoIdPath,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, ApiError> {
    TodoRepo::new(scope.acquire().await?)
        .edit(id, &form.task)
        .await?;
    Ok(Redirect::to("/"))
}

/// GET /update/{id} - flip `done`
async fn toggle(
    mut scope: ConnectionScope,
    TodoIdPath(id): TodoIdPath,
) -> Result<Redirect, ApiError> {
    TodoRepo::new(scope.acquire().await?).toggle(id).await?;
    Ok(Redirect::to("/"))
}

/// GET /delete/{id} - remove the item
async fn delete(
    mut scope: ConnectionScope,
    TodoIdPath(id): TodoIdPath,
) -> Result<Redirect, ApiError> {
    TodoRepo::new(scope.acquire().await?).delete(id).await?;
    Ok(Redirect::to("/"))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add))
        .route("/edit/{id}", get(edit_form).post(edit_submit))
        .route("/update/{id}", get(toggle))
        .route("/delete/{id}", get(delete))
}
