use super::{
    components,
    components::Component,
    errors::ServerError,
    extractors::{JsonBody, NoteId},
    models::{AppState, Message, NewNote},
};
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Uri},
    response::{Html, IntoResponse},
    Json,
};

pub async fn root() -> impl IntoResponse {
    Html(
        components::Page {
            title: "Notes",
            children: Box::new(components::NoteBoard::default()),
        }
        .render(),
    )
}

pub async fn get_script_js() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/javascript"),
    );
    (headers, include_str!("./script.js"))
}

pub async fn pong() -> impl IntoResponse {
    "pong"
}

pub async fn add_note(
    State(AppState { store }): State<AppState>,
    JsonBody(note): JsonBody<NewNote>,
) -> Result<impl IntoResponse, ServerError> {
    let created = store
        .create(note)
        .await
        .map_err(|e| ServerError::storage("Failed to add note.", e))?;
    tracing::info!(id = created.id, "note added");

    Ok(Json(Message {
        message: "Note added successfully!",
    }))
}

pub async fn get_notes(
    State(AppState { store }): State<AppState>,
) -> Result<impl IntoResponse, ServerError> {
    let notes = store
        .list()
        .await
        .map_err(|e| ServerError::storage("Failed to retrieve notes.", e))?;

    Ok(Json(notes))
}

/// Deleting an id that does not exist is still a success.
pub async fn delete_note(
    State(AppState { store }): State<AppState>,
    NoteId(id): NoteId,
) -> Result<impl IntoResponse, ServerError> {
    let removed = store
        .delete(id)
        .await
        .map_err(|e| ServerError::storage("Failed to delete note.", e))?;
    if removed == 0 {
        tracing::debug!(id, "delete matched no note");
    } else {
        tracing::info!(id, "note deleted");
    }

    Ok(Json(Message {
        message: "Note deleted successfully!",
    }))
}

pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("No route for {}", uri.path()))
}
