use std::fmt::Display;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State, rejection::QueryRejection},
    http::{HeaderValue, StatusCode, header},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use filemgr_fs::{FileRecord, StoreError};
use filemgr_protocol::{
    CreateFileRequest, ErrorBody, FILE_NOT_FOUND, FileContent, FileEntry, FileList,
    INTERNAL_SERVER_ERROR, INVALID_JSON, NOT_FOUND, Outcome,
};
use log::{debug, error, warn};
use serde::Deserialize;

use crate::state::AppState;
use crate::ui::INDEX_HTML;

/// Routes of the HTTP front end. Anything unmatched, including a known path
/// with an unsupported method, answers 404 `{"error":"Not found"}`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).fallback(not_found))
        .route("/files", get(list_files).fallback(not_found))
        .route(
            "/file",
            get(read_file)
                .post(create_file)
                .delete(delete_file)
                .fallback(not_found),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::map_response(with_cors_headers))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct NameQuery {
    name: Option<String>,
}

/// The `name` parameter, if present and non-empty. A query string that does
/// not deserialize (e.g. `name` given twice) counts as no name.
fn name_param(query: Result<Query<NameQuery>, QueryRejection>) -> Option<String> {
    match query {
        Ok(Query(q)) => q.name.filter(|n| !n.is_empty()),
        Err(e) => {
            debug!("query rejected: {e}");
            None
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, NOT_FOUND)
}

async fn list_files(State(state): State<AppState>) -> Response {
    debug!("GET /files");

    match state.with_store(|store| store.list()).await {
        Ok(Ok(records)) => {
            let files = records.into_iter().map(to_entry).collect();
            Json(FileList { files }).into_response()
        }
        Ok(Err(e)) => {
            warn!("list failed: {e}");
            Json(FileList { files: Vec::new() }).into_response()
        }
        Err(e) => internal_error("list", e),
    }
}

async fn read_file(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Response {
    let Some(name) = name_param(query) else {
        return error_body(StatusCode::NOT_FOUND, NOT_FOUND);
    };
    debug!("GET /file name={name}");

    let lookup = name.clone();
    match state.with_store(move |store| store.read(&lookup)).await {
        Ok(Ok(content)) => Json(FileContent {
            content,
            filename: name,
        })
        .into_response(),
        Ok(Err(StoreError::NotFound { .. })) => error_body(StatusCode::NOT_FOUND, FILE_NOT_FOUND),
        Ok(Err(e @ StoreError::InvalidName { .. })) => {
            error_body(StatusCode::BAD_REQUEST, e.to_string())
        }
        Ok(Err(e)) => {
            error!("read {name} failed: {e}");
            error_body(StatusCode::NOT_FOUND, FILE_NOT_FOUND)
        }
        Err(e) => internal_error("read", e),
    }
}

async fn create_file(State(state): State<AppState>, body: Bytes) -> Response {
    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            debug!("POST /file rejected: {e}");
            return error_body(StatusCode::BAD_REQUEST, INVALID_JSON);
        }
    };

    if value.is_null() {
        debug!("POST /file rejected: null body");
        return error_body(StatusCode::BAD_REQUEST, INVALID_JSON);
    }

    // Well-formed JSON of the wrong shape is a failed create, not a parse error.
    let request: CreateFileRequest = match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => {
            debug!("POST /file missing fields: {e}");
            return outcome(StatusCode::BAD_REQUEST, false);
        }
    };
    debug!("POST /file filename={}", request.filename);

    let CreateFileRequest { filename, content } = request;
    match state
        .with_store(move |store| store.create(&filename, &content))
        .await
    {
        Ok(Ok(())) => outcome(StatusCode::CREATED, true),
        Ok(Err(e)) => {
            debug!("create failed: {e}");
            outcome(StatusCode::BAD_REQUEST, false)
        }
        Err(e) => internal_error("create", e),
    }
}

async fn delete_file(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Response {
    let Some(name) = name_param(query) else {
        return error_body(StatusCode::NOT_FOUND, NOT_FOUND);
    };
    debug!("DELETE /file name={name}");

    let target = name.clone();
    match state.with_store(move |store| store.delete(&target)).await {
        Ok(Ok(())) => outcome(StatusCode::OK, true),
        Ok(Err(StoreError::NotFound { .. })) => outcome(StatusCode::NOT_FOUND, false),
        Ok(Err(StoreError::InvalidName { .. })) => outcome(StatusCode::BAD_REQUEST, false),
        Ok(Err(e)) => {
            error!("delete {name} failed: {e}");
            outcome(StatusCode::NOT_FOUND, false)
        }
        Err(e) => internal_error("delete", e),
    }
}

async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, DELETE"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

fn to_entry(record: FileRecord) -> FileEntry {
    FileEntry {
        name: record.name,
        size: record.size,
        created_at: record.created_at,
        modified_at: record.modified_at,
        accessed_at: record.accessed_at,
        is_regular_file: record.is_regular_file,
        extension: record.extension,
    }
}

fn outcome(status: StatusCode, success: bool) -> Response {
    (status, Json(Outcome { success })).into_response()
}

fn error_body(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(error))).into_response()
}

fn internal_error(op: &str, err: impl Display) -> Response {
    error!("{op} failed: {err}");
    error_body(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
