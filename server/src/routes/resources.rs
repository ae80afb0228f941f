//! Generic CRUD routes mounted once per record type.
//!
//! SYSTEM CONTEXT
//! ==============
//! For a resource with path `P` this serves `GET/POST /api/P` and
//! `GET/PUT/DELETE /api/P/{id}`. Bodies are JSON records; resources that
//! carry a document also accept `multipart/form-data` with a `payload` part
//! holding the record JSON and an optional `file` part.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use axum::Router;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::get;
use records::{Envelope, Resource};
use tracing::info;

use super::error::ApiError;
use crate::services::repo::{self, RepoError, Table};
use crate::services::uploads;
use crate::state::AppState;

/// Routes for one resource.
pub fn routes<R: Table>() -> Router<AppState> {
    Router::new()
        .route(&format!("/api/{}", R::PATH), get(list::<R>).post(create::<R>))
        .route(
            &format!("/api/{}/{{id}}", R::PATH),
            get(show::<R>).put(update::<R>).delete(destroy::<R>),
        )
}

/// A decoded create/update body.
struct Submission<R> {
    record: R,
    file: Option<FileUpload>,
}

struct FileUpload {
    name: String,
    bytes: Bytes,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/:resource`: list all records.
async fn list<R: Table>(State(state): State<AppState>) -> Result<Json<Envelope<Vec<R>>>, ApiError> {
    let rows = repo::list::<R>(&state.pool).await?;
    Ok(Json(Envelope::new(rows)))
}

/// `GET /api/:resource/:id`: fetch one record.
async fn show<R: Table>(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Envelope<R>>, ApiError> {
    let row = repo::get::<R>(&state.pool, id).await?;
    Ok(Json(Envelope::new(row)))
}

/// `POST /api/:resource`: create a record, storing an attached file first.
///
/// The stored file is removed again if the insert fails.
async fn create<R: Table>(
    State(state): State<AppState>,
    request: Request,
) -> Result<(StatusCode, Json<Envelope<R>>), ApiError> {
    let Submission { mut record, file } = read_submission::<R>(&state, request).await?;
    let mut uploaded = None;
    if let Some(file) = file {
        let path = uploads::store(&state.config.upload_dir, R::PATH, &file.name, &file.bytes).await?;
        record.set_attachment(Some(path.clone()));
        uploaded = Some(path);
    }

    let stored = match repo::insert(&state.pool, &record).await {
        Ok(stored) => stored,
        Err(e) => return Err(abandon(&state, uploaded.as_deref(), e).await),
    };
    info!(resource = R::PATH, id = stored.id(), "record created");
    Ok((StatusCode::CREATED, Json(Envelope::new(stored))))
}

/// `PUT /api/:resource/:id`: replace a record.
///
/// An update without a new file keeps the previously stored document.
async fn update<R: Table>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<Envelope<R>>, ApiError> {
    let Submission { mut record, file } = read_submission::<R>(&state, request).await?;
    record.set_id(id);

    let mut uploaded = None;
    if R::ATTACHMENT {
        if let Some(file) = file {
            let path = uploads::store(&state.config.upload_dir, R::PATH, &file.name, &file.bytes).await?;
            record.set_attachment(Some(path.clone()));
            uploaded = Some(path);
        } else if record.attachment().is_none() {
            let existing = repo::get::<R>(&state.pool, id).await?;
            record.set_attachment(existing.attachment().map(str::to_owned));
        }
    }

    let stored = match repo::update(&state.pool, id, &record).await {
        Ok(stored) => stored,
        Err(e) => return Err(abandon(&state, uploaded.as_deref(), e).await),
    };
    info!(resource = R::PATH, id, "record updated");
    Ok(Json(Envelope::new(stored)))
}

/// `DELETE /api/:resource/:id`: delete a record.
async fn destroy<R: Table>(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    repo::delete::<R>(&state.pool, id).await?;
    info!(resource = R::PATH, id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Remove the file stored for a write that failed, then surface the error.
async fn abandon(state: &AppState, uploaded: Option<&str>, err: RepoError) -> ApiError {
    if let Some(path) = uploaded {
        uploads::discard(&state.config.upload_dir, path).await;
    }
    err.into()
}

// =============================================================================
// BODY DECODING
// =============================================================================

pub(crate) fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

/// Parse the `payload` part of a multipart submission.
pub(crate) fn parse_payload<R: Resource>(text: &str) -> Result<R, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Unprocessable(format!("invalid {} payload: {e}", R::TITLE)))
}

async fn read_submission<R: Table>(state: &AppState, request: Request) -> Result<Submission<R>, ApiError> {
    if !is_multipart(request.headers()) {
        let Json(record) = Json::<R>::from_request(request, state)
            .await
            .map_err(|e| ApiError::Rejected { status: e.status(), message: e.body_text() })?;
        return Ok(Submission { record, file: None });
    }

    if !R::ATTACHMENT {
        return Err(ApiError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: format!("{} does not accept file uploads", R::PLURAL),
        });
    }

    let multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| ApiError::Rejected { status: e.status(), message: e.body_text() })?;
    read_multipart(multipart).await
}

async fn read_multipart<R: Resource>(mut multipart: Multipart) -> Result<Submission<R>, ApiError> {
    let mut record = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("payload") => {
                let text = field.text().await.map_err(multipart_error)?;
                record = Some(parse_payload::<R>(&text)?);
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_owned();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if !bytes.is_empty() {
                    file = Some(FileUpload { name: filename, bytes });
                }
            }
            _ => {}
        }
    }

    let record = record.ok_or_else(|| ApiError::Unprocessable("multipart body has no payload part".to_owned()))?;
    Ok(Submission { record, file })
}

fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::Rejected { status: err.status(), message: err.body_text() }
}
