//! REST API wrappers for record collections.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! DESIGN
//! ======
//! Every resource shares one URL scheme (`/api/<path>` and
//! `/api/<path>/<id>`), so a single generic wrapper per verb replaces
//! per-entity fetch helpers. Records with an uploaded document are sent as
//! `multipart/form-data` with a `payload` part carrying the JSON record and
//! an optional `file` part.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies map to
//! distinct [`ApiError`] variants. Callers log and surface one alert; there
//! is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{RecordError, Resource};

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
    /// The response body did not hold the expected record(s).
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available during server rendering")]
    Unavailable,
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A file chosen in a form's file input.
#[derive(Clone, Debug)]
pub struct Upload {
    pub name: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

#[cfg(feature = "hydrate")]
impl From<web_sys::File> for Upload {
    fn from(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }
}

/// CRUD operations over any [`Resource`] collection.
#[allow(async_fn_in_trait)]
pub trait ResourceApi {
    /// `GET /api/<path>`.
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError>;

    /// `GET /api/<path>/<id>`.
    async fn get<R: Resource>(&self, id: i64) -> Result<R, ApiError>;

    /// `POST /api/<path>`, multipart when `file` is given.
    async fn create<R: Resource>(&self, record: &R, file: Option<&Upload>) -> Result<R, ApiError>;

    /// `PUT /api/<path>/<id>`, multipart when `file` is given.
    async fn update<R: Resource>(&self, id: i64, record: &R, file: Option<&Upload>) -> Result<R, ApiError>;

    /// `DELETE /api/<path>/<id>`.
    async fn delete<R: Resource>(&self, id: i64) -> Result<(), ApiError>;
}

/// `localStorage` key holding an optional API bearer token.
pub const AUTH_TOKEN_KEY: &str = "procura.auth_token";

#[cfg(any(test, feature = "hydrate"))]
/// `Authorization` header value for a stored token; blank tokens send nothing.
pub(crate) fn bearer_header(token: Option<&str>) -> Option<String> {
    let token = token?.trim();
    (!token.is_empty()).then(|| format!("Bearer {token}"))
}

#[cfg(any(test, feature = "hydrate"))]
/// Error for a non-success response, preferring the server's message.
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    let message = records::envelope::error_message(body).unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Status { status, message }
}

/// The HTTP implementation used by the console.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl ResourceApi for HttpApi {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = http::send(http::build(http::request(http::Method::Get, &records::resource::collection_url::<R>()))?).await?;
            Ok(records::envelope::decode_list::<R>(&body)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn get<R: Resource>(&self, id: i64) -> Result<R, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = http::send(http::build(http::request(http::Method::Get, &records::resource::member_url::<R>(id)))?).await?;
            Ok(records::envelope::decode_one::<R>(&body)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create<R: Resource>(&self, record: &R, file: Option<&Upload>) -> Result<R, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = http::request(http::Method::Post, &records::resource::collection_url::<R>());
            let body = http::send(http::with_record(builder, record, file)?).await?;
            Ok(records::envelope::decode_one::<R>(&body)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (record, file);
            Err(ApiError::Unavailable)
        }
    }

    async fn update<R: Resource>(&self, id: i64, record: &R, file: Option<&Upload>) -> Result<R, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = http::request(http::Method::Put, &records::resource::member_url::<R>(id));
            let body = http::send(http::with_record(builder, record, file)?).await?;
            Ok(records::envelope::decode_one::<R>(&body)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, record, file);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete<R: Resource>(&self, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            http::send(http::build(http::request(http::Method::Delete, &records::resource::member_url::<R>(id)))?).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder};
    use leptos::logging::warn;
    use serde::Serialize;

    use super::{AUTH_TOKEN_KEY, ApiError, Upload, bearer_header, status_error};

    pub(super) enum Method {
        Get,
        Post,
        Put,
        Delete,
    }

    /// Start a request with the bearer interceptor applied.
    pub(super) fn request(method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        match bearer_header(stored_token().as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    fn stored_token() -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(AUTH_TOKEN_KEY).ok().flatten()
    }

    /// Attach `record` as JSON, or as multipart when a file accompanies it.
    pub(super) fn with_record<R: Serialize>(
        builder: RequestBuilder,
        record: &R,
        file: Option<&Upload>,
    ) -> Result<Request, ApiError> {
        let Some(upload) = file else {
            return builder.json(record).map_err(|e| ApiError::Network(e.to_string()));
        };

        let payload = serde_json::to_string(record).map_err(|e| ApiError::Decode(e.to_string()))?;
        let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_str("payload", &payload)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_blob_and_filename("file", &upload.file, &upload.name)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        builder.body(form).map_err(|e| ApiError::Network(e.to_string()))
    }

    pub(super) fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder.build().map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Send and return the body text of a successful response.
    pub(super) async fn send(request: Request) -> Result<String, ApiError> {
        let url = request.url();
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            warn!("{url} answered {status}");
            return Err(status_error(status, &body));
        }
        Ok(body)
    }
}
