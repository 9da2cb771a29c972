//! The one wrapping layer every API call goes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never talk to a transport directly. [`ApiClient::execute`]:
//! 1. attaches `Authorization: Bearer <credential>` when a credential exists,
//! 2. hands the request to the [`Transport`] (which owns the timeout),
//! 3. turns a 401 into a global session teardown, and every other non-2xx
//!    status into an [`ApiError::Status`] for the caller.
//!
//! The pipeline never retries and never rewrites payloads.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::future::Future;
use std::sync::Arc;

use leptos::logging::error;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::session::Session;

pub const AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// File attached to a multipart request, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Json(String),
    /// Sent as `multipart/form-data`; the browser picks the boundary.
    Multipart { fields: Vec<(String, String)>, file: Option<FilePart> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), headers: Vec::new(), body: RequestBody::Empty }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `body` cannot be serialized.
    pub fn post_json<B: Serialize + ?Sized>(url: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())],
            body: RequestBody::Json(json),
        })
    }

    pub fn post_multipart(url: impl Into<String>, fields: Vec<(String, String)>, file: Option<FilePart>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Multipart { fields, file },
        }
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a header, replacing any existing value under the same name.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a prepared request. Implementations own the timeout and report an
/// expired wait as [`ApiError::Timeout`].
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Canonical header value for a stored credential. Idempotent.
pub fn authorization_value(credential: &str) -> String {
    if credential.starts_with(BEARER_PREFIX) {
        credential.to_owned()
    } else {
        format!("{BEARER_PREFIX}{credential}")
    }
}

/// Attach the credential, or leave the request untouched when there is none.
pub fn attach_credential(request: ApiRequest, credential: Option<&str>) -> ApiRequest {
    match credential {
        Some(credential) => request.with_header(AUTHORIZATION, authorization_value(credential)),
        None => request,
    }
}

/// Session-aware API client, composed once at startup and shared via context.
#[derive(Clone)]
pub struct ApiClient<T> {
    config: Arc<ClientConfig>,
    session: Session,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &ClientConfig, session: Session, transport: T) -> Self {
        Self { config: Arc::new(config.clone()), session, transport }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Send `request` through the pipeline.
    ///
    /// # Errors
    ///
    /// Transport failures and timeouts pass through unchanged. A 401 tears the
    /// session down and yields [`ApiError::Unauthorized`]; any other non-2xx
    /// status yields [`ApiError::Status`].
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = attach_credential(request, self.session.credential().as_deref());
        let response = self.transport.send(request).await?;
        self.inspect(response)
    }

    fn inspect(&self, response: ApiResponse) -> Result<ApiResponse, ApiError> {
        if response.status == 401 {
            self.session.teardown();
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`]; also [`ApiError::Decode`] for a bad body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.execute(ApiRequest::get(self.url(path))).await?;
        decode_body(&response)
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`]; also [`ApiError::Decode`] for a bad body.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.execute(ApiRequest::post_json(self.url(path), body)?).await?;
        decode_body(&response)
    }

    /// POST where the response body is ignored.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn post_json_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute(ApiRequest::post_json(self.url(path), body)?).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn post_multipart(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        file: Option<FilePart>,
    ) -> Result<(), ApiError> {
        self.execute(ApiRequest::post_multipart(self.url(path), fields, file)).await?;
        Ok(())
    }
}

fn decode_body<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        error!("response decode failed (status {}): {e}", response.status);
        ApiError::Decode(e.to_string())
    })
}
