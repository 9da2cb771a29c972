//! Browser transport: `fetch` via `gloo-net`, bounded by a timer.
//!
//! Off-browser builds get a stub that reports [`ApiError::Unavailable`].

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::pipeline::{ApiRequest, ApiResponse, Transport};
#[cfg(feature = "csr")]
use super::pipeline::{FilePart, Method, RequestBody};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserTransport {
    timeout_ms: u64,
}

impl BrowserTransport {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            send_with_timeout(request, self.timeout_ms).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn send_with_timeout(request: ApiRequest, timeout_ms: u64) -> Result<ApiResponse, ApiError> {
    use futures::future::{Either, select};

    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(web_sys::AbortController::signal);

    let mut builder = match request.method {
        Method::Get => gloo_net::http::Request::get(&request.url),
        Method::Post => gloo_net::http::Request::post(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    builder = builder.abort_signal(signal.as_ref());

    let prepared = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(json) => builder.body(json),
        RequestBody::Multipart { fields, file } => builder.body(form_data(&fields, file.as_ref())?),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let timeout = gloo_timers::future::TimeoutFuture::new(u32::try_from(timeout_ms).unwrap_or(u32::MAX));
    let response = match select(Box::pin(prepared.send()), timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Transport(e.to_string()))?,
        Either::Right(((), _)) => {
            if let Some(controller) = controller {
                controller.abort();
            }
            return Err(ApiError::Timeout(timeout_ms));
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "csr")]
fn form_data(fields: &[(String, String)], file: Option<&FilePart>) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    if let Some(file) = file {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        form.append_with_blob_and_filename(&file.field, &blob, &file.file_name).map_err(js_err)?;
    }
    Ok(form)
}
