//! Thin wrappers over browser APIs used by pages.
//!
//! Browser-only behavior; other builds no-op.

#[cfg(feature = "csr")]
use crate::net::pipeline::FilePart;

/// Blocking `window.alert`, used for success notices.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Read a picked file into memory so it can travel as a multipart part.
///
/// # Errors
///
/// Returns a message when the browser refuses to hand over the bytes.
#[cfg(feature = "csr")]
pub async fn read_file(field: &str, file: &web_sys::File) -> Result<FilePart, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = file.type_();
    Ok(FilePart {
        field: field.to_owned(),
        file_name: file.name(),
        mime: if mime.is_empty() { "application/octet-stream".to_owned() } else { mime },
        bytes,
    })
}

/// Object URL for previewing a picked image.
#[cfg(feature = "csr")]
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}
