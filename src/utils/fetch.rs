//! Network fetching utilities.
//!
//! Thin wrappers over the browser Fetch API. One request per call, no
//! retries and no timeout racing.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(url).await?;
    parse_json(&text)
}

/// Parse a response body, mapping failures to [`FetchError::JsonParseError`].
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch text from a URL using the Fetch API.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| "Unknown error".to_string()))
        })?;

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
