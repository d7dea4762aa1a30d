//! Queue endpoint access over the browser fetch API.
//!
//! One GET against the queue endpoint per [`fetch_queue`] call.
//! There is no retry, no backoff, and no request de-duplication --
//! a failed fetch leaves the frame exactly as it was, and the caller
//! decides what to show.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use shashin_view::QueueResponse;

/// Errors from loading the photo queue.
///
/// Transport failures and malformed bodies are distinguished here
/// for logging, but the frame surfaces them identically: one error
/// report with a static message plus the failure detail.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// The fetch itself failed (network down, CORS, aborted).
    #[error("network error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("queue endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("malformed queue response: {0}")]
    Malformed(String),
}

impl From<JsValue> for QueueError {
    fn from(value: JsValue) -> Self {
        Self::Transport(format!("{value:?}"))
    }
}

/// Fetch the current photo queue.
///
/// Issues a single GET expecting a JSON [`QueueResponse`] body.
///
/// # Errors
///
/// Returns [`QueueError::Transport`] when the request cannot be
/// made or completed, [`QueueError::Status`] on a non-2xx response,
/// and [`QueueError::Malformed`] when the body fails to parse.
pub async fn fetch_queue(endpoint: &str) -> Result<QueueResponse, QueueError> {
    let window =
        web_sys::window().ok_or_else(|| QueueError::Transport("no global window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(endpoint)).await?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| QueueError::Transport("fetch did not yield a Response".into()))?;

    if !response.ok() {
        return Err(QueueError::Status(response.status()));
    }

    let body = JsFuture::from(response.text()?).await?;
    let body = body
        .as_string()
        .ok_or_else(|| QueueError::Malformed("response body is not text".into()))?;

    serde_json::from_str(&body).map_err(|e| QueueError::Malformed(e.to_string()))
}

/// Fire-and-forget POST asking the backend to persist the current
/// queue to its cache.
///
/// The response body is ignored and failures are swallowed -- this
/// call is an optimization hint, not a state change the UI tracks.
pub fn save_cached(endpoint: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    let promise = window.fetch_with_str_and_init(endpoint, &init);

    wasm_bindgen_futures::spawn_local(async move {
        let _ = JsFuture::from(promise).await;
    });
}
