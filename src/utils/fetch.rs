//! Same-origin text fetching with a timeout.

use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

/// Fetch a same-origin resource as text.
///
/// Non-2xx responses are reported as [`FetchError::HttpError`].
pub async fn fetch_text(url: &str, timeout_ms: i32) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response = settle_within(&window, window.fetch_with_request(&request), timeout_ms)
        .await?
        .ok_or(FetchError::Timeout)?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

/// Await `promise`, or `None` once `timeout_ms` has elapsed.
///
/// The timer resolves to `undefined`, which a fetch never does.
async fn settle_within(
    window: &web_sys::Window,
    promise: Promise,
    timeout_ms: i32,
) -> Result<Option<JsValue>, FetchError> {
    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let settled = JsFuture::from(Promise::race(&Array::of2(&promise, &timer)))
        .await
        .map_err(|e| FetchError::NetworkError(e.as_string().unwrap_or_else(|| format!("{e:?}"))))?;
    Ok((!settled.is_undefined()).then_some(settled))
}
