use crate::core::{Method, StudioError};
use crate::dom::js_error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub enum Body {
    Empty,
    Json(String),
    Form(web::FormData),
}

pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    #[inline]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body when the status is 2xx, otherwise an `Http` error.
    pub fn into_ok_body(self) -> Result<String, StudioError> {
        if self.ok() {
            Ok(self.body)
        } else {
            Err(StudioError::Http(self.status))
        }
    }
}

/// One `fetch` round trip. No retries.
pub async fn send(
    method: Method,
    url: &str,
    bearer: Option<&str>,
    body: Body,
) -> Result<Reply, StudioError> {
    let window = web::window().ok_or_else(|| StudioError::Js("no window".into()))?;
    let headers = web::Headers::new().map_err(js_error)?;
    if let Some(bearer) = bearer {
        headers.set("Authorization", bearer).map_err(js_error)?;
    }
    let init = web::RequestInit::new();
    init.set_method(method.as_str());
    match body {
        Body::Empty => {}
        Body::Json(json) => {
            headers
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
            init.set_body(&JsValue::from_str(&json));
        }
        // the browser supplies the multipart boundary header itself
        Body::Form(form) => init.set_body(&form),
    }
    init.set_headers(&headers);

    let request = web::Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let status = response.status();
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    log::debug!("[http] {} {} -> {}", method.as_str(), url, status);
    Ok(Reply {
        status,
        body: text.as_string().unwrap_or_default(),
    })
}
