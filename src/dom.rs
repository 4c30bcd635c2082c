use crate::core::{Rect, StudioError};
use crate::core::constants::NARROW_VIEWPORT_MAX_PX;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::HtmlElement, StudioError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| StudioError::MissingElement(id.to_string()))
}

pub fn create_div(document: &web::Document, class: &str) -> Result<web::HtmlElement, StudioError> {
    let el = document
        .create_element("div")
        .map_err(js_error)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| StudioError::Js("div is not an HtmlElement".to_string()))?;
    el.set_class_name(class);
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// CSS viewport width, 0 when unavailable.
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn is_narrow_viewport() -> bool {
    viewport_width() <= NARROW_VIEWPORT_MAX_PX
}

pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Non-empty `data-*` override on an element.
pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name).filter(|v| !v.trim().is_empty())
}

pub fn js_error(e: JsValue) -> StudioError {
    StudioError::Js(
        e.as_string()
            .or_else(|| e.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
            .unwrap_or_else(|| format!("{:?}", e)),
    )
}

/// An event listener removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, StudioError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
