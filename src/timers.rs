use crate::core::StudioError;
use crate::dom::js_error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot timeouts registered under a single owner.
///
/// Cancelling, or dropping the set, clears every timeout that has not fired
/// yet and releases its closure. A callback must not drop the set that owns it.
#[derive(Default)]
pub struct TimerSet {
    pending: Vec<(i32, Closure<dyn FnMut()>)>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        delay_ms: u32,
        callback: impl FnOnce() + 'static,
    ) -> Result<(), StudioError> {
        let window = web::window().ok_or_else(|| StudioError::Js("no window".to_string()))?;
        let closure = Closure::once(callback);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .map_err(js_error)?;
        self.pending.push((handle, closure));
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some(window) = web::window() {
            for (handle, _) in &self.pending {
                window.clear_timeout_with_handle(*handle);
            }
        }
        self.pending.clear();
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A repeating timer, cleared on drop.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: i32, tick: impl FnMut() + 'static) -> Result<Self, StudioError> {
        let window = web::window().ok_or_else(|| StudioError::Js("no window".to_string()))?;
        let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(js_error)?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}
