//! Browser interop for the dismiss hook
//!
//! Listeners are owned values: [`ScopedListener`] keeps its `Closure` alive
//! while attached and detaches it in `Drop`. Hold one in a signal and clear
//! the signal to detach; unmounting the owner clears it too.

use article_common::{Bounds, Point};
use wasm_bindgen_x::prelude::*;

/// An event listener on a DOM target, detached when dropped
pub struct ScopedListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl ScopedListener {
    /// Listen on the current document; `None` outside a browser page.
    pub fn on_document(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Option<Self> {
        let target: web_sys_x::EventTarget = document()?.into();
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));
        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event_name,
            callback,
        })
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_name, self.callback.as_ref().unchecked_ref());
    }
}

pub fn document() -> Option<web_sys_x::Document> {
    web_sys_x::window().and_then(|w| w.document())
}

/// Viewport rectangle of the element with the given id, if it is mounted
pub fn element_bounds(id: &str) -> Option<Bounds> {
    let rect = document()?.get_element_by_id(id)?.get_bounding_client_rect();
    Some(Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// Rectangles of the mounted elements among `ids`; unmounted ones are skipped
pub fn region_bounds(ids: &[String]) -> Vec<Bounds> {
    ids.iter().filter_map(|id| element_bounds(id)).collect()
}

/// `clientX`/`clientY` of a pointer or mouse event
pub fn pointer_position(event: &JsValue) -> Option<Point> {
    let coord = |key: &str| {
        js_sys_x::Reflect::get(event, &key.into())
            .ok()
            .and_then(|v| v.as_f64())
    };
    Some(Point {
        x: coord("clientX")?,
        y: coord("clientY")?,
    })
}

/// `key` of a keyboard event
pub fn event_key(event: &JsValue) -> Option<String> {
    js_sys_x::Reflect::get(event, &"key".into())
        .ok()
        .and_then(|v| v.as_string())
}
