//! Thin DOM helpers shared by every component.
//!
//! Listener registration follows the usual wasm-bindgen pattern: wrap the
//! handler in a `Closure`, attach, `forget()`. All wiring here lives for the
//! whole tab session, so the leak is the ownership model, not a bug.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use site_core::Viewport;

pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Current viewport snapshot; falls back to zero on a detached window.
pub fn viewport_now() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

/// Inline-style opacity, or 0 when absent/unparsable. Used to seed newly
/// tracked elements without a visible flash.
pub fn inline_opacity(el: &web::HtmlElement) -> f32 {
    el.style()
        .get_property_value("opacity")
        .ok()
        .and_then(|s| s.trim().parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// Lock or release page scrolling (mobile menu, lightbox).
pub fn set_body_scroll_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        set_style(&body, "overflow", if locked { "hidden" } else { "" });
    }
}

// ---------------- listener helpers ----------------

pub fn listen(target: &web::EventTarget, kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn listen_event(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn listen_mouse(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn listen_key(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::KeyboardEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::KeyboardEvent| handler(ev)) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Touch listener; `passive: false` is required wherever the handler calls
/// `prevent_default` (seek bars), passive everywhere else so scrolling stays
/// smooth.
pub fn listen_touch(
    target: &web::EventTarget,
    kind: &str,
    passive: bool,
    mut handler: impl FnMut(web::TouchEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::TouchEvent| handler(ev)) as Box<dyn FnMut(_)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Passive mouse listener for high-frequency events that only record intent.
pub fn listen_mouse_passive(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Passive listener for high-frequency events that only record intent.
pub fn listen_passive(target: &web::EventTarget, kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

// ---------------- intersection observer ----------------

/// Build an intersection observer delivering one entry at a time to
/// `handler`. Returns `None` if construction fails (ancient browser).
pub fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut handler: impl FnMut(web::IntersectionObserverEntry) + 'static,
) -> Option<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    handler(entry);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .ok();
    closure.forget();
    observer
}

// ---------------- one-shot timer ----------------

/// Fire-once timer that can be cleared and rearmed on new activity
/// (controls auto-hide, click-pulse reset, failure-message reset).
///
/// The callback closure is created once and reused across arms, so rearming
/// on every mousemove does not leak.
pub struct OneShot {
    cb: Closure<dyn FnMut()>,
    id: std::cell::Cell<Option<i32>>,
}

impl OneShot {
    pub fn new(mut handler: impl FnMut() + 'static) -> Self {
        Self {
            cb: Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>),
            id: std::cell::Cell::new(None),
        }
    }

    /// Schedule the callback `ms` from now, cancelling any pending arm.
    pub fn arm(&self, ms: i32) {
        self.clear();
        if let Some(w) = web::window() {
            if let Ok(id) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                self.cb.as_ref().unchecked_ref(),
                ms,
            ) {
                self.id.set(Some(id));
            }
        }
    }

    pub fn clear(&self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}
